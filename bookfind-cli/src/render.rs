//! Plain-text rendering of the browser view

use bookfind_core::store::active_filters;
use bookfind_core::{
    Book, Category, Copyright, FetchResult, FilterValue, Language, QueryState, SortOrder,
};
use std::fmt::Write;

/// Full view: filter chips, error, results, pagination
pub fn render(state: &QueryState, result: &FetchResult) -> String {
    let mut lines = Vec::new();

    if let Some(chips) = render_chips(state) {
        lines.push(chips);
    }
    if let Some(error) = &result.error {
        lines.push(error.clone());
    }
    if let Some(results) = render_results(result) {
        lines.push(results);
    }
    lines.push(render_pagination(state));

    lines.join("\n")
}

/// `None` when no filter is active
pub fn render_chips(state: &QueryState) -> Option<String> {
    if !state.has_active_filters() {
        return None;
    }

    let mut line = String::from("Active:");
    for chip in active_filters(state) {
        let _ = write!(line, " {} [x] |", chip.label);
    }
    line.push_str(" [Remove All]");
    Some(line)
}

/// `None` when a failure left nothing to show
pub fn render_results(result: &FetchResult) -> Option<String> {
    if result.is_loading {
        return Some("Loading...".to_string());
    }
    if result.is_empty() {
        return Some("No Results Found".to_string());
    }
    if result.items.is_empty() {
        return None;
    }

    let entries: Vec<String> = result
        .items
        .iter()
        .enumerate()
        .map(|(i, book)| render_book(i + 1, book))
        .collect();
    Some(entries.join("\n"))
}

fn render_book(position: usize, book: &Book) -> String {
    let mut entry = format!("{}. {}", position, book.title);
    if let Some(author) = book.primary_author() {
        let _ = write!(entry, "\n   by {}", author);
    }
    if let Some(cover) = book.cover_image_url() {
        let _ = write!(entry, "\n   cover: {}", cover);
    }
    entry
}

/// Previous is only offered past the first page
pub fn render_pagination(state: &QueryState) -> String {
    if state.page.is_first() {
        format!("Page {} | Next >", state.page)
    } else {
        format!("< Previous | Page {} | Next >", state.page)
    }
}

/// Every selectable value, grouped by filter
pub fn render_filters() -> String {
    let mut out = String::new();
    section::<Language>(&mut out, "Languages (--language, :lang)");
    section::<Copyright>(&mut out, "Copyright (--copyright, :copyright)");
    section::<Category>(&mut out, "Categories (--category, :category)");
    section::<SortOrder>(&mut out, "Sort (--sort, :sort)");
    out.trim_end().to_string()
}

fn section<T: FilterValue>(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}:", title);
    for value in T::ALL {
        let _ = writeln!(out, "  {:<18}{}", value.term(), value.label());
    }
    out.push('\n');
}
