//! Query state transitions
//!
//! Every user interaction is an [`Action`]. [`reduce`] is a pure function from
//! the current [`QueryState`] and an action to the next state plus the
//! [`Effect`] the synchronizer must carry out. [`QueryStore`] owns one state
//! and applies actions to it.

use crate::types::{Category, Copyright, FilterValue, Language, Page, QueryState, SortOrder};
use std::collections::BTreeSet;

/// Page navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Jump to a specific page
    To(Page),
    /// One page back; inert on the first page
    Previous,
    /// One page forward; always offered
    Next,
}

/// A single active filter value to remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    Search,
    Language(Language),
    Copyright(Copyright),
    Category(Category),
}

/// A user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearch(String),
    ToggleLanguage(Language),
    ToggleCopyright(Copyright),
    ToggleCategory(Category),
    SetSort(SortOrder),
    SetPage(PageNav),
    ClearFilter(ClearTarget),
    ClearAll,
}

/// What has to happen after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    None,
    /// Fetch now
    Sync,
    /// (Re)start the search debounce timer
    ScheduleSearch,
    /// Drop any pending search timer, then fetch now
    CancelSearchAndSync,
}

/// An active filter as shown to the user, with the action that removes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub label: String,
    pub target: ClearTarget,
}

/// Compute the next state for an action
pub fn reduce(mut state: QueryState, action: Action) -> (QueryState, Effect) {
    let effect = match action {
        Action::SetSearch(text) => {
            state.search_term = text;
            Effect::ScheduleSearch
        }
        Action::ToggleLanguage(lang) => {
            toggle(&mut state.languages, lang);
            Effect::Sync
        }
        Action::ToggleCopyright(flag) => {
            toggle(&mut state.copyright, flag);
            Effect::Sync
        }
        Action::ToggleCategory(category) => {
            toggle(&mut state.categories, category);
            Effect::Sync
        }
        Action::SetSort(sort) => {
            state.sort = sort;
            Effect::Sync
        }
        Action::SetPage(nav) => {
            let target = match nav {
                PageNav::To(page) => Some(page),
                PageNav::Previous => state.page.previous(),
                PageNav::Next => Some(state.page.next()),
            };
            match target {
                Some(page) if page != state.page => {
                    state.page = page;
                    Effect::Sync
                }
                _ => Effect::None,
            }
        }
        Action::ClearFilter(target) => {
            state.page = Page::FIRST;
            match target {
                ClearTarget::Search => {
                    state.search_term.clear();
                    Effect::CancelSearchAndSync
                }
                ClearTarget::Language(lang) => {
                    state.languages.remove(&lang);
                    Effect::Sync
                }
                ClearTarget::Copyright(flag) => {
                    state.copyright.remove(&flag);
                    Effect::Sync
                }
                ClearTarget::Category(category) => {
                    state.categories.remove(&category);
                    Effect::Sync
                }
            }
        }
        Action::ClearAll => {
            state = QueryState::default();
            Effect::CancelSearchAndSync
        }
    };

    (state, effect)
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Owner of the current query selection
#[derive(Debug, Clone, Default)]
pub struct QueryStore {
    state: QueryState,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing selection
    pub fn with_state(state: QueryState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Apply an action and return the effect to carry out
    pub fn apply(&mut self, action: Action) -> Effect {
        let (next, effect) = reduce(std::mem::take(&mut self.state), action);
        self.state = next;
        effect
    }

    /// Back to the first page, as a fresh search does
    pub fn reset_page(&mut self) {
        self.state.page = Page::FIRST;
    }

    pub fn set_search(&mut self, text: impl Into<String>) -> Effect {
        self.apply(Action::SetSearch(text.into()))
    }

    pub fn toggle_language(&mut self, lang: Language) -> Effect {
        self.apply(Action::ToggleLanguage(lang))
    }

    pub fn toggle_copyright(&mut self, flag: Copyright) -> Effect {
        self.apply(Action::ToggleCopyright(flag))
    }

    pub fn toggle_category(&mut self, category: Category) -> Effect {
        self.apply(Action::ToggleCategory(category))
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> Effect {
        self.apply(Action::SetSort(sort))
    }

    pub fn set_page(&mut self, nav: PageNav) -> Effect {
        self.apply(Action::SetPage(nav))
    }

    pub fn clear_filter(&mut self, target: ClearTarget) -> Effect {
        self.apply(Action::ClearFilter(target))
    }

    pub fn clear_all(&mut self) -> Effect {
        self.apply(Action::ClearAll)
    }

    /// Active filter chips: search text, languages, copyright, categories
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        active_filters(&self.state)
    }
}

/// Active filter chips for a selection
pub fn active_filters(state: &QueryState) -> Vec<ActiveFilter> {
    let mut chips = Vec::new();

    let search = state.trimmed_search();
    if !search.is_empty() {
        chips.push(ActiveFilter {
            label: search.to_string(),
            target: ClearTarget::Search,
        });
    }
    chips.extend(state.languages.iter().map(|&lang| ActiveFilter {
        label: lang.label().to_string(),
        target: ClearTarget::Language(lang),
    }));
    chips.extend(state.copyright.iter().map(|&flag| ActiveFilter {
        label: format!("Copyright: {}", flag.label()),
        target: ClearTarget::Copyright(flag),
    }));
    chips.extend(state.categories.iter().map(|&category| ActiveFilter {
        label: category.label().to_string(),
        target: ClearTarget::Category(category),
    }));

    chips
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_search_schedules() {
        let mut store = QueryStore::new();
        assert_eq!(store.set_search("dracula"), Effect::ScheduleSearch);
        assert_eq!(store.state().search_term, "dracula");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = QueryStore::new();
        store.toggle_language(Language::French);
        let before = store.state().clone();

        assert_eq!(store.toggle_language(Language::English), Effect::Sync);
        assert!(store.state().languages.contains(&Language::English));
        assert_eq!(store.toggle_language(Language::English), Effect::Sync);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_toggles_keep_page() {
        let mut store = QueryStore::new();
        store.set_page(PageNav::To(Page::new(4).unwrap()));
        store.toggle_copyright(Copyright::No);
        store.toggle_category(Category::Horror);
        store.set_sort(SortOrder::Ascending);
        assert_eq!(store.state().page.get(), 4);
    }

    #[test]
    fn test_previous_on_first_page_is_inert() {
        let mut store = QueryStore::new();
        let before = store.state().clone();
        assert_eq!(store.set_page(PageNav::Previous), Effect::None);
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_page_navigation() {
        let mut store = QueryStore::new();
        assert_eq!(store.set_page(PageNav::Next), Effect::Sync);
        assert_eq!(store.set_page(PageNav::Next), Effect::Sync);
        assert_eq!(store.state().page.get(), 3);
        assert_eq!(store.set_page(PageNav::Previous), Effect::Sync);
        assert_eq!(store.state().page.get(), 2);
        assert_eq!(store.set_page(PageNav::To(Page::new(2).unwrap())), Effect::None);
        assert_eq!(store.set_page(PageNav::To(Page::FIRST)), Effect::Sync);
        assert!(store.state().page.is_first());
    }

    #[test]
    fn test_clear_filter_resets_page() {
        let mut store = QueryStore::new();
        store.toggle_language(Language::English);
        store.toggle_language(Language::Latin);
        store.set_page(PageNav::Next);

        let effect = store.clear_filter(ClearTarget::Language(Language::English));
        assert_eq!(effect, Effect::Sync);
        assert_eq!(
            store.state().languages.iter().copied().collect::<Vec<_>>(),
            vec![Language::Latin]
        );
        assert!(store.state().page.is_first());
    }

    #[test]
    fn test_clear_search_cancels_pending() {
        let mut store = QueryStore::new();
        store.set_search("frankenstein");
        assert_eq!(
            store.clear_filter(ClearTarget::Search),
            Effect::CancelSearchAndSync
        );
        assert!(store.state().search_term.is_empty());
    }

    #[test]
    fn test_clear_all_restores_defaults() {
        let mut store = QueryStore::new();
        store.set_search("moby dick");
        store.toggle_language(Language::English);
        store.toggle_copyright(Copyright::Yes);
        store.toggle_category(Category::Fantasy);
        store.set_sort(SortOrder::Descending);
        store.set_page(PageNav::Next);

        assert_eq!(store.clear_all(), Effect::CancelSearchAndSync);
        assert_eq!(store.state(), &QueryState::default());
    }

    #[test]
    fn test_active_filters_order_and_labels() {
        let mut store = QueryStore::new();
        store.toggle_category(Category::ScienceFiction);
        store.toggle_copyright(Copyright::Yes);
        store.toggle_language(Language::German);
        store.set_search(" verne ");

        let labels: Vec<_> = store
            .active_filters()
            .into_iter()
            .map(|chip| chip.label)
            .collect();
        assert_eq!(
            labels,
            vec!["verne", "German", "Copyright: Yes", "Science Fiction"]
        );
    }

    #[test]
    fn test_active_filter_target_removes_it() {
        let mut store = QueryStore::new();
        store.toggle_category(Category::Romance);
        let chip = store.active_filters().remove(0);
        store.clear_filter(chip.target);
        assert!(store.active_filters().is_empty());
    }
}
