//! Line commands accepted by `bookfind browse`

use anyhow::{bail, Result};
use bookfind_core::{Action, ClearTarget, FilterKind, FilterValue, Page, PageNav};

pub const HELP: &str = "\
Type to search titles and authors. Commands:
  :lang VALUE          toggle a language
  :copyright VALUE     toggle a copyright status
  :category VALUE      toggle a category
  :sort VALUE          set the sort order
  :page N | :next | :prev
  :clear KIND [VALUE]  remove one filter (search, language, copyright, category)
  :clear-all           remove every filter
  :filters             list filter values
  :help                show this help
  :quit                leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Action(Action),
    Filters,
    Help,
    Quit,
    Empty,
}

pub fn parse_line(line: &str) -> Result<Input> {
    let Some(command) = line.trim_start().strip_prefix(':') else {
        if line.trim().is_empty() {
            return Ok(Input::Empty);
        }
        return Ok(Input::Action(Action::SetSearch(line.to_string())));
    };

    let (name, arg) = match command.trim().split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };

    let action = match name {
        "search" | "s" => Action::SetSearch(arg.to_string()),
        "lang" | "language" => Action::ToggleLanguage(value(arg, name)?),
        "copyright" => Action::ToggleCopyright(value(arg, name)?),
        "category" | "topic" => Action::ToggleCategory(value(arg, name)?),
        "sort" => Action::SetSort(value(arg, name)?),
        "page" => Action::SetPage(PageNav::To(arg.parse::<Page>()?)),
        "next" | "n" => Action::SetPage(PageNav::Next),
        "prev" | "previous" | "p" => Action::SetPage(PageNav::Previous),
        "clear" => Action::ClearFilter(clear_target(arg)?),
        "clear-all" | "reset" => Action::ClearAll,
        "filters" => return Ok(Input::Filters),
        "help" | "h" | "?" => return Ok(Input::Help),
        "quit" | "q" | "exit" => return Ok(Input::Quit),
        other => bail!("Unknown command :{} (try :help)", other),
    };

    Ok(Input::Action(action))
}

fn value<T: FilterValue>(arg: &str, command: &str) -> Result<T> {
    if arg.is_empty() {
        bail!(":{} needs a value (see :filters)", command);
    }
    Ok(T::parse(arg)?)
}

fn clear_target(arg: &str) -> Result<ClearTarget> {
    let (kind, rest) = match arg.split_once(char::is_whitespace) {
        Some((kind, rest)) => (kind, rest.trim()),
        None => (arg, ""),
    };
    if kind.is_empty() {
        bail!(":clear needs a filter kind (search, language, copyright, category)");
    }

    let target = match kind.parse::<FilterKind>()? {
        FilterKind::Search => ClearTarget::Search,
        FilterKind::Language => ClearTarget::Language(value(rest, "clear language")?),
        FilterKind::Copyright => ClearTarget::Copyright(value(rest, "clear copyright")?),
        FilterKind::Category => ClearTarget::Category(value(rest, "clear category")?),
        FilterKind::Sort => bail!("Sort is not a removable filter; use :sort popular"),
    };
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookfind_core::{Category, Copyright, Language, SortOrder};

    fn action(line: &str) -> Action {
        match parse_line(line).unwrap() {
            Input::Action(action) => action,
            other => panic!("expected an action, got {:?}", other),
        }
    }

    #[test]
    fn test_plain_text_searches() {
        assert_eq!(action("war and peace"), Action::SetSearch("war and peace".into()));
        assert_eq!(action(":search  tom "), Action::SetSearch("tom".into()));
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert_eq!(parse_line("   ").unwrap(), Input::Empty);
    }

    #[test]
    fn test_toggles_accept_terms_and_labels() {
        assert_eq!(action(":lang fr"), Action::ToggleLanguage(Language::French));
        assert_eq!(action(":lang German"), Action::ToggleLanguage(Language::German));
        assert_eq!(action(":copyright yes"), Action::ToggleCopyright(Copyright::Yes));
        assert_eq!(
            action(":category science fiction"),
            Action::ToggleCategory(Category::ScienceFiction)
        );
        assert_eq!(action(":sort descending"), Action::SetSort(SortOrder::Descending));
    }

    #[test]
    fn test_paging() {
        assert_eq!(
            action(":page 4"),
            Action::SetPage(PageNav::To(Page::new(4).unwrap()))
        );
        assert_eq!(action(":next"), Action::SetPage(PageNav::Next));
        assert_eq!(action(":prev"), Action::SetPage(PageNav::Previous));
        assert!(parse_line(":page 0").is_err());
        assert!(parse_line(":page two").is_err());
    }

    #[test]
    fn test_clear_targets() {
        assert_eq!(action(":clear search"), Action::ClearFilter(ClearTarget::Search));
        assert_eq!(
            action(":clear lang la"),
            Action::ClearFilter(ClearTarget::Language(Language::Latin))
        );
        assert_eq!(
            action(":clear topic horror"),
            Action::ClearFilter(ClearTarget::Category(Category::Horror))
        );
        assert_eq!(action(":clear-all"), Action::ClearAll);
        assert!(parse_line(":clear").is_err());
        assert!(parse_line(":clear sort").is_err());
        assert!(parse_line(":clear language").is_err());
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(parse_line(":quit").unwrap(), Input::Quit);
        assert_eq!(parse_line(":help").unwrap(), Input::Help);
        assert_eq!(parse_line(":filters").unwrap(), Input::Filters);
    }

    #[test]
    fn test_unknown_input_is_rejected() {
        let err = parse_line(":frobnicate").unwrap_err();
        assert!(err.to_string().contains("Unknown command :frobnicate"));
        let err = parse_line(":lang klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }
}
