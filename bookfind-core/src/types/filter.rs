//! Fixed filter and sort vocabularies offered by the browser

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which part of the query a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Search,
    Language,
    Copyright,
    Category,
    Sort,
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Search => "search",
            Self::Language => "language",
            Self::Copyright => "copyright",
            Self::Category => "category",
            Self::Sort => "sort",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "search" => Ok(Self::Search),
            "language" | "languages" | "lang" => Ok(Self::Language),
            "copyright" => Ok(Self::Copyright),
            "category" | "topic" => Ok(Self::Category),
            "sort" => Ok(Self::Sort),
            _ => Err(ParseError::UnknownKind(s.to_string())),
        }
    }
}

/// A value drawn from one of the fixed vocabularies
pub trait FilterValue: Copy + Ord + Sized + 'static {
    /// Every value, in display order
    const ALL: &'static [Self];

    /// The vocabulary this value belongs to
    const KIND: FilterKind;

    /// Term sent to the catalog
    fn term(self) -> &'static str;

    /// Human-readable label
    fn label(self) -> &'static str;

    /// Look up a value by term or label, ignoring case
    fn parse(input: &str) -> Result<Self, ParseError> {
        let needle = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| {
                v.term().eq_ignore_ascii_case(needle) || v.label().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParseError::UnknownValue {
                kind: Self::KIND,
                value: input.to_string(),
            })
    }
}

/// Book language (ISO 639-1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ca")]
    Catalan,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "la")]
    Latin,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "zh")]
    Chinese,
}

impl FilterValue for Language {
    const ALL: &'static [Self] = &[
        Self::English,
        Self::Catalan,
        Self::French,
        Self::German,
        Self::Latin,
        Self::Spanish,
        Self::Italian,
        Self::Chinese,
    ];
    const KIND: FilterKind = FilterKind::Language;

    fn term(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Catalan => "ca",
            Self::French => "fr",
            Self::German => "de",
            Self::Latin => "la",
            Self::Spanish => "es",
            Self::Italian => "it",
            Self::Chinese => "zh",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Catalan => "Catalan",
            Self::French => "French",
            Self::German => "German",
            Self::Latin => "Latin",
            Self::Spanish => "Spanish",
            Self::Italian => "Italian",
            Self::Chinese => "Chinese",
        }
    }
}

/// Copyright status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Copyright {
    /// Still under copyright
    #[serde(rename = "true")]
    Yes,
    /// Public domain
    #[serde(rename = "false")]
    No,
}

impl FilterValue for Copyright {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];
    const KIND: FilterKind = FilterKind::Copyright;

    fn term(self) -> &'static str {
        match self {
            Self::Yes => "true",
            Self::No => "false",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

/// Topic filter, matched against bookshelves and subjects
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "science fiction")]
    ScienceFiction,
    #[serde(rename = "horror")]
    Horror,
    #[serde(rename = "romance")]
    Romance,
    #[serde(rename = "fantasy")]
    Fantasy,
    #[serde(rename = "Mythology")]
    Mythology,
}

impl FilterValue for Category {
    const ALL: &'static [Self] = &[
        Self::ScienceFiction,
        Self::Horror,
        Self::Romance,
        Self::Fantasy,
        Self::Mythology,
    ];
    const KIND: FilterKind = FilterKind::Category;

    fn term(self) -> &'static str {
        match self {
            Self::ScienceFiction => "science fiction",
            Self::Horror => "horror",
            Self::Romance => "romance",
            Self::Fantasy => "fantasy",
            Self::Mythology => "Mythology",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::ScienceFiction => "Science Fiction",
            Self::Horror => "Horror",
            Self::Romance => "Romance",
            Self::Fantasy => "Fantasy",
            Self::Mythology => "Mythology",
        }
    }
}

/// Result ordering
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most downloaded first; the catalog's default, so never sent
    #[default]
    Popular,
    Ascending,
    Descending,
}

impl SortOrder {
    /// Value for the `sort` parameter, or `None` for the catalog default
    pub fn param(self) -> Option<&'static str> {
        match self {
            Self::Popular => None,
            other => Some(other.term()),
        }
    }
}

impl FilterValue for SortOrder {
    const ALL: &'static [Self] = &[Self::Popular, Self::Ascending, Self::Descending];
    const KIND: FilterKind = FilterKind::Sort;

    fn term(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular(default)",
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }
}

macro_rules! impl_from_str_and_display {
    ($($ty:ty),*) => {
        $(
            impl FromStr for $ty {
                type Err = ParseError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as FilterValue>::parse(s)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

impl_from_str_and_display!(Language, Copyright, Category, SortOrder);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_term_or_label() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("German".parse::<Language>().unwrap(), Language::German);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Chinese);
        assert_eq!("true".parse::<Copyright>().unwrap(), Copyright::Yes);
        assert_eq!("no".parse::<Copyright>().unwrap(), Copyright::No);
        assert_eq!(
            "science fiction".parse::<Category>().unwrap(),
            Category::ScienceFiction
        );
        assert_eq!("mythology".parse::<Category>().unwrap(), Category::Mythology);
        assert_eq!("descending".parse::<SortOrder>().unwrap(), SortOrder::Descending);
    }

    #[test]
    fn test_parse_unknown_value() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownValue {
                kind: FilterKind::Language,
                value: "klingon".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Unknown language value: klingon");
    }

    #[test]
    fn test_popular_is_not_sent() {
        assert_eq!(SortOrder::Popular.param(), None);
        assert_eq!(SortOrder::Ascending.param(), Some("ascending"));
        assert_eq!(SortOrder::default(), SortOrder::Popular);
    }

    #[test]
    fn test_serde_uses_terms() {
        assert_eq!(serde_json::to_string(&Language::Latin).unwrap(), "\"la\"");
        assert_eq!(serde_json::to_string(&Copyright::No).unwrap(), "\"false\"");
        assert_eq!(
            serde_json::to_string(&Category::ScienceFiction).unwrap(),
            "\"science fiction\""
        );
        assert_eq!(serde_json::to_string(&SortOrder::Popular).unwrap(), "\"popular\"");
    }

    #[test]
    fn test_vocabularies_are_distinct() {
        for lang in Language::ALL {
            assert_eq!(lang.term().parse::<Language>().unwrap(), *lang);
        }
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), *category);
        }
    }
}
