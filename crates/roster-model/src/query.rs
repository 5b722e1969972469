//! Query state value types.
//!
//! The view layer owns a single `QueryState` and passes it into the query
//! pipeline and paginator as a pure input; no component reads ambient
//! state directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// Website-domain filter applied to the `website` field.
///
/// Tokens are matched as case-folded substrings of the website, so
/// `Org` keeps `"anastasia.org"` as well as `"org.example.com"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WebsiteFilter {
    /// Keep every record.
    #[default]
    All,
    Org,
    Net,
    Info,
    Biz,
}

impl WebsiteFilter {
    /// The literal token matched against the website field.
    ///
    /// `All` has no token; it never narrows the row set.
    pub fn token(&self) -> Option<&'static str> {
        match self {
            WebsiteFilter::All => None,
            WebsiteFilter::Org => Some("org"),
            WebsiteFilter::Net => Some("net"),
            WebsiteFilter::Info => Some("info"),
            WebsiteFilter::Biz => Some("biz"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WebsiteFilter::All => "all",
            WebsiteFilter::Org => "org",
            WebsiteFilter::Net => "net",
            WebsiteFilter::Info => "info",
            WebsiteFilter::Biz => "biz",
        }
    }
}

impl fmt::Display for WebsiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebsiteFilter {
    type Err = RosterError;

    /// Parse a filter selection (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(WebsiteFilter::All),
            "org" => Ok(WebsiteFilter::Org),
            "net" => Ok(WebsiteFilter::Net),
            "info" => Ok(WebsiteFilter::Info),
            "biz" => Ok(WebsiteFilter::Biz),
            _ => Err(RosterError::UnknownFilter(s.to_string())),
        }
    }
}

/// Alphabetical ordering applied to the `name` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Preserve record-store order.
    #[default]
    None,
    /// A to Z by case-folded name.
    Ascending,
    /// Z to A by case-folded name.
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = RosterError;

    /// Parse a sort selection. Accepts the short codes (`asc`, `desc`)
    /// and the full names (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(SortOrder::None),
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(RosterError::UnknownSort(s.to_string())),
        }
    }
}

/// The full derived-view input: search text, filter, sort, and page.
///
/// `current_page` is 1-based. The session clamps it back into range
/// whenever the underlying row count shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub filter: WebsiteFilter,
    pub sort: SortOrder,
    pub current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            filter: WebsiteFilter::All,
            sort: SortOrder::None,
            current_page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_str() {
        assert_eq!("org".parse::<WebsiteFilter>().unwrap(), WebsiteFilter::Org);
        assert_eq!("ALL".parse::<WebsiteFilter>().unwrap(), WebsiteFilter::All);
        assert_eq!(" biz ".parse::<WebsiteFilter>().unwrap(), WebsiteFilter::Biz);
        assert!("com".parse::<WebsiteFilter>().is_err());
    }

    #[test]
    fn test_sort_from_str() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert_eq!("Descending".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("".parse::<SortOrder>().unwrap(), SortOrder::None);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_filter_tokens() {
        assert_eq!(WebsiteFilter::All.token(), None);
        assert_eq!(WebsiteFilter::Info.token(), Some("info"));
    }
}
