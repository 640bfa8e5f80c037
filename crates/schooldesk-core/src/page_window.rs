//! Page-number window for pager controls.
//!
//! Collapses a long run of page numbers into something like
//! `1 ... 9 10 11 ... 20`, always keeping the first and last page.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of page buttons shown before the window starts collapsing.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One entry of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A clickable page number.
    Number(usize),
    /// A gap of one or more hidden pages.
    Ellipsis,
}

impl PageToken {
    /// Key a renderer can use to tell entries apart.
    ///
    /// Ellipsis markers are keyed by their position since a window may hold
    /// two of them.
    pub fn key(&self, position: usize) -> String {
        match self {
            PageToken::Number(page) => page.to_string(),
            PageToken::Ellipsis => format!("ellipsis-{}", position),
        }
    }

    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::Number(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Number(page) => write!(f, "{}", page),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

// Numbers stay numbers on the wire, markers become "...".
impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Number(page) => serializer.serialize_u64(*page as u64),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Compute the page numbers to render for `current_page` out of `total_pages`.
///
/// `current_page` is clamped into `[1, max(total_pages, 1)]` first.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    let current_page = current_page.clamp(1, total_pages.max(1));
    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageToken::Number).collect();
    }

    let mut tokens = vec![PageToken::Number(1)];

    if current_page > 3 {
        tokens.push(PageToken::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = current_page.saturating_add(1).min(total_pages - 1);
    tokens.extend((start..=end).map(PageToken::Number));

    if current_page.saturating_add(2) < total_pages {
        tokens.push(PageToken::Ellipsis);
    }

    if total_pages > 1 {
        tokens.push(PageToken::Number(total_pages));
    }

    tokens
}
