//! Render model for a pager control.
//!
//! Knows nothing about how it is drawn. It gathers what a pager shows from a
//! [`Paginator`]: the page window, which navigation buttons are enabled, the
//! page-size choices, and the results summary line.

use crate::page_window::{page_window, PageToken};
use crate::pagination::Paginator;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub total_items: usize,
    pub tokens: Vec<PageToken>,
    /// "First" and "previous" buttons.
    pub back_enabled: bool,
    /// "Next" and "last" buttons.
    pub forward_enabled: bool,
    pub items_per_page_options: Vec<usize>,
}

impl Pager {
    pub fn new<T>(paginator: &Paginator<T>, items_per_page_options: &[usize]) -> Self {
        let meta = paginator.meta();
        Self {
            current_page: meta.current_page,
            total_pages: meta.total_pages,
            items_per_page: meta.items_per_page,
            start_index: meta.start_index,
            end_index: meta.end_index,
            total_items: meta.total_items,
            tokens: page_window(meta.current_page, meta.total_pages),
            back_enabled: paginator.has_previous_page(),
            forward_enabled: paginator.has_next_page(),
            items_per_page_options: items_per_page_options.to_vec(),
        }
    }

    /// An empty list gets no pager at all.
    pub fn is_visible(&self) -> bool {
        self.total_items > 0
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.start_index, self.end_index, self.total_items
        )
    }

    /// Plain-text page window with the current page bracketed.
    pub fn render_line(&self) -> String {
        self.tokens
            .iter()
            .map(|token| match token {
                PageToken::Number(page) if *page == self.current_page => format!("[{}]", page),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
