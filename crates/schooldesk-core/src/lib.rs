pub mod config;
pub mod error;
pub mod page_window;
pub mod pager;
pub mod pagination;
pub mod result;

pub use config::AppConfig;
pub use error::SchoolDeskError;
pub use page_window::{page_window, PageToken, MAX_VISIBLE_PAGES};
pub use pager::Pager;
pub use pagination::{PageMeta, Paginator, DEFAULT_ITEMS_PER_PAGE};
pub use result::SchoolDeskResult;
