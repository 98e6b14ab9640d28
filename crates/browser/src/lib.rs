pub mod client;
pub mod config;
pub mod error;
pub mod picker;
pub mod query;
pub mod row;
pub mod source;

pub use client::FileBrowserClient;
pub use config::BrowserConfig;
pub use error::{BrowserError, Result};
pub use picker::{PickerOptions, TabKey, visible_tabs};
pub use query::ListingQuery;
pub use row::{ListRow, Principal};
pub use shelfpick_api_types::FileItem;
pub use source::FileSource;
