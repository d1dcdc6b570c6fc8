pub mod error;
pub mod models;

pub use error::Error;
pub use models::{display_date, Article, SortOrder};

pub type Result<T> = std::result::Result<T, Error>;
