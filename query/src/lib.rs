//! Filtering, sorting and pagination over snapshots handed out by the CRUD
//! services. Everything here is pure: records go in by value and come back
//! out in a new order or as a subset.

pub mod error;
pub mod field;
pub mod filter;
pub mod paginate;
pub mod query;
pub mod sort;

pub use error::QueryError;
pub use field::{AdZoneField, BlogPostField, CategoryField, CommentField, GameField, Searchable};
pub use filter::{filter_eq, filter_text, CaseSensitivity, Selector, TextFilter};
pub use paginate::{page_window, paginate, total_pages, PageRequest, Paginated};
pub use query::Query;
pub use sort::{sort_records, SortKey, Sortable};
