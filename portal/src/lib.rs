//! Storefront and admin pages composed from the entity services.

pub mod config;
pub mod error;
pub mod pages;
pub mod portal;

pub use config::{SiteSettings, CONFIG_ENV_VAR};
pub use error::PortalError;
pub use pages::{
    BlogPage, CategoryPage, Dashboard, DashboardStats, GamePage, HomePage, PostPage,
    SearchResults,
};
pub use portal::{related_games, related_posts, NewComment, Portal};
