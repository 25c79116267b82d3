pub mod config;
pub mod error;
pub mod fixtures;
pub mod gateway;
pub mod service;
pub mod services;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use fixtures::Fixtures;
pub use gateway::{defer, LatencyProfile, MockGateway, Operation};
pub use service::{
    AdService, BlogService, CategoryService, CommentService, CrudService, GameService,
    InMemoryService,
};
pub use services::Services;
pub use store::EntityStore;
