use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use types::{AdZone, BlogPost, Category, Comment, Entity, EntityId, Game};

use crate::error::StoreError;
use crate::gateway::{MockGateway, Operation};
use crate::store::EntityStore;

/// The uniform contract every entity kind is served through.
///
/// Every record handed out is an owned copy; changing it does nothing to the
/// store. The only way to change stored state is `create`, `update` or
/// `delete`.
#[async_trait]
pub trait CrudService<T: Entity>: Send + Sync {
    /// Full snapshot in store order.
    async fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// `Ok(None)` for an unknown id.
    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, StoreError>;

    /// Stores the draft as-is under a fresh id. No field validation happens
    /// here; callers check input before creating.
    async fn create(&self, draft: T::Draft) -> Result<T, StoreError>;

    async fn update(&self, id: EntityId, patch: T::Patch) -> Result<T, StoreError>;

    async fn delete(&self, id: EntityId) -> Result<(), StoreError>;
}

/// Store plus simulated latency. Clones share the same store.
#[derive(Debug, Clone)]
pub struct InMemoryService<T: Entity> {
    store: Arc<Mutex<EntityStore<T>>>,
    gateway: MockGateway,
}

pub type GameService = InMemoryService<Game>;
pub type CategoryService = InMemoryService<Category>;
pub type BlogService = InMemoryService<BlogPost>;
pub type AdService = InMemoryService<AdZone>;
pub type CommentService = InMemoryService<Comment>;

impl<T: Entity> InMemoryService<T> {
    pub fn new(seed: Vec<T>, gateway: MockGateway) -> Self {
        tracing::debug!("Seeding {} store with {} records", T::KIND, seed.len());
        Self {
            store: Arc::new(Mutex::new(EntityStore::new(seed))),
            gateway,
        }
    }

    /// Service without simulated latency.
    pub fn instant(seed: Vec<T>) -> Self {
        Self::new(seed, MockGateway::instant())
    }

    /// Number of stored records, without latency or cloning.
    pub fn len(&self) -> Result<usize, StoreError> {
        self.with_store(|store| store.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.with_store(|store| store.is_empty())
    }

    fn with_store<R>(&self, work: impl FnOnce(&mut EntityStore<T>) -> R) -> Result<R, StoreError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| StoreError::LockPoisoned(T::KIND))?;
        Ok(work(&mut store))
    }

    fn not_found(id: EntityId) -> StoreError {
        tracing::warn!("{} {id} not found", T::KIND);
        StoreError::NotFound { kind: T::KIND, id }
    }
}

#[async_trait]
impl<T: Entity> CrudService<T> for InMemoryService<T> {
    async fn get_all(&self) -> Result<Vec<T>, StoreError> {
        self.gateway
            .run(Operation::List, || self.with_store(|store| store.snapshot()))
            .await
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<T>, StoreError> {
        self.gateway
            .run(Operation::Get, || self.with_store(|store| store.find(id)))
            .await
    }

    async fn create(&self, draft: T::Draft) -> Result<T, StoreError> {
        let created = self
            .gateway
            .run(Operation::Create, || {
                self.with_store(|store| store.insert(draft))
            })
            .await??;
        tracing::info!("Created {} {}", T::KIND, created.id());
        Ok(created)
    }

    async fn update(&self, id: EntityId, patch: T::Patch) -> Result<T, StoreError> {
        let updated = self
            .gateway
            .run(Operation::Update, || {
                self.with_store(|store| store.update(id, patch))
            })
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        tracing::info!("Updated {} {id}", T::KIND);
        Ok(updated)
    }

    async fn delete(&self, id: EntityId) -> Result<(), StoreError> {
        self.gateway
            .run(Operation::Delete, || self.with_store(|store| store.remove(id)))
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        tracing::info!("Deleted {} {id}", T::KIND);
        Ok(())
    }
}

impl CommentService {
    /// Approved comments for one game, in store order. Comments with any
    /// other status are left out even when the game id matches.
    pub async fn get_by_game_id(&self, game_id: EntityId) -> Result<Vec<Comment>, StoreError> {
        self.gateway
            .run(Operation::Get, || {
                self.with_store(|store| {
                    store.select(|comment| comment.game_id == game_id && comment.is_approved())
                })
            })
            .await
    }
}
