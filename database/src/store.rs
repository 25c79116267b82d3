use types::{Entity, EntityId};

use crate::StoreError;

/// Authoritative in-memory collection for one entity kind.
///
/// Records keep insertion order. Ids come from `next_id`, which only ever
/// grows: it starts past the largest seeded id (or at 1 for an empty seed)
/// and is not rewound when records are deleted. `None` once the id space
/// is used up.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Entity> {
    records: Vec<T>,
    next_id: Option<EntityId>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new(seed: Vec<T>) -> Self {
        let next_id = match seed.iter().map(T::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            records: seed,
            next_id,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id the next insert will receive.
    pub fn peek_next_id(&self) -> Option<EntityId> {
        self.next_id
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Clones of the records matching `predicate`, in store order.
    pub fn select(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub fn find(&self, id: EntityId) -> Option<T> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Assigns the next id and appends. Both happen under the same `&mut`,
    /// so two inserts can never share an id.
    pub fn insert(&mut self, draft: T::Draft) -> Result<T, StoreError> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted(T::KIND))?;
        self.next_id = id.checked_add(1);
        let record = T::from_draft(id, draft);
        self.records.push(record.clone());
        Ok(record)
    }

    pub fn update(&mut self, id: EntityId, patch: T::Patch) -> Option<T> {
        let record = self.records.iter_mut().find(|record| record.id() == id)?;
        record.apply_patch(patch);
        Some(record.clone())
    }

    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(index))
    }
}
