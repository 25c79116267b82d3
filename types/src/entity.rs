use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// Store-assigned identity, unique within one entity kind.
pub type EntityId = u64;

/// A record kind the portal stores and serves.
///
/// Creation goes through [`Entity::Draft`] so the caller never picks an id;
/// partial updates go through [`Entity::Patch`], which only carries the
/// fields being changed.
pub trait Entity: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Human readable kind name, used in errors and logs.
    const KIND: &'static str;

    type Draft: Debug + Send + 'static;
    type Patch: Debug + Default + Send + 'static;

    fn id(&self) -> EntityId;

    /// Builds the stored record from a draft and the id the store assigned.
    fn from_draft(id: EntityId, draft: Self::Draft) -> Self;

    /// Merges every field present in `patch` over `self`. Absent fields are
    /// left untouched.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Overwrites `slot` when the patch carries a value for it.
pub(crate) fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
