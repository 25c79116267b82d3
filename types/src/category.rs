use serde::{Deserialize, Serialize};

use crate::entity::{merge, Entity, EntityId};
use crate::slug::slugify;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    pub slug: String,
    /// Symbolic icon name, resolved by the front end.
    pub icon: String,
    /// Operator maintained. Never recomputed from the game store, so it can
    /// drift from the real number of games in the category.
    pub game_count: u64,
    pub order: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryDraft {
    pub name: String,
    pub slug: Option<String>,
    pub icon: String,
    pub game_count: u64,
    pub order: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub icon: Option<String>,
    pub game_count: Option<u64>,
    pub order: Option<i64>,
}

impl Entity for Category {
    const KIND: &'static str = "Category";

    type Draft = CategoryDraft;
    type Patch = CategoryPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: CategoryDraft) -> Self {
        let slug = draft.slug.unwrap_or_else(|| slugify(&draft.name));
        Self {
            id,
            slug,
            name: draft.name,
            icon: draft.icon,
            game_count: draft.game_count,
            order: draft.order,
        }
    }

    fn apply_patch(&mut self, patch: CategoryPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.slug, patch.slug);
        merge(&mut self.icon, patch.icon);
        merge(&mut self.game_count, patch.game_count);
        merge(&mut self.order, patch.order);
    }
}
