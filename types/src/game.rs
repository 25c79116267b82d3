use std::fmt::Display;

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::entity::{merge, Entity, EntityId};
use crate::slug::slugify;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub thumbnail: String,
    /// Category name, denormalised. Not checked against the category store.
    pub category: String,
    pub tags: Vec<String>,
    /// 0.0 to 5.0
    pub rating: f64,
    pub plays: u64,
    pub likes: u64,
    pub featured: bool,
    pub game_url: String,
    pub published_at: DateTime<Utc>,
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({}) [{}]",
            self.id,
            self.title,
            self.category,
            self.tags.iter().join(", ")
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameDraft {
    pub title: String,
    /// Derived from the title when absent.
    pub slug: Option<String>,
    pub description: String,
    pub thumbnail: String,
    pub category: String,
    pub tags: Vec<String>,
    pub rating: f64,
    pub plays: u64,
    pub likes: u64,
    pub featured: bool,
    pub game_url: String,
    /// Defaults to the creation time.
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GamePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub rating: Option<f64>,
    pub plays: Option<u64>,
    pub likes: Option<u64>,
    pub featured: Option<bool>,
    pub game_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Entity for Game {
    const KIND: &'static str = "Game";

    type Draft = GameDraft;
    type Patch = GamePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: GameDraft) -> Self {
        let slug = draft.slug.unwrap_or_else(|| slugify(&draft.title));
        Self {
            id,
            slug,
            title: draft.title,
            description: draft.description,
            thumbnail: draft.thumbnail,
            category: draft.category,
            tags: draft.tags,
            rating: draft.rating,
            plays: draft.plays,
            likes: draft.likes,
            featured: draft.featured,
            game_url: draft.game_url,
            published_at: draft.published_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: GamePatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.slug, patch.slug);
        merge(&mut self.description, patch.description);
        merge(&mut self.thumbnail, patch.thumbnail);
        merge(&mut self.category, patch.category);
        merge(&mut self.tags, patch.tags);
        merge(&mut self.rating, patch.rating);
        merge(&mut self.plays, patch.plays);
        merge(&mut self.likes, patch.likes);
        merge(&mut self.featured, patch.featured);
        merge(&mut self.game_url, patch.game_url);
        merge(&mut self.published_at, patch.published_at);
    }
}
