use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{merge, Entity, EntityId};
use crate::slug::slugify;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,
    pub slug: String,
    /// Free text, paragraphs separated by blank lines.
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub seo_title: String,
    pub seo_description: String,
    pub published_at: DateTime<Utc>,
}

impl BlogPost {
    /// Non-empty paragraphs of the post body, trimmed.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostDraft {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
    pub excerpt: String,
    pub featured_image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub seo_title: String,
    pub seo_description: String,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Entity for BlogPost {
    const KIND: &'static str = "Blog post";

    type Draft = BlogPostDraft;
    type Patch = BlogPostPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: BlogPostDraft) -> Self {
        let slug = draft.slug.unwrap_or_else(|| slugify(&draft.title));
        Self {
            id,
            slug,
            title: draft.title,
            content: draft.content,
            excerpt: draft.excerpt,
            featured_image: draft.featured_image,
            category: draft.category,
            tags: draft.tags,
            seo_title: draft.seo_title,
            seo_description: draft.seo_description,
            published_at: draft.published_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: BlogPostPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.slug, patch.slug);
        merge(&mut self.content, patch.content);
        merge(&mut self.excerpt, patch.excerpt);
        merge(&mut self.featured_image, patch.featured_image);
        merge(&mut self.category, patch.category);
        merge(&mut self.tags, patch.tags);
        merge(&mut self.seo_title, patch.seo_title);
        merge(&mut self.seo_description, patch.seo_description);
        merge(&mut self.published_at, patch.published_at);
    }
}
