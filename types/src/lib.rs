pub mod ad_zone;
pub mod blog_post;
pub mod category;
pub mod comment;
pub mod entity;
pub mod game;
pub mod slug;

pub use ad_zone::{AdPosition, AdZone, AdZoneDraft, AdZonePatch};
pub use blog_post::{BlogPost, BlogPostDraft, BlogPostPatch};
pub use category::{Category, CategoryDraft, CategoryPatch};
pub use comment::{Comment, CommentDraft, CommentPatch, APPROVED};
pub use entity::{Entity, EntityId};
pub use game::{Game, GameDraft, GamePatch};
pub use slug::slugify;
