use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{merge, Entity, EntityId};

/// The only comment status the portal interprets. Anything else is hidden
/// from public listings.
pub const APPROVED: &str = "approved";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    /// Id of the game the comment belongs to. The store does not check that
    /// the game exists.
    pub game_id: EntityId,
    pub author: String,
    pub email: String,
    pub content: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn is_approved(&self) -> bool {
        self.status == APPROVED
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentDraft {
    pub game_id: EntityId,
    pub author: String,
    pub email: String,
    pub content: String,
    pub status: String,
    /// Stamped with the creation time when absent.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentPatch {
    pub game_id: Option<EntityId>,
    pub author: Option<String>,
    pub email: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Comment {
    const KIND: &'static str = "Comment";

    type Draft = CommentDraft;
    type Patch = CommentPatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: CommentDraft) -> Self {
        Self {
            id,
            game_id: draft.game_id,
            author: draft.author,
            email: draft.email,
            content: draft.content,
            status: draft.status,
            created_at: draft.created_at.unwrap_or_else(Utc::now),
        }
    }

    fn apply_patch(&mut self, patch: CommentPatch) {
        merge(&mut self.game_id, patch.game_id);
        merge(&mut self.author, patch.author);
        merge(&mut self.email, patch.email);
        merge(&mut self.content, patch.content);
        merge(&mut self.status, patch.status);
        merge(&mut self.created_at, patch.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_exact_status_counts_as_approved() {
        let mut comment = Comment::from_draft(
            1,
            CommentDraft {
                game_id: 1,
                author: "GameMaster2024".to_string(),
                status: APPROVED.to_string(),
                ..Default::default()
            },
        );
        assert!(comment.is_approved());
        comment.status = "Approved".to_string();
        assert!(!comment.is_approved());
        comment.status = "pending".to_string();
        assert!(!comment.is_approved());
    }
}
