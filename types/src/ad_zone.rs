use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::entity::{merge, Entity, EntityId};

/// Where on the site an ad zone renders.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdPosition {
    #[default]
    Header,
    Sidebar,
    BetweenGames,
    GameDetail,
    Footer,
    MobileBanner,
}

impl AdPosition {
    pub const ALL: [AdPosition; 6] = [
        AdPosition::Header,
        AdPosition::Sidebar,
        AdPosition::BetweenGames,
        AdPosition::GameDetail,
        AdPosition::Footer,
        AdPosition::MobileBanner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AdPosition::Header => "header",
            AdPosition::Sidebar => "sidebar",
            AdPosition::BetweenGames => "between-games",
            AdPosition::GameDetail => "game-detail",
            AdPosition::Footer => "footer",
            AdPosition::MobileBanner => "mobile-banner",
        }
    }
}

impl Display for AdPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdPosition::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| format!("unknown ad position: {s}"))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdZone {
    pub id: EntityId,
    pub name: String,
    pub position: AdPosition,
    /// Raw markup or script. Stored and rendered verbatim, never sanitised here.
    pub ad_code: String,
    pub is_active: bool,
    pub impressions: u64,
    pub clicks: u64,
}

impl AdZone {
    /// Click-through rate in percent, 0 when the zone has never been shown.
    pub fn click_through_rate(&self) -> f64 {
        if self.impressions == 0 {
            return 0.0;
        }
        self.clicks as f64 / self.impressions as f64 * 100.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdZoneDraft {
    pub name: String,
    pub position: AdPosition,
    pub ad_code: String,
    pub is_active: bool,
    pub impressions: u64,
    pub clicks: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdZonePatch {
    pub name: Option<String>,
    pub position: Option<AdPosition>,
    pub ad_code: Option<String>,
    pub is_active: Option<bool>,
    pub impressions: Option<u64>,
    pub clicks: Option<u64>,
}

impl Entity for AdZone {
    const KIND: &'static str = "Ad zone";

    type Draft = AdZoneDraft;
    type Patch = AdZonePatch;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_draft(id: EntityId, draft: AdZoneDraft) -> Self {
        Self {
            id,
            name: draft.name,
            position: draft.position,
            ad_code: draft.ad_code,
            is_active: draft.is_active,
            impressions: draft.impressions,
            clicks: draft.clicks,
        }
    }

    fn apply_patch(&mut self, patch: AdZonePatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.position, patch.position);
        merge(&mut self.ad_code, patch.ad_code);
        merge(&mut self.is_active, patch.is_active);
        merge(&mut self.impressions, patch.impressions);
        merge(&mut self.clicks, patch.clicks);
    }
}
