use crate::config::StoreConfig;
use crate::fixtures::Fixtures;
use crate::gateway::LatencyProfile;
use crate::service::{AdService, BlogService, CategoryService, CommentService, GameService};
use crate::StoreError;

/// One service per entity kind, each over its own isolated store.
#[derive(Debug, Clone)]
pub struct Services {
    pub games: GameService,
    pub categories: CategoryService,
    pub blog: BlogService,
    pub ads: AdService,
    pub comments: CommentService,
}

impl Services {
    pub fn new(fixtures: Fixtures, config: &StoreConfig) -> Self {
        let heavy = config.gateway(LatencyProfile::HEAVY);
        let standard = config.gateway(LatencyProfile::STANDARD);
        Self {
            games: GameService::new(fixtures.games, heavy),
            categories: CategoryService::new(fixtures.categories, standard),
            blog: BlogService::new(fixtures.blog_posts, heavy),
            ads: AdService::new(fixtures.ad_zones, standard),
            comments: CommentService::new(fixtures.comments, standard),
        }
    }

    /// Loads the configured seed and builds every service from it.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let fixtures = config.load_fixtures()?;
        Ok(Self::new(fixtures, config))
    }

    /// Services with no simulated latency, for tests and tooling.
    pub fn instant(fixtures: Fixtures) -> Self {
        Self::new(
            fixtures,
            &StoreConfig {
                simulate_latency: false,
                seed_path: None,
            },
        )
    }
}
