use database::{CrudService, Services};
use itertools::Itertools;
use log::{debug, info};
use query::{
    page_window, BlogPostField, CaseSensitivity, GameField, PageRequest, Query, Selector,
    SortKey, TextFilter,
};
use types::{
    AdPosition, AdZone, AdZonePatch, BlogPost, Comment, CommentDraft, EntityId, Game, APPROVED,
};

use crate::{
    config::SiteSettings,
    pages::{
        BlogPage, CategoryPage, Dashboard, DashboardStats, GamePage, HomePage, PostPage,
        SearchResults,
    },
    PortalError,
};

pub const HOME_CATEGORY_COUNT: usize = 6;
pub const HOME_POST_COUNT: usize = 3;
pub const DASHBOARD_RECENT_COUNT: usize = 5;
pub const RELATED_GAMES_LIMIT: usize = 4;
pub const RELATED_POSTS_LIMIT: usize = 3;
pub const PAGER_BUTTONS: usize = 5;

const GAME_SEARCH_FIELDS: [GameField; 4] = [
    GameField::Title,
    GameField::Description,
    GameField::Category,
    GameField::Tags,
];
const POST_SEARCH_FIELDS: [BlogPostField; 5] = [
    BlogPostField::Title,
    BlogPostField::Content,
    BlogPostField::Excerpt,
    BlogPostField::Category,
    BlogPostField::Tags,
];

/// Comment form input from a visitor.
#[derive(Debug, Clone, Default)]
pub struct NewComment {
    pub author: String,
    pub email: String,
    pub content: String,
}

/// Builds storefront and admin pages out of the entity services.
#[derive(Debug, Clone)]
pub struct Portal {
    services: Services,
    settings: SiteSettings,
}

impl Portal {
    pub fn new(services: Services, settings: SiteSettings) -> Self {
        Self { services, settings }
    }

    /// Loads the seed named by the settings and wires up every service.
    pub fn from_settings(settings: SiteSettings) -> Result<Self, PortalError> {
        let services = Services::from_config(&settings.store)?;
        Ok(Self::new(services, settings))
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    fn ensure_open(&self) -> Result<(), PortalError> {
        if self.settings.enable_maintenance {
            return Err(PortalError::Maintenance(self.settings.maintenance_message.clone()));
        }
        Ok(())
    }

    fn ensure_enabled(enabled: bool, feature: &'static str) -> Result<(), PortalError> {
        if enabled {
            Ok(())
        } else {
            Err(PortalError::FeatureDisabled(feature))
        }
    }

    pub async fn home(&self) -> Result<HomePage, PortalError> {
        self.ensure_open()?;
        let (games, categories, posts, ads) = tokio::try_join!(
            self.services.games.get_all(),
            self.services.categories.get_all(),
            self.services.blog.get_all(),
            self.services.ads.get_all(),
        )?;

        let featured_games = games
            .iter()
            .filter(|game| game.featured)
            .take(self.settings.featured_games_count)
            .cloned()
            .collect();
        let recent_games = games.into_iter().take(self.settings.games_per_page).collect();
        let latest_posts = if self.settings.enable_blog {
            posts.into_iter().take(HOME_POST_COUNT).collect()
        } else {
            Vec::new()
        };

        Ok(HomePage {
            site_name: self.settings.site_name.clone(),
            featured_games,
            recent_games,
            categories: categories.into_iter().take(HOME_CATEGORY_COUNT).collect(),
            latest_posts,
            ads: ads.into_iter().filter(|ad| ad.is_active).collect(),
        })
    }

    pub async fn dashboard(&self) -> Result<Dashboard, PortalError> {
        let (games, categories, posts, ads) = tokio::try_join!(
            self.services.games.get_all(),
            self.services.categories.get_all(),
            self.services.blog.get_all(),
            self.services.ads.get_all(),
        )?;

        let stats = DashboardStats {
            total_games: games.len(),
            total_plays: games.iter().map(|game| game.plays).sum(),
            total_likes: games.iter().map(|game| game.likes).sum(),
            featured_games: games.iter().filter(|game| game.featured).count(),
            total_categories: categories.len(),
            total_posts: posts.len(),
            active_ads: ads.iter().filter(|ad| ad.is_active).count(),
            ad_impressions: ads.iter().map(|ad| ad.impressions).sum(),
            ad_clicks: ads.iter().map(|ad| ad.clicks).sum(),
        };
        debug!("Dashboard stats: {stats:?}");

        Ok(Dashboard {
            stats,
            recent_games: games.into_iter().take(DASHBOARD_RECENT_COUNT).collect(),
        })
    }

    /// Games whose category matches the category's name, ignoring case,
    /// optionally narrowed by a search over title and description.
    pub async fn category_games(
        &self,
        slug: &str,
        search: Option<&str>,
        sort: SortKey,
        page: usize,
    ) -> Result<CategoryPage, PortalError> {
        self.ensure_open()?;
        Self::ensure_enabled(self.settings.enable_categories, "categories")?;
        let request = PageRequest::new(page, self.settings.games_per_page)?;

        let (categories, games) = tokio::try_join!(
            self.services.categories.get_all(),
            self.services.games.get_all(),
        )?;
        let category = categories
            .into_iter()
            .find(|category| category.slug == slug)
            .ok_or_else(|| PortalError::CategoryNotFound(slug.to_string()))?;

        let mut query = Query::new()
            .select(Selector::new(
                GameField::Category,
                category.name.as_str(),
                CaseSensitivity::Insensitive,
            ))
            .sort(sort)
            .page(request);
        if let Some(text) = search {
            query = query.search(TextFilter::new(
                text,
                vec![GameField::Title, GameField::Description],
            ));
        }
        let games = query.apply(games);
        let pager = page_window(games.page, games.total_pages, PAGER_BUTTONS);

        Ok(CategoryPage {
            category,
            games,
            pager,
        })
    }

    /// Searches games and blog posts. Without a sort key results stay in
    /// store order.
    pub async fn search(&self, text: &str, sort: Option<SortKey>) -> Result<SearchResults, PortalError> {
        self.ensure_open()?;
        Self::ensure_enabled(self.settings.enable_search, "search")?;

        let (games, posts) = tokio::try_join!(
            self.services.games.get_all(),
            self.services.blog.get_all(),
        )?;

        let mut game_query = Query::new().search(TextFilter::new(text, GAME_SEARCH_FIELDS.to_vec()));
        let mut post_query = Query::new().search(TextFilter::new(text, POST_SEARCH_FIELDS.to_vec()));
        if let Some(key) = sort {
            game_query = game_query.sort(key);
            post_query = post_query.sort(key);
        }
        let games = game_query.apply(games).items;
        let posts = if self.settings.enable_blog {
            post_query.apply(posts).items
        } else {
            Vec::new()
        };
        info!("Search {text:?} found {} games and {} posts", games.len(), posts.len());

        Ok(SearchResults {
            query: text.to_string(),
            total_results: games.len() + posts.len(),
            games,
            posts,
        })
    }

    /// Newest-first blog listing. `category` must match exactly.
    pub async fn blog(
        &self,
        search: Option<&str>,
        category: Option<&str>,
        page: usize,
    ) -> Result<BlogPage, PortalError> {
        self.ensure_open()?;
        Self::ensure_enabled(self.settings.enable_blog, "blog")?;
        let request = PageRequest::new(page, self.settings.posts_per_page)?;

        let posts = self.services.blog.get_all().await?;
        let categories = posts.iter().map(|post| post.category.clone()).unique().collect();

        let mut query = Query::new().sort(SortKey::Newest).page(request);
        if let Some(text) = search {
            query = query.search(TextFilter::new(
                text,
                vec![BlogPostField::Title, BlogPostField::Content, BlogPostField::Excerpt],
            ));
        }
        if let Some(category) = category {
            query = query.select(Selector::new(
                BlogPostField::Category,
                category,
                CaseSensitivity::Sensitive,
            ));
        }
        let posts = query.apply(posts);
        let pager = page_window(posts.page, posts.total_pages, PAGER_BUTTONS);

        Ok(BlogPage {
            posts,
            pager,
            categories,
        })
    }

    pub async fn blog_post(&self, slug: &str) -> Result<PostPage, PortalError> {
        self.ensure_open()?;
        Self::ensure_enabled(self.settings.enable_blog, "blog")?;

        let posts = self.services.blog.get_all().await?;
        let post = posts
            .iter()
            .find(|post| post.slug == slug)
            .cloned()
            .ok_or_else(|| PortalError::PostNotFound(slug.to_string()))?;
        let related_posts = related_posts(&post, posts, RELATED_POSTS_LIMIT);

        Ok(PostPage { post, related_posts })
    }

    pub async fn game_detail(&self, id: EntityId) -> Result<GamePage, PortalError> {
        self.ensure_open()?;
        let game = self
            .services
            .games
            .get_by_id(id)
            .await?
            .ok_or(PortalError::GameNotFound(id))?;

        let (games, comments, ads) = tokio::try_join!(
            self.services.games.get_all(),
            self.comments_for(id),
            self.services.ads.get_all(),
        )?;
        let related_games = related_games(&game, games, RELATED_GAMES_LIMIT);
        let ad = ads
            .into_iter()
            .find(|ad| ad.is_active && ad.position == AdPosition::GameDetail);

        Ok(GamePage {
            game,
            comments,
            related_games,
            ad,
        })
    }

    async fn comments_for(&self, game_id: EntityId) -> Result<Vec<Comment>, database::StoreError> {
        if self.settings.enable_comments {
            self.services.comments.get_by_game_id(game_id).await
        } else {
            Ok(Vec::new())
        }
    }

    /// Publishes a visitor comment straight away. The game has to exist.
    pub async fn post_comment(&self, game_id: EntityId, input: NewComment) -> Result<Comment, PortalError> {
        self.ensure_open()?;
        Self::ensure_enabled(self.settings.enable_comments, "comments")?;
        if self.services.games.get_by_id(game_id).await?.is_none() {
            return Err(PortalError::GameNotFound(game_id));
        }

        let comment = self
            .services
            .comments
            .create(CommentDraft {
                game_id,
                author: input.author,
                email: input.email,
                content: input.content,
                status: APPROVED.to_string(),
                created_at: None,
            })
            .await?;
        info!("Comment {} posted on game {game_id}", comment.id);
        Ok(comment)
    }

    /// Flips an ad zone between active and inactive.
    pub async fn toggle_ad(&self, id: EntityId) -> Result<AdZone, PortalError> {
        let ad = self
            .services
            .ads
            .get_by_id(id)
            .await?
            .ok_or(PortalError::AdNotFound(id))?;
        let patch = AdZonePatch {
            is_active: Some(!ad.is_active),
            ..Default::default()
        };
        let updated = self.services.ads.update(id, patch).await?;
        info!(
            "Ad zone {id} {}",
            if updated.is_active { "activated" } else { "deactivated" }
        );
        Ok(updated)
    }
}

/// Other games in the same category, in store order.
pub fn related_games(game: &Game, games: Vec<Game>, limit: usize) -> Vec<Game> {
    games
        .into_iter()
        .filter(|other| other.id != game.id && other.category == game.category)
        .take(limit)
        .collect()
}

/// Other posts in the same category, in store order.
pub fn related_posts(post: &BlogPost, posts: Vec<BlogPost>, limit: usize) -> Vec<BlogPost> {
    posts
        .into_iter()
        .filter(|other| other.id != post.id && other.category == post.category)
        .take(limit)
        .collect()
}
