use query::Paginated;
use serde::Serialize;
use types::{AdZone, BlogPost, Category, Comment, Game};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub site_name: String,
    pub featured_games: Vec<Game>,
    pub recent_games: Vec<Game>,
    pub categories: Vec<Category>,
    pub latest_posts: Vec<BlogPost>,
    pub ads: Vec<AdZone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_games: usize,
    pub total_plays: u64,
    pub total_likes: u64,
    pub featured_games: usize,
    pub total_categories: usize,
    pub total_posts: usize,
    pub active_ads: usize,
    pub ad_impressions: u64,
    pub ad_clicks: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_games: Vec<Game>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub category: Category,
    pub games: Paginated<Game>,
    pub pager: Vec<usize>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub query: String,
    pub games: Vec<Game>,
    pub posts: Vec<BlogPost>,
    pub total_results: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub posts: Paginated<BlogPost>,
    pub pager: Vec<usize>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub post: BlogPost,
    pub related_posts: Vec<BlogPost>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePage {
    pub game: Game,
    pub comments: Vec<Comment>,
    pub related_games: Vec<Game>,
    pub ad: Option<AdZone>,
}
