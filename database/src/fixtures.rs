use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use types::{AdPosition, AdZone, BlogPost, Category, Comment, Entity, EntityId, Game, APPROVED};

use crate::error::StoreError;

/// Seed data for every entity kind. Loaded once at startup; every store owns
/// its own copy afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub games: Vec<Game>,
    pub categories: Vec<Category>,
    pub blog_posts: Vec<BlogPost>,
    pub ad_zones: Vec<AdZone>,
    pub comments: Vec<Comment>,
}

impl Fixtures {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reads a YAML (`.yaml`/`.yml`) or JSON (`.json`) seed file. Kinds the
    /// file leaves out start empty.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let fixtures = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents)?,
            Some("json") => Self::from_json_str(&contents)?,
            _ => return Err(StoreError::UnsupportedSeedFormat(path.to_path_buf())),
        };
        tracing::info!(
            "Loaded seed {}: {} games, {} categories, {} posts, {} ad zones, {} comments",
            path.display(),
            fixtures.games.len(),
            fixtures.categories.len(),
            fixtures.blog_posts.len(),
            fixtures.ad_zones.len(),
            fixtures.comments.len()
        );
        Ok(fixtures)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, StoreError> {
        let fixtures: Self = serde_yaml::from_str(contents)?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, StoreError> {
        let fixtures: Self = serde_json::from_str(contents)?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    /// Ids must be unique within each kind.
    pub fn validate(&self) -> Result<(), StoreError> {
        unique_ids(&self.games)?;
        unique_ids(&self.categories)?;
        unique_ids(&self.blog_posts)?;
        unique_ids(&self.ad_zones)?;
        unique_ids(&self.comments)
    }

    /// The catalogue the portal ships with.
    pub fn builtin() -> Self {
        Self {
            games: builtin_games(),
            categories: builtin_categories(),
            blog_posts: builtin_blog_posts(),
            ad_zones: builtin_ad_zones(),
            comments: builtin_comments(),
        }
    }
}

fn unique_ids<T: Entity>(records: &[T]) -> Result<(), StoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    match records.iter().map(T::id).find(|id| !seen.insert(*id)) {
        Some(id) => Err(StoreError::DuplicateId { kind: T::KIND, id }),
        None => Ok(()),
    }
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn game(
    id: EntityId,
    title: &str,
    description: &str,
    category: &str,
    tags: &[&str],
    rating: f64,
    plays: u64,
    likes: u64,
    featured: bool,
    published_at: DateTime<Utc>,
) -> Game {
    let slug = types::slugify(title);
    Game {
        id,
        title: title.to_string(),
        description: description.to_string(),
        thumbnail: format!("/images/games/{slug}.jpg"),
        category: category.to_string(),
        tags: strings(tags),
        rating,
        plays,
        likes,
        featured,
        game_url: format!("/games/{slug}"),
        slug,
        published_at,
    }
}

fn builtin_games() -> Vec<Game> {
    vec![
        game(
            1,
            "Space Adventure",
            "An epic space exploration game with stunning graphics",
            "Action",
            &["space", "adventure", "action"],
            4.8,
            15420,
            1203,
            true,
            date(2024, 1, 15),
        ),
        game(
            2,
            "Puzzle Master",
            "Challenge your mind with increasingly difficult puzzles",
            "Puzzle",
            &["puzzle", "brain", "logic"],
            4.6,
            8950,
            640,
            true,
            date(2024, 2, 20),
        ),
        game(
            3,
            "Racing Thunder",
            "High-speed racing with customizable cars",
            "Racing",
            &["racing", "cars", "speed"],
            4.7,
            12300,
            915,
            false,
            date(2024, 3, 10),
        ),
        game(
            4,
            "Fantasy Quest",
            "Embark on a magical journey through enchanted lands",
            "RPG",
            &["fantasy", "rpg", "adventure"],
            4.9,
            22100,
            1870,
            true,
            date(2024, 1, 5),
        ),
        game(
            5,
            "Arcade Shooter",
            "Classic arcade-style shooting action",
            "Action",
            &["arcade", "shooter", "retro"],
            4.4,
            7800,
            402,
            false,
            date(2024, 2, 28),
        ),
    ]
}

fn category(id: EntityId, name: &str, icon: &str, game_count: u64) -> Category {
    Category {
        id,
        name: name.to_string(),
        slug: types::slugify(name),
        icon: icon.to_string(),
        game_count,
        order: id as i64,
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        category(1, "Action", "Swords", 45),
        category(2, "Puzzle", "Puzzle", 32),
        category(3, "Racing", "Car", 28),
        category(4, "RPG", "Wand2", 21),
        category(5, "Sports", "Trophy", 19),
        category(6, "Adventure", "Map", 35),
    ]
}

#[allow(clippy::too_many_arguments)]
fn blog_post(
    id: EntityId,
    title: &str,
    excerpt: &str,
    content: &str,
    category: &str,
    tags: &[&str],
    published_at: DateTime<Utc>,
) -> BlogPost {
    let slug = types::slugify(title);
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        featured_image: format!("/images/blog/{slug}.jpg"),
        category: category.to_string(),
        tags: strings(tags),
        seo_title: format!("{title} | Zontal Arcade"),
        seo_description: excerpt.to_string(),
        slug,
        published_at,
    }
}

fn builtin_blog_posts() -> Vec<BlogPost> {
    vec![
        blog_post(
            1,
            "Top 10 HTML5 Games of 2024",
            "Our pick of the browser games that defined the year.",
            "Browser gaming keeps getting better.\n\nFrom space shooters to deep RPGs, these are the titles our players kept coming back to.",
            "Reviews",
            &["html5", "top-list", "2024"],
            date(2024, 3, 20),
        ),
        blog_post(
            2,
            "How to Master Puzzle Games",
            "Practical tips for solving harder puzzles faster.",
            "Start with the corners.\n\nMost puzzle designers hide the key move where you least expect it, so look for constraints before you look for solutions.",
            "Guides",
            &["puzzle", "tips"],
            date(2024, 3, 12),
        ),
        blog_post(
            3,
            "Behind the Scenes of Fantasy Quest",
            "An interview with the team behind our most played RPG.",
            "Fantasy Quest started as a weekend prototype.\n\nTwo years later it is the most played game on the portal.",
            "Interviews",
            &["rpg", "fantasy", "developers"],
            date(2024, 2, 28),
        ),
        blog_post(
            4,
            "Racing Games Buyer's Guide",
            "What separates a great racing game from a forgettable one.",
            "Handling is everything.\n\nWe compare the physics, tracks and progression systems of this season's racers.",
            "Guides",
            &["racing", "guide"],
            date(2024, 1, 30),
        ),
    ]
}

fn ad_zone(
    id: EntityId,
    name: &str,
    position: AdPosition,
    is_active: bool,
    impressions: u64,
    clicks: u64,
) -> AdZone {
    AdZone {
        id,
        name: name.to_string(),
        position,
        ad_code: format!("<div class=\"ad ad-{position}\"><!-- {name} --></div>"),
        is_active,
        impressions,
        clicks,
    }
}

fn builtin_ad_zones() -> Vec<AdZone> {
    vec![
        ad_zone(1, "Header Banner", AdPosition::Header, true, 15420, 892),
        ad_zone(2, "Sidebar Square", AdPosition::Sidebar, true, 8950, 445),
        ad_zone(3, "Mobile Banner", AdPosition::MobileBanner, true, 12300, 738),
        ad_zone(4, "Between Games", AdPosition::BetweenGames, false, 3200, 256),
        ad_zone(5, "Game Detail Overlay", AdPosition::GameDetail, true, 6800, 408),
        ad_zone(6, "Footer Links", AdPosition::Footer, false, 0, 0),
    ]
}

fn comment(
    id: EntityId,
    game_id: EntityId,
    author: &str,
    content: &str,
    status: &str,
    created_at: DateTime<Utc>,
) -> Comment {
    Comment {
        id,
        game_id,
        author: author.to_string(),
        email: format!("{}@example.com", author.to_lowercase()),
        content: content.to_string(),
        status: status.to_string(),
        created_at,
    }
}

fn builtin_comments() -> Vec<Comment> {
    vec![
        comment(
            1,
            1,
            "GameMaster2024",
            "Amazing game! The graphics are stunning and the gameplay is addictive.",
            APPROVED,
            date(2024, 3, 15),
        ),
        comment(
            2,
            1,
            "RetroGamer",
            "Good game but could use more levels. Still entertaining though!",
            APPROVED,
            date(2024, 3, 14),
        ),
        comment(
            3,
            2,
            "PuzzleQueen",
            "Perfect brain teaser! The difficulty curve is just right.",
            APPROVED,
            date(2024, 3, 13),
        ),
        comment(
            4,
            1,
            "SpamBot",
            "Free coins at totally-legit.example",
            "pending",
            date(2024, 3, 16),
        ),
        comment(
            5,
            4,
            "QuestSeeker",
            "The story in the second act is incredible.",
            APPROVED,
            date(2024, 3, 11),
        ),
    ]
}
