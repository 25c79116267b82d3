use std::time::Duration;

use database::{CrudService, Fixtures, Services, StoreConfig};
use portal::{NewComment, Portal, PortalError, SiteSettings};
use query::SortKey;
use types::APPROVED;

fn portal() -> Portal {
    Portal::new(Services::instant(Fixtures::builtin()), SiteSettings::default())
}

fn portal_with(settings: SiteSettings) -> Portal {
    Portal::new(Services::instant(Fixtures::builtin()), settings)
}

fn comment_input() -> NewComment {
    NewComment {
        author: "Dana".to_string(),
        email: "dana@example.com".to_string(),
        content: "Loved the boss fight".to_string(),
    }
}

#[tokio::test]
async fn test_home_feed_uses_site_limits() {
    let settings = SiteSettings {
        featured_games_count: 2,
        games_per_page: 3,
        ..Default::default()
    };
    let home = portal_with(settings).home().await.unwrap();

    assert_eq!(
        home.featured_games.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(home.recent_games.len(), 3);
    assert_eq!(home.categories.len(), 6);
    assert_eq!(home.latest_posts.len(), 3);
    assert!(home.ads.iter().all(|ad| ad.is_active));
    assert_eq!(home.ads.len(), 4);
}

#[tokio::test]
async fn test_dashboard_totals() {
    let dashboard = portal().dashboard().await.unwrap();
    let stats = dashboard.stats;

    assert_eq!(stats.total_games, 5);
    assert_eq!(stats.total_plays, 15420 + 8950 + 12300 + 22100 + 7800);
    assert_eq!(stats.total_likes, 1203 + 640 + 915 + 1870 + 402);
    assert_eq!(stats.featured_games, 3);
    assert_eq!(stats.total_categories, 6);
    assert_eq!(stats.total_posts, 4);
    assert_eq!(stats.active_ads, 4);
    assert_eq!(dashboard.recent_games.len(), 5);
}

#[tokio::test]
async fn test_category_browse_filters_sorts_and_pages() {
    let page = portal()
        .category_games("action", None, SortKey::Rating, 1)
        .await
        .unwrap();

    assert_eq!(page.category.name, "Action");
    assert_eq!(
        page.games.items.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![1, 5]
    );
    assert_eq!(page.games.total_pages, 1);
    assert_eq!(page.pager, vec![1]);

    let searched = portal()
        .category_games("action", Some("retro"), SortKey::Newest, 1)
        .await
        .unwrap();
    assert!(searched.games.items.is_empty());
}

#[tokio::test]
async fn test_unknown_category_slug_is_an_error() {
    let err = portal()
        .category_games("strategy", None, SortKey::Newest, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, PortalError::CategoryNotFound(slug) if slug == "strategy"));
}

#[tokio::test]
async fn test_search_spans_games_and_posts() {
    let results = portal().search("fantasy", None).await.unwrap();

    assert_eq!(results.games.iter().map(|g| g.id).collect::<Vec<_>>(), vec![4]);
    assert_eq!(results.posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    assert_eq!(results.total_results, 2);
}

#[tokio::test]
async fn test_search_can_be_disabled() {
    let settings = SiteSettings {
        enable_search: false,
        ..Default::default()
    };
    let err = portal_with(settings).search("quest", None).await.unwrap_err();
    assert!(matches!(err, PortalError::FeatureDisabled("search")));
}

#[tokio::test]
async fn test_blog_pages_newest_first() {
    let settings = SiteSettings {
        posts_per_page: 3,
        ..Default::default()
    };
    let portal = portal_with(settings);

    let first = portal.blog(None, None, 1).await.unwrap();
    assert_eq!(
        first.posts.items.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(first.posts.total_pages, 2);
    assert_eq!(first.pager, vec![1, 2]);
    assert_eq!(first.categories, vec!["Reviews", "Guides", "Interviews"]);

    let second = portal.blog(None, None, 2).await.unwrap();
    assert_eq!(second.posts.items.len(), 1);

    let guides = portal.blog(None, Some("Guides"), 1).await.unwrap();
    assert_eq!(guides.posts.total_items, 2);
    let lowercase = portal.blog(None, Some("guides"), 1).await.unwrap();
    assert_eq!(lowercase.posts.total_items, 0);
}

#[tokio::test]
async fn test_post_by_slug_with_related_posts() {
    let page = portal().blog_post("how-to-master-puzzle-games").await.unwrap();
    assert_eq!(page.post.id, 2);
    assert_eq!(
        page.related_posts.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![4]
    );

    let err = portal().blog_post("missing").await.unwrap_err();
    assert!(matches!(err, PortalError::PostNotFound(_)));
}

#[tokio::test]
async fn test_game_detail_shows_approved_comments_only() {
    let page = portal().game_detail(1).await.unwrap();

    assert_eq!(page.game.title, "Space Adventure");
    assert_eq!(page.comments.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(
        page.related_games.iter().map(|g| g.id).collect::<Vec<_>>(),
        vec![5]
    );
    assert_eq!(page.ad.map(|ad| ad.id), Some(5));
}

#[tokio::test]
async fn test_game_detail_for_missing_game() {
    let err = portal().game_detail(99).await.unwrap_err();
    assert!(matches!(err, PortalError::GameNotFound(99)));
}

#[tokio::test]
async fn test_posted_comment_is_approved_and_listed() {
    let portal = portal();
    let comment = portal.post_comment(3, comment_input()).await.unwrap();

    assert_eq!(comment.id, 6);
    assert_eq!(comment.status, APPROVED);
    let page = portal.game_detail(3).await.unwrap();
    assert!(page.comments.iter().any(|c| c.id == comment.id));
}

#[tokio::test]
async fn test_comment_on_missing_game_is_rejected() {
    let portal = portal();
    let err = portal.post_comment(42, comment_input()).await.unwrap_err();

    assert!(matches!(err, PortalError::GameNotFound(42)));
    assert_eq!(portal.services().comments.len().unwrap(), 5);
}

#[tokio::test]
async fn test_comments_can_be_switched_off() {
    let settings = SiteSettings {
        enable_comments: false,
        ..Default::default()
    };
    let portal = portal_with(settings);

    let err = portal.post_comment(1, comment_input()).await.unwrap_err();
    assert!(matches!(err, PortalError::FeatureDisabled("comments")));
    assert!(portal.game_detail(1).await.unwrap().comments.is_empty());
}

#[tokio::test]
async fn test_toggle_ad_flips_active_flag() {
    let portal = portal();

    let off = portal.toggle_ad(1).await.unwrap();
    assert!(!off.is_active);
    let on = portal.toggle_ad(1).await.unwrap();
    assert!(on.is_active);

    let stored = portal.services().ads.get_by_id(1).await.unwrap().unwrap();
    assert!(stored.is_active);
    assert!(matches!(portal.toggle_ad(77).await, Err(PortalError::AdNotFound(77))));
}

#[tokio::test(start_paused = true)]
async fn test_pages_wait_for_simulated_latency() {
    let services = Services::new(Fixtures::builtin(), &StoreConfig::default());
    let portal = Portal::new(services, SiteSettings::default());

    let started = tokio::time::Instant::now();
    portal.home().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(300));
}
