use database::Fixtures;
use query::{
    paginate, sort_records, total_pages, CaseSensitivity, GameField, PageRequest, Query,
    Selector, SortKey, TextFilter,
};
use types::Game;

fn catalogue() -> Vec<Game> {
    let mut games = Fixtures::builtin().games;
    games[2].description = "Finish the championship quest on every track".to_string();
    games
}

fn ids(games: &[Game]) -> Vec<u64> {
    games.iter().map(|g| g.id).collect()
}

#[test]
fn test_search_over_title_and_description() {
    let filter = TextFilter::<GameField>::from_names("quest", &["title", "description"]).unwrap();
    let page = Query::new().search(filter).apply(catalogue());

    assert_eq!(ids(&page.items), vec![3, 4]);
    assert_eq!(page.total_items, 2);
}

#[test]
fn test_search_is_case_insensitive_both_ways() {
    let filter = TextFilter::new("QUEST", vec![GameField::Title]);
    let page = Query::new().search(filter).apply(catalogue());
    assert_eq!(ids(&page.items), vec![4]);
}

#[test]
fn test_builtin_ratings_sort_descending() {
    let sorted = sort_records(catalogue(), SortKey::Rating);
    let ratings: Vec<f64> = sorted.iter().map(|g| g.rating).collect();
    assert_eq!(ratings, vec![4.9, 4.8, 4.7, 4.6, 4.4]);
}

#[test]
fn test_sorting_does_not_change_membership() {
    for key in SortKey::ALL {
        let mut sorted = ids(&sort_records(catalogue(), key));
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5], "{key} lost or duplicated a record");
    }
}

#[test]
fn test_pages_of_two_over_five_games() {
    let request = |page| PageRequest::new(page, 2).unwrap();

    assert_eq!(ids(&paginate(catalogue(), request(1)).items), vec![1, 2]);
    assert_eq!(ids(&paginate(catalogue(), request(3)).items), vec![5]);
    assert!(paginate(catalogue(), request(4)).items.is_empty());
    assert_eq!(total_pages(5, 2), 3);
}

#[test]
fn test_category_browse_sorted_by_plays() {
    let page = Query::new()
        .select(Selector::new(GameField::Category, "action", CaseSensitivity::Insensitive))
        .sort(SortKey::Popular)
        .page(PageRequest::first(12).unwrap())
        .apply(catalogue());

    assert_eq!(ids(&page.items), vec![1, 5]);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn test_newest_first_by_publish_date() {
    let sorted = sort_records(catalogue(), SortKey::Newest);
    assert_eq!(ids(&sorted), vec![3, 5, 2, 1, 4]);
}
