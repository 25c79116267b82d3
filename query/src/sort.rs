use std::{cmp::Ordering, fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use types::{AdZone, BlogPost, Category, Comment, Game};

use crate::QueryError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Popular,
    Rating,
    Alphabetical,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Popular,
        SortKey::Rating,
        SortKey::Alphabetical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::Alphabetical => "alphabetical",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortKey(s.to_string()))
    }
}

/// Values a record exposes to the sort keys. A kind without a value for a
/// key returns `None` and sorts after the records that have one; records
/// that all lack it keep their input order.
pub trait Sortable {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn popularity(&self) -> Option<u64> {
        None
    }

    fn rating(&self) -> Option<f64> {
        None
    }

    fn sort_name(&self) -> &str;
}

impl Sortable for Game {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.published_at)
    }

    fn popularity(&self) -> Option<u64> {
        Some(self.plays)
    }

    fn rating(&self) -> Option<f64> {
        Some(self.rating)
    }

    fn sort_name(&self) -> &str {
        &self.title
    }
}

impl Sortable for BlogPost {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.published_at)
    }

    fn sort_name(&self) -> &str {
        &self.title
    }
}

impl Sortable for Category {
    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl Sortable for AdZone {
    fn popularity(&self) -> Option<u64> {
        Some(self.impressions)
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl Sortable for Comment {
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }

    fn sort_name(&self) -> &str {
        &self.author
    }
}

/// Present values first, compared with `cmp`; missing values last.
fn present_first<V>(a: Option<V>, b: Option<V>, cmp: impl Fn(&V, &V) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Dictionary order: letters compare without case first, and on a tie the
/// lowercase spelling comes first ("apple" < "Apple" < "banana").
///
/// Case folding is Unicode-aware but accents are not folded, so after
/// lowercasing names compare by code point: "éclair" sorts after "zelda".
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

fn compare<T: Sortable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => present_first(a.timestamp(), b.timestamp(), |a, b| b.cmp(a)),
        SortKey::Oldest => present_first(a.timestamp(), b.timestamp(), |a, b| a.cmp(b)),
        SortKey::Popular => present_first(a.popularity(), b.popularity(), |a, b| b.cmp(a)),
        SortKey::Rating => present_first(a.rating(), b.rating(), |a, b| b.total_cmp(a)),
        SortKey::Alphabetical => locale_cmp(a.sort_name(), b.sort_name()),
    }
}

/// Stable sort: records comparing equal under `key` keep their input order.
pub fn sort_records<T: Sortable>(records: Vec<T>, key: SortKey) -> Vec<T> {
    records
        .into_iter()
        .sorted_by(|a, b| compare(a, b, key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use types::{BlogPostDraft, Entity, GameDraft};

    fn game(id: u64, title: &str, rating: f64, plays: u64, day: u32) -> Game {
        Game::from_draft(
            id,
            GameDraft {
                title: title.to_string(),
                rating,
                plays,
                published_at: Some(Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()),
                ..Default::default()
            },
        )
    }

    fn ratings(games: &[Game]) -> Vec<f64> {
        games.iter().map(|g| g.rating).collect()
    }

    fn ids(games: &[Game]) -> Vec<u64> {
        games.iter().map(|g| g.id).collect()
    }

    #[test]
    fn test_rating_sorts_descending() {
        let games = vec![
            game(1, "Space Adventure", 4.8, 15420, 1),
            game(2, "Puzzle Master", 4.6, 8950, 2),
            game(3, "Racing Thunder", 4.7, 12300, 3),
            game(4, "Fantasy Quest", 4.9, 22100, 4),
            game(5, "Arcade Shooter", 4.4, 7800, 5),
        ];
        let sorted = sort_records(games, SortKey::Rating);
        assert_eq!(ratings(&sorted), vec![4.9, 4.8, 4.7, 4.6, 4.4]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let games = vec![
            game(1, "A", 4.5, 0, 1),
            game(2, "B", 4.9, 0, 1),
            game(3, "C", 4.5, 0, 1),
            game(4, "D", 4.5, 0, 1),
        ];
        assert_eq!(ids(&sort_records(games.clone(), SortKey::Rating)), vec![2, 1, 3, 4]);
        assert_eq!(ids(&sort_records(games, SortKey::Newest)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_time_and_popularity_keys() {
        let games = vec![
            game(1, "Mid", 4.0, 200, 10),
            game(2, "Old", 4.0, 900, 1),
            game(3, "New", 4.0, 50, 20),
        ];
        assert_eq!(ids(&sort_records(games.clone(), SortKey::Newest)), vec![3, 1, 2]);
        assert_eq!(ids(&sort_records(games.clone(), SortKey::Oldest)), vec![2, 1, 3]);
        assert_eq!(ids(&sort_records(games, SortKey::Popular)), vec![2, 1, 3]);
    }

    #[test]
    fn test_alphabetical_is_dictionary_order() {
        let games = vec![
            game(1, "banana", 0.0, 0, 1),
            game(2, "Apple", 0.0, 0, 1),
            game(3, "apple", 0.0, 0, 1),
            game(4, "Cherry", 0.0, 0, 1),
        ];
        assert_eq!(ids(&sort_records(games, SortKey::Alphabetical)), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_accented_names_sort_by_code_point() {
        let games = vec![
            game(1, "Zelda", 0.0, 0, 1),
            game(2, "Éclair", 0.0, 0, 1),
            game(3, "Eagle", 0.0, 0, 1),
        ];
        assert_eq!(ids(&sort_records(games, SortKey::Alphabetical)), vec![3, 1, 2]);
    }

    #[test]
    fn test_kinds_without_a_key_keep_order() {
        let posts: Vec<_> = ["Zeta", "Alpha", "Mid"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                BlogPost::from_draft(
                    i as u64 + 1,
                    BlogPostDraft {
                        title: title.to_string(),
                        published_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
                        ..Default::default()
                    },
                )
            })
            .collect();
        let sorted = sort_records(posts, SortKey::Rating);
        let titles: Vec<_> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_sort_key_names() {
        assert_eq!("popular".parse::<SortKey>(), Ok(SortKey::Popular));
        assert_eq!(SortKey::Alphabetical.to_string(), "alphabetical");
        assert_eq!(
            "relevance".parse::<SortKey>(),
            Err(QueryError::UnknownSortKey("relevance".to_string()))
        );
        assert_eq!(serde_json::to_string(&SortKey::Newest).unwrap(), "\"newest\"");
    }
}
