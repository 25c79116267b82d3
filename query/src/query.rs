use log::debug;

use crate::{
    field::Searchable,
    filter::{filter_eq, filter_text, Selector, TextFilter},
    paginate::{paginate, PageRequest, Paginated},
    sort::{sort_records, SortKey, Sortable},
};

/// A search, optional exact-match selectors, a sort and a page, applied in
/// that order.
#[derive(Clone, Debug)]
pub struct Query<F> {
    text: Option<TextFilter<F>>,
    selectors: Vec<Selector<F>>,
    sort: Option<SortKey>,
    page: Option<PageRequest>,
}

impl<F> Default for Query<F> {
    fn default() -> Self {
        Self {
            text: None,
            selectors: Vec::new(),
            sort: None,
            page: None,
        }
    }
}

impl<F: Copy> Query<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, filter: TextFilter<F>) -> Self {
        self.text = Some(filter);
        self
    }

    pub fn select(mut self, selector: Selector<F>) -> Self {
        self.selectors.push(selector);
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    pub fn page(mut self, request: PageRequest) -> Self {
        self.page = Some(request);
        self
    }

    pub fn apply<T>(&self, records: Vec<T>) -> Paginated<T>
    where
        T: Searchable<Field = F> + Sortable,
    {
        let before = records.len();
        let mut records = match &self.text {
            Some(filter) => filter_text(records, &filter.query, &filter.fields),
            None => records,
        };
        for selector in &self.selectors {
            records = filter_eq(records, selector.field, &selector.value, selector.case);
        }
        if let Some(key) = self.sort {
            records = sort_records(records, key);
        }
        debug!("Query kept {} of {} records", records.len(), before);
        match self.page {
            Some(request) => paginate(records, request),
            None => Paginated::whole(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CaseSensitivity, GameField};
    use types::{Entity, Game, GameDraft};

    fn game(id: u64, title: &str, category: &str, plays: u64) -> Game {
        Game::from_draft(
            id,
            GameDraft {
                title: title.to_string(),
                category: category.to_string(),
                plays,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_query_runs_filter_then_sort_then_page() {
        let games = vec![
            game(1, "Star Racer", "Racing", 10),
            game(2, "Star Puzzle", "Puzzle", 50),
            game(3, "Star Drift", "Racing", 30),
            game(4, "Mud Racer", "Racing", 90),
        ];
        let query = Query::new()
            .search(TextFilter::new("star", vec![GameField::Title]))
            .select(Selector::new(GameField::Category, "racing", CaseSensitivity::Insensitive))
            .sort(SortKey::Popular)
            .page(PageRequest::new(1, 1).unwrap());

        let page = query.apply(games);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 3);
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let games = vec![game(2, "B", "X", 1), game(1, "A", "X", 2)];
        let page = Query::<GameField>::new().apply(games);
        let ids: Vec<_> = page.items.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
