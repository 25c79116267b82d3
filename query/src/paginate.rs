use serde::{Deserialize, Serialize};

use crate::QueryError;

/// A 1-based page number and a page size, both validated non-zero.
/// Deserializing goes through the same checks as [`PageRequest::new`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPageRequest")]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPageRequest {
    page: usize,
    page_size: usize,
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = QueryError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        PageRequest::new(raw.page, raw.page_size)
    }
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Result<Self, QueryError> {
        if page == 0 {
            return Err(QueryError::InvalidPage);
        }
        if page_size == 0 {
            return Err(QueryError::InvalidPageSize);
        }
        Ok(Self { page, page_size })
    }

    pub fn first(page_size: usize) -> Result<Self, QueryError> {
        Self::new(1, page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// All of `items` as a single page.
    pub fn whole(items: Vec<T>) -> Self {
        let total_items = items.len();
        Self {
            items,
            page: 1,
            page_size: total_items.max(1),
            total_items,
            total_pages: usize::from(total_items > 0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

/// Number of pages needed for `total_items`; zero items means zero pages.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Cuts one page out of `records`. A page past the end is empty rather than
/// an error.
pub fn paginate<T>(records: Vec<T>, request: PageRequest) -> Paginated<T> {
    let total_items = records.len();
    let items = records
        .into_iter()
        .skip(request.offset())
        .take(request.page_size())
        .collect();
    Paginated {
        items,
        page: request.page(),
        page_size: request.page_size(),
        total_items,
        total_pages: total_pages(total_items, request.page_size()),
    }
}

/// Page numbers to show in a pager: at most `max_visible` consecutive
/// numbers, centred on `current` where the range allows.
pub fn page_window(current: usize, total: usize, max_visible: usize) -> Vec<usize> {
    if total == 0 || max_visible == 0 {
        return Vec::new();
    }
    if total <= max_visible {
        return (1..=total).collect();
    }
    let current = current.clamp(1, total);
    let half = max_visible / 2;
    let start = if current <= half + 1 {
        1
    } else if current + half >= total {
        total - max_visible + 1
    } else {
        current - half
    };
    (start..start + max_visible).collect()
}
