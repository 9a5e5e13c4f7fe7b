//! Page-based pagination over list results.

/// Pagination parameters for list queries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { page: 1, limit: 25 }
    }
}

impl Page {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }
}

/// Descriptor of an adjacent page, mirrored into list responses.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRef {
    pub page: u32,
    pub limit: u32,
}

/// A page of results plus enough context to navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl<T> Paginated<T> {
    pub fn next(&self) -> Option<PageRef> {
        let end = u64::from(self.page) * u64::from(self.limit);
        (end < self.total).then_some(PageRef {
            page: self.page + 1,
            limit: self.limit,
        })
    }

    pub fn prev(&self) -> Option<PageRef> {
        (self.page > 1).then_some(PageRef {
            page: self.page - 1,
            limit: self.limit,
        })
    }
}

/// Slice an already-sorted list into the requested page.
pub fn paginate<T>(items: Vec<T>, page: Page) -> Paginated<T> {
    let total = items.len() as u64;
    let start = (page.page as usize - 1).saturating_mul(page.limit as usize);
    let items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(page.limit as usize)
        .collect();

    Paginated {
        items,
        total,
        page: page.page,
        limit: page.limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_has_next_but_no_prev() {
        let p = paginate((0..30).collect(), Page::new(1, 25));
        assert_eq!(p.items.len(), 25);
        assert_eq!(p.next(), Some(PageRef { page: 2, limit: 25 }));
        assert_eq!(p.prev(), None);
    }

    #[test]
    fn last_page_has_prev_but_no_next() {
        let p = paginate((0..30).collect(), Page::new(2, 25));
        assert_eq!(p.items, (25..30).collect::<Vec<_>>());
        assert_eq!(p.next(), None);
        assert_eq!(p.prev(), Some(PageRef { page: 1, limit: 25 }));
    }

    #[test]
    fn exact_boundary_has_no_next() {
        let p = paginate((0..25).collect(), Page::new(1, 25));
        assert_eq!(p.next(), None);
    }

    #[test]
    fn page_beyond_end_is_empty() {
        let p = paginate((0..3).collect::<Vec<i32>>(), Page::new(5, 25));
        assert!(p.items.is_empty());
        assert_eq!(p.total, 3);
    }

    #[test]
    fn zero_inputs_are_clamped() {
        let page = Page::new(0, 0);
        assert_eq!(page, Page { page: 1, limit: 1 });
    }
}
