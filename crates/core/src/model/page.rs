/// Pagination position for the historical campaign list.
///
/// Pages are 1-based. `total_pages` comes from the server and is the only
/// authority on how far the list goes; until the first page has been
/// fetched it is unknown and only page 1 is a valid target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    current_page: u32,
    total_pages: Option<u32>,
    page_size: u32,
}

impl PageCursor {
    /// Creates a cursor at page 1 with an unknown page count.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: None,
            page_size,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns true if `page` may be requested from the service.
    ///
    /// Before the first fetch only page 1 qualifies; afterwards any page in
    /// `1..=total_pages`. Out-of-range targets must never reach the network
    /// layer.
    #[must_use]
    pub fn is_valid_target(&self, page: u32) -> bool {
        match self.total_pages {
            None => page == 1,
            Some(total) => page >= 1 && page <= total,
        }
    }

    /// Records the server-reported position after a successful list fetch.
    pub fn settle(&mut self, current_page: u32, total_pages: u32) {
        self.current_page = current_page.max(1);
        self.total_pages = Some(total_pages);
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.total_pages
            .is_some_and(|total| self.current_page < total)
    }
}
