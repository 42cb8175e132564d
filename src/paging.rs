/// Pagination offset for the current search session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PagingCursor {
    pub skip: usize,
    pub take: usize,
}

impl PagingCursor {
    /// Creates a cursor at the first page. `take` is clamped to at least 1.
    pub fn new(take: usize) -> Self {
        Self {
            skip: 0,
            take: take.max(1),
        }
    }

    /// Moves past one full page of `take` rows, the size the page was requested with.
    pub fn advance_by(&mut self, take: usize) {
        self.skip = self.skip.saturating_add(take);
    }

    pub fn reset(&mut self) {
        self.skip = 0;
    }

    /// Changes the page size. Takes effect on the next request.
    pub fn set_take(&mut self, take: usize) {
        self.take = take.max(1);
    }

    /// A page shorter than the `take` it was requested with means the source has nothing
    /// after it.
    pub fn is_short_page_for(received: usize, take: usize) -> bool {
        received < take
    }
}
