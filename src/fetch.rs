use alloc::string::String;
use alloc::vec::Vec;

use crate::{ItemsList, LoadError, PagingCursor, SelectItem};

/// A page the adapter should fetch with its `loadItems(skip, take, search)` capability.
///
/// The request doubles as the fetch token: hand it back to
/// [`crate::Autocomplete::resolve_load`] together with the result. A request whose
/// `generation` no longer matches the controller is discarded on arrival. `seq` is unique
/// per issued request, so a retry of the same page never matches the attempt it replaces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadRequest {
    pub seq: u64,
    pub generation: u64,
    pub skip: usize,
    pub take: usize,
    pub search: String,
}

/// What happened to a resolved request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadOutcome {
    /// The page was merged. `appended` counts items not already listed.
    Applied { appended: usize, exhausted: bool },
    /// The load failed. The cursor did not move.
    Failed,
    /// The request was superseded (new search, remount) or already resolved.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Failed(LoadError),
}

/// Drives paged loading for one search session at a time.
///
/// Each session has a generation number. [`PageLoader::reset`] starts a new session and
/// makes every outstanding request stale. Within a session at most one request is in
/// flight; further triggers are coalesced into it.
#[derive(Clone, Debug)]
pub struct PageLoader<T: SelectItem> {
    items: ItemsList<T>,
    cursor: PagingCursor,
    generation: u64,
    next_seq: u64,
    in_flight: Option<LoadRequest>,
    exhausted: bool,
    status: LoadStatus,
}

impl<T: SelectItem> PageLoader<T> {
    pub fn new(take: usize) -> Self {
        Self {
            items: ItemsList::new(),
            cursor: PagingCursor::new(take),
            generation: 0,
            next_seq: 0,
            in_flight: None,
            exhausted: false,
            status: LoadStatus::Idle,
        }
    }

    pub fn items(&self) -> &ItemsList<T> {
        &self.items
    }

    pub fn cursor(&self) -> PagingCursor {
        self.cursor
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn in_flight(&self) -> Option<&LoadRequest> {
        self.in_flight.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether a short page ended this session.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn set_take(&mut self, take: usize) {
        self.cursor.set_take(take);
    }

    /// Starts a new session: clears the list, rewinds the cursor and invalidates every
    /// outstanding request. Request sequence numbers keep counting across sessions.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.items.clear();
        self.cursor.reset();
        self.in_flight = None;
        self.exhausted = false;
        self.status = LoadStatus::Idle;
        tdebug!(generation = self.generation, "PageLoader::reset");
    }

    /// Issues a request for the next page, unless one is already in flight or the session is
    /// exhausted.
    pub fn request(&mut self, search: &str) -> Option<LoadRequest> {
        if self.in_flight.is_some() {
            tdebug!(
                generation = self.generation,
                skip = self.cursor.skip,
                "PageLoader: request coalesced into in-flight load"
            );
            return None;
        }
        if self.exhausted {
            ttrace!(skip = self.cursor.skip, "PageLoader: session exhausted");
            return None;
        }

        let request = LoadRequest {
            seq: self.next_seq,
            generation: self.generation,
            skip: self.cursor.skip,
            take: self.cursor.take,
            search: String::from(search),
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        tdebug!(
            seq = request.seq,
            generation = request.generation,
            skip = request.skip,
            take = request.take,
            "PageLoader: issuing request"
        );
        self.in_flight = Some(request.clone());
        self.status = LoadStatus::Loading;
        Some(request)
    }

    /// Applies the outcome of `request`.
    pub fn resolve(
        &mut self,
        request: &LoadRequest,
        result: Result<Vec<T>, LoadError>,
    ) -> LoadOutcome {
        if self.in_flight.as_ref() != Some(request) {
            ttrace!(
                seq = request.seq,
                generation = request.generation,
                current = self.generation,
                skip = request.skip,
                "PageLoader: discarding stale result"
            );
            return LoadOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                let received = page.len();
                let appended = self.items.extend(page);
                // The page size may have changed since the request went out.
                self.cursor.advance_by(request.take);
                self.exhausted = PagingCursor::is_short_page_for(received, request.take);
                self.status = LoadStatus::Idle;
                tdebug!(
                    received,
                    appended,
                    skip = self.cursor.skip,
                    exhausted = self.exhausted,
                    "PageLoader: page applied"
                );
                LoadOutcome::Applied {
                    appended,
                    exhausted: self.exhausted,
                }
            }
            Err(err) => {
                twarn!(
                    generation = request.generation,
                    skip = request.skip,
                    error = %err,
                    "PageLoader: load failed"
                );
                self.status = LoadStatus::Failed(err);
                LoadOutcome::Failed
            }
        }
    }

    /// Adds items that did not come from a page (e.g. a preselected value). Does not move
    /// the cursor.
    pub fn merge(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        self.items.extend(items)
    }
}
