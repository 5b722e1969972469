//! The browsing session: one parameterized component.
//!
//! The session owns the record store, the query state, the edit buffer,
//! and the debouncer, and exposes every user intent as an operation.
//! Page size, debounce interval, and cache presence are configuration;
//! the original system's two near-duplicate components collapse into
//! this one type.

use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use roster_model::{
    EditBuffer, QueryState, RecordId, Result, RosterError, SortOrder, UserRecord, WebsiteFilter,
};
use roster_query::{paginate, run_query};

use crate::bridge::{CacheBridge, RemoteSource};
use crate::debounce::Debouncer;
use crate::store::RecordStore;

/// Default rows per page.
const DEFAULT_PAGE_SIZE: usize = 5;

/// Default quiet interval before a search commit.
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Rows per rendered page.
    pub page_size: NonZeroUsize,
    /// Quiet interval between the last keystroke and the search commit.
    pub debounce: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).expect("default page size is nonzero"),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Everything the view renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Rows visible on the current page, in pipeline order.
    pub rows: Vec<UserRecord>,
    /// 1-based page number after clamping.
    pub page: usize,
    /// Total pages over the filtered row set; 0 when it is empty.
    pub total_pages: usize,
    /// Filtered row count across all pages.
    pub total_rows: usize,
    /// Page-relative serial number of the first visible row (1-based).
    pub first_serial: usize,
    /// Row currently in edit mode, if any.
    pub editing: Option<RecordId>,
    /// Whether pagination controls should be rendered at all.
    pub controls_visible: bool,
    pub has_prev: bool,
    pub has_next: bool,
}

pub struct Session {
    config: SessionConfig,
    store: RecordStore,
    source: Box<dyn RemoteSource>,
    query: QueryState,
    edit: Option<EditBuffer>,
    debouncer: Debouncer,
}

impl Session {
    pub fn new(
        config: SessionConfig,
        bridge: Option<Box<dyn CacheBridge>>,
        source: Box<dyn RemoteSource>,
    ) -> Self {
        let debouncer = Debouncer::new(config.debounce);
        Self {
            config,
            store: RecordStore::new(bridge),
            source,
            query: QueryState::default(),
            edit: None,
            debouncer,
        }
    }

    /// Seed the store: cache first, remote fetch as fallback.
    ///
    /// A fetch failure is logged and swallowed; the store keeps its
    /// prior (possibly empty) contents and the view renders its empty
    /// state. After a successful fetch the set is mirrored into the
    /// cache exactly once.
    pub fn hydrate(&mut self) {
        if self.store.hydrate_from_cache() {
            info!(count = self.store.records().len(), "hydrated from cache");
            return;
        }
        match self.source.fetch() {
            Ok(records) => {
                info!(count = records.len(), "fetched records from remote source");
                self.store.load(records);
                self.store.persist_now();
            }
            Err(error) => {
                warn!(%error, "remote fetch failed; showing what we have");
            }
        }
    }

    pub fn records(&self) -> &[UserRecord] {
        self.store.records()
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer> {
        self.edit.as_ref()
    }

    // ------------------------------------------------------------------
    // Search, filter, sort, paging
    // ------------------------------------------------------------------

    /// Feed a raw keystroke into the debouncer.
    pub fn search_input(&mut self, text: &str, now: Instant) {
        self.debouncer.input(text, now);
    }

    /// Advance the debounce clock; commit the search term if it is due.
    ///
    /// Returns true when a commit happened (the page resets to 1).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(value) => {
                debug!(search = %value, "committing debounced search");
                self.query.search_text = value;
                self.query.current_page = 1;
                true
            }
            None => false,
        }
    }

    /// Whether a keystroke is waiting for its quiet interval.
    pub fn has_pending_search(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Install a search term immediately, bypassing the debouncer.
    ///
    /// One-shot renders (the `list` command) have no keystroke stream to
    /// coalesce.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search_text = text.into();
        self.query.current_page = 1;
    }

    pub fn set_filter(&mut self, filter: WebsiteFilter) {
        self.query.filter = filter;
        self.query.current_page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.query.sort = sort;
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.query.current_page = page.max(1);
    }

    pub fn next_page(&mut self) {
        let total = self.filtered_row_count().div_ceil(self.config.page_size.get());
        self.query.current_page = (self.query.current_page + 1).min(total.max(1));
    }

    pub fn prev_page(&mut self) {
        self.query.current_page = self.query.current_page.saturating_sub(1).max(1);
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Open the edit buffer for `id`, replacing any prior buffer.
    pub fn edit(&mut self, id: RecordId) -> Result<()> {
        let record = self
            .store
            .get(id)
            .ok_or(RosterError::UnknownRecord(id))?;
        self.edit = Some(EditBuffer::seed(record));
        Ok(())
    }

    /// Update the buffered name. Requires an open edit buffer.
    pub fn edit_name(&mut self, value: impl Into<String>) -> Result<()> {
        let buffer = self.edit.as_mut().ok_or(RosterError::EditTargetMissing)?;
        buffer.name = value.into();
        Ok(())
    }

    /// Update the buffered email. Requires an open edit buffer.
    pub fn edit_email(&mut self, value: impl Into<String>) -> Result<()> {
        let buffer = self.edit.as_mut().ok_or(RosterError::EditTargetMissing)?;
        buffer.email = value.into();
        Ok(())
    }

    /// Drop the edit buffer without touching the store.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Apply the buffered name/email to the target record.
    ///
    /// No validation: empty names and emails are accepted by design.
    pub fn save(&mut self) -> Result<()> {
        let buffer = self.edit.take().ok_or(RosterError::EditTargetMissing)?;
        debug!(id = %buffer.target, "saving edited record");
        self.store.replace(buffer.target, &buffer.patch());
        Ok(())
    }

    /// Remove a record. Clears the edit buffer when it targeted the
    /// deleted row, so no phantom edit survives.
    pub fn delete(&mut self, id: RecordId) {
        debug!(id = %id, "deleting record");
        self.store.remove(id);
        if self.edit.as_ref().is_some_and(|buffer| buffer.target == id) {
            self.edit = None;
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Compute the current page view.
    ///
    /// Clamps `current_page` into `[1, max(total_pages, 1)]` first, so a
    /// shrunken row set (delete, narrower filter or search) can never
    /// strand the view on an empty page.
    pub fn current_page(&mut self) -> PageView {
        let rows = run_query(self.store.records(), &self.query);
        let size = self.config.page_size.get();
        let total_pages = rows.len().div_ceil(size);
        self.query.current_page = self.query.current_page.clamp(1, total_pages.max(1));

        let page = paginate(&rows, self.config.page_size, self.query.current_page);
        PageView {
            page: self.query.current_page,
            total_pages: page.total_pages,
            total_rows: rows.len(),
            first_serial: (self.query.current_page - 1) * size + 1,
            editing: self.edit.as_ref().map(|buffer| buffer.target),
            controls_visible: rows.len() > size,
            has_prev: self.query.current_page > 1,
            has_next: self.query.current_page < page.total_pages,
            rows: page.rows,
        }
    }

    /// Tear the session down, releasing any pending debounce commit.
    pub fn dispose(&mut self) {
        self.debouncer.cancel();
    }

    fn filtered_row_count(&self) -> usize {
        run_query(self.store.records(), &self.query).len()
    }
}
