//! State of the stock table, free of I/O.
//!
//! Every backend operation is split into `begin_*` (issued before the call)
//! and `complete_*` (fed with the call result). The async driver lives in
//! [`super::controller`].

use super::aggregate::{InventoryItem, InventoryItemDto, InventoryItemForm, InventoryItemId};
use super::gateway::ApiError;
use super::projection::{project, DisplayRow};
use crate::shared::notification::Notification;
use crate::shared::pagination::{clamp_page, paginate, total_pages, PageWindow};
use crate::shared::selection::{Selection, SelectionError};
use std::collections::HashSet;
use thiserror::Error;

/// Rows per page of the stock table
pub const PAGE_SIZE: usize = 6;

pub const MSG_FETCH_FAILED: &str = "Failed to fetch Stock. Please try again later.";
pub const MSG_DELETED: &str = "Item deleted successfully!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete item.";
pub const MSG_DELETE_CANCELLED: &str = "Delete operation cancelled";
pub const MSG_NO_ID: &str = "No Stock ID provided for deletion";
pub const MSG_UPDATED: &str = "Updated successfully!";
pub const MSG_UPDATE_FAILED: &str = "Failed to update data. Please try again later.";

/// Sequence number of a list fetch; only the latest one may be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Applied,
    /// A newer fetch was issued; this response was dropped
    Stale,
    Failed(Notification),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteStart {
    Started,
    /// A delete for the same id is still outstanding
    InFlight,
    Rejected(Notification),
}

/// Result of a finished write
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome {
    pub notification: Notification,
    /// Re-synchronise the collection with the backend
    pub refresh: bool,
}

impl WriteOutcome {
    pub fn succeeded(&self) -> bool {
        !self.notification.is_error()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("record {0} is not in the table")]
    NotFound(InventoryItemId),

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

#[derive(Debug, Clone)]
pub struct InventoryTable {
    items: Vec<InventoryItem>,
    page: usize,
    page_size: usize,
    selection: Selection<InventoryItem>,
    latest_refresh: u64,
    pending_deletes: HashSet<InventoryItemId>,
    /// Bumped on every opened edit dialog
    edit_session: u64,
    /// Session that issued the outstanding save, if any
    saving_edit: Option<u64>,
    is_loaded: bool,
}

impl Default for InventoryTable {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl InventoryTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size,
            selection: Selection::Idle,
            latest_refresh: 0,
            pending_deletes: HashSet::new(),
            edit_session: 0,
            saving_edit: None,
            is_loaded: false,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn find(&self, id: &InventoryItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    pub fn window(&self) -> PageWindow<'_, InventoryItem> {
        paginate(&self.items, self.page_size, self.page)
    }

    /// Projected rows of the current page
    pub fn visible_rows(&self) -> Vec<DisplayRow> {
        self.window().visible.iter().map(project).collect()
    }

    /// Switches page without touching the backend; returns the page set
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = clamp_page(page, self.total_pages());
        self.page
    }

    fn settle_page(&mut self) {
        if self.page > self.total_pages() {
            self.page = 1;
        }
    }

    // ------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_refresh += 1;
        RefreshTicket(self.latest_refresh)
    }

    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<InventoryItem>, ApiError>,
    ) -> RefreshOutcome {
        if ticket.0 != self.latest_refresh {
            log::debug!(
                "dropping stale stock response #{} (latest #{})",
                ticket.0,
                self.latest_refresh
            );
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(mut items) => {
                // newest first
                items.reverse();
                self.items = items;
                self.is_loaded = true;
                self.settle_page();
                log::debug!("stock table loaded: {} records", self.items.len());
                RefreshOutcome::Applied
            }
            Err(e) => {
                log::warn!("Error fetching stock: {}", e);
                RefreshOutcome::Failed(Notification::error(MSG_FETCH_FAILED))
            }
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &Selection<InventoryItem> {
        &self.selection
    }

    pub fn open_edit(&mut self, id: &InventoryItemId) -> Result<(), TableError> {
        let item = self.lookup(id)?;
        self.selection.edit(item)?;
        self.edit_session += 1;
        Ok(())
    }

    pub fn open_view(&mut self, id: &InventoryItemId) -> Result<(), TableError> {
        let item = self.lookup(id)?;
        self.selection.view(item)?;
        Ok(())
    }

    /// Cancel/close of either dialog. An outstanding save keeps running
    /// and still blocks a new one until it completes.
    pub fn close_dialog(&mut self) {
        self.selection.close();
    }

    fn lookup(&self, id: &InventoryItemId) -> Result<InventoryItem, TableError> {
        self.find(id)
            .cloned()
            .ok_or_else(|| TableError::NotFound(id.clone()))
    }

    // ------------------------------------------------------------------
    // Delete
    // ------------------------------------------------------------------

    pub fn is_deleting(&self, id: &InventoryItemId) -> bool {
        self.pending_deletes.contains(id)
    }

    pub fn begin_delete(&mut self, id: &InventoryItemId) -> DeleteStart {
        if id.value().trim().is_empty() {
            return DeleteStart::Rejected(Notification::error(MSG_NO_ID));
        }
        if !self.pending_deletes.insert(id.clone()) {
            return DeleteStart::InFlight;
        }
        DeleteStart::Started
    }

    /// Success removes the record at once; the caller then refetches
    pub fn complete_delete(
        &mut self,
        id: &InventoryItemId,
        result: Result<(), ApiError>,
    ) -> WriteOutcome {
        self.pending_deletes.remove(id);

        match result {
            Ok(()) => {
                self.items.retain(|item| &item.id != id);
                if self.selection.current().map(|item| &item.id) == Some(id) {
                    self.selection.close();
                }
                self.settle_page();
                log::info!("stock item {} deleted", id);
                WriteOutcome {
                    notification: Notification::success(MSG_DELETED),
                    refresh: true,
                }
            }
            Err(e) => {
                log::warn!("Error deleting item {}: {}", id, e);
                WriteOutcome {
                    notification: Notification::error(e.user_message(MSG_DELETE_FAILED)),
                    refresh: false,
                }
            }
        }
    }

    pub fn delete_cancelled() -> Notification {
        Notification::cancelled(MSG_DELETE_CANCELLED)
    }

    // ------------------------------------------------------------------
    // Edit
    // ------------------------------------------------------------------

    pub fn is_saving_edit(&self) -> bool {
        self.saving_edit.is_some()
    }

    /// Validates the edit form of the open record and marks the save as
    /// outstanding. `Ok(None)` means a save is already running.
    pub fn begin_save_edit(
        &mut self,
        form: &InventoryItemForm,
    ) -> Result<Option<(InventoryItemId, InventoryItemDto)>, Notification> {
        let id = match self.selection.editing() {
            Some(item) => item.id.clone(),
            None => return Err(Notification::error("No item is being edited")),
        };
        if self.saving_edit.is_some() {
            return Ok(None);
        }
        let dto = form
            .validate()
            .map_err(|e| Notification::error(e.to_string()))?;
        self.saving_edit = Some(self.edit_session);
        Ok(Some((id, dto)))
    }

    /// Success closes the dialog and asks for a full refetch;
    /// failure keeps the dialog open
    pub fn complete_save_edit(
        &mut self,
        id: &InventoryItemId,
        result: Result<(), ApiError>,
    ) -> WriteOutcome {
        let session = self.saving_edit.take();

        match result {
            Ok(()) => {
                // a dialog reopened after cancel is not closed by the old save
                let same_dialog = session == Some(self.edit_session)
                    && self.selection.editing().map(|item| &item.id) == Some(id);
                if same_dialog {
                    self.selection.close();
                }
                log::info!("stock item {} updated", id);
                WriteOutcome {
                    notification: Notification::success(MSG_UPDATED),
                    refresh: true,
                }
            }
            Err(e) => {
                log::warn!("Error updating item {}: {}", id, e);
                WriteOutcome {
                    notification: Notification::error(e.user_message(MSG_UPDATE_FAILED)),
                    refresh: false,
                }
            }
        }
    }
}
