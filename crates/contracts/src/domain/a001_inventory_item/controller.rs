//! Async driver of [`InventoryTable`] and [`CreateFormState`].
//!
//! Each operation is `begin_*` → gateway call → `complete_*`. The state
//! borrow is never held across an await, so overlapping calls on the
//! single UI thread are fine; stale list responses are discarded by ticket.

use super::aggregate::{InventoryItemForm, InventoryItemId};
use super::create_form::CreateFormState;
use super::gateway::InventoryGateway;
use super::table::{DeleteStart, InventoryTable, RefreshOutcome, TableError, WriteOutcome};
use crate::shared::notification::Notification;
use std::cell::RefCell;
use std::rc::Rc;

/// What an operation produced for the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationReport {
    pub succeeded: bool,
    pub notifications: Vec<Notification>,
}

impl OperationReport {
    fn ok() -> Self {
        Self {
            succeeded: true,
            notifications: Vec::new(),
        }
    }

    fn failed(notification: Notification) -> Self {
        Self {
            succeeded: false,
            notifications: vec![notification],
        }
    }

    fn from_write(outcome: &WriteOutcome) -> Self {
        Self {
            succeeded: outcome.succeeded(),
            notifications: vec![outcome.notification.clone()],
        }
    }
}

pub struct InventoryTableController<G: InventoryGateway> {
    gateway: Rc<G>,
    table: Rc<RefCell<InventoryTable>>,
    create_form: Rc<RefCell<CreateFormState>>,
    on_change: Option<Rc<dyn Fn()>>,
}

impl<G: InventoryGateway> Clone for InventoryTableController<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Rc::clone(&self.gateway),
            table: Rc::clone(&self.table),
            create_form: Rc::clone(&self.create_form),
            on_change: self.on_change.clone(),
        }
    }
}

impl<G: InventoryGateway> InventoryTableController<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_table(gateway, InventoryTable::default())
    }

    pub fn with_table(gateway: G, table: InventoryTable) -> Self {
        Self {
            gateway: Rc::new(gateway),
            table: Rc::new(RefCell::new(table)),
            create_form: Rc::new(RefCell::new(CreateFormState::default())),
            on_change: None,
        }
    }

    /// Called after every state change (replaces a shared refresh flag)
    pub fn with_on_change(mut self, on_change: impl Fn() + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    pub fn read<R>(&self, f: impl FnOnce(&InventoryTable) -> R) -> R {
        f(&self.table.borrow())
    }

    pub fn read_form<R>(&self, f: impl FnOnce(&CreateFormState) -> R) -> R {
        f(&self.create_form.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut InventoryTable) -> R) -> R {
        let result = f(&mut self.table.borrow_mut());
        self.notify();
        result
    }

    fn notify(&self) {
        if let Some(on_change) = &self.on_change {
            on_change();
        }
    }

    // ------------------------------------------------------------------
    // Synchronous UI actions
    // ------------------------------------------------------------------

    pub fn set_page(&self, page: usize) -> usize {
        self.update(|t| t.set_page(page))
    }

    pub fn open_edit(&self, id: &InventoryItemId) -> Result<(), TableError> {
        self.update(|t| t.open_edit(id))
    }

    pub fn open_view(&self, id: &InventoryItemId) -> Result<(), TableError> {
        self.update(|t| t.open_view(id))
    }

    pub fn close_dialog(&self) {
        self.update(|t| t.close_dialog())
    }

    pub fn update_form(&self, f: impl FnOnce(&mut InventoryItemForm)) {
        f(&mut self.create_form.borrow_mut().form);
        self.notify();
    }

    // ------------------------------------------------------------------
    // Backend operations
    // ------------------------------------------------------------------

    /// Fetch everything and replace the collection (mount / data changed)
    pub async fn refresh(&self) -> OperationReport {
        let ticket = self.update(|t| t.begin_refresh());
        let result = self.gateway.fetch_all().await;
        match self.update(|t| t.complete_refresh(ticket, result)) {
            RefreshOutcome::Applied | RefreshOutcome::Stale => OperationReport::ok(),
            RefreshOutcome::Failed(n) => OperationReport::failed(n),
        }
    }

    /// Confirmed delete: optimistic removal, then a refetch
    pub async fn delete(&self, id: &InventoryItemId) -> OperationReport {
        match self.update(|t| t.begin_delete(id)) {
            DeleteStart::Started => {}
            DeleteStart::InFlight => return OperationReport::default(),
            DeleteStart::Rejected(n) => return OperationReport::failed(n),
        }

        let result = self.gateway.delete(id).await;
        let outcome = self.update(|t| t.complete_delete(id, result));
        self.follow_up(outcome).await
    }

    /// Save of the edit dialog: closes it and refetches on success
    pub async fn save_edit(&self, form: &InventoryItemForm) -> OperationReport {
        let (id, dto) = match self.update(|t| t.begin_save_edit(form)) {
            Ok(Some(pending)) => pending,
            Ok(None) => return OperationReport::default(),
            Err(n) => return OperationReport::failed(n),
        };

        let result = self.gateway.update(&id, &dto).await;
        let outcome = self.update(|t| t.complete_save_edit(&id, result));
        self.follow_up(outcome).await
    }

    /// Confirmed submit of the create form
    pub async fn create(&self) -> OperationReport {
        let begun = self.create_form.borrow_mut().begin_submit();
        self.notify();
        let dto = match begun {
            Ok(Some(dto)) => dto,
            Ok(None) => return OperationReport::default(),
            Err(n) => return OperationReport::failed(n),
        };

        let result = self.gateway.create(&dto).await;
        let outcome = self.create_form.borrow_mut().complete_submit(result);
        self.notify();
        self.follow_up(outcome).await
    }

    async fn follow_up(&self, outcome: WriteOutcome) -> OperationReport {
        let mut report = OperationReport::from_write(&outcome);
        if outcome.refresh {
            let refreshed = self.refresh().await;
            report.notifications.extend(refreshed.notifications);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory_item::aggregate::{
        InventoryItem, InventoryItemDto, MessageResponse,
    };
    use crate::domain::a001_inventory_item::gateway::ApiError;
    use crate::domain::a001_inventory_item::table::{MSG_DELETED, MSG_FETCH_FAILED, MSG_UPDATED};
    use crate::shared::notification::NotificationKind;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    type FetchResult = Result<Vec<InventoryItem>, ApiError>;

    #[derive(Default)]
    struct FakeGateway {
        stored: RefCell<Vec<InventoryItem>>,
        held_fetches: RefCell<VecDeque<oneshot::Receiver<FetchResult>>>,
        fail_writes: RefCell<Option<ApiError>>,
        fail_fetch: Cell<bool>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeGateway {
        fn with_items(count: usize) -> Self {
            let gw = FakeGateway::default();
            *gw.stored.borrow_mut() = (1..=count).map(item).collect();
            gw
        }

        fn write_result(&self) -> Result<(), ApiError> {
            match self.fail_writes.borrow().clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl InventoryGateway for FakeGateway {
        async fn fetch_all(&self) -> FetchResult {
            self.calls.borrow_mut().push("fetch".into());
            let held = self.held_fetches.borrow_mut().pop_front();
            if let Some(rx) = held {
                return rx.await.unwrap_or_else(|_| Err(ApiError::Network("dropped".into())));
            }
            if self.fail_fetch.get() {
                return Err(ApiError::Network("offline".into()));
            }
            Ok(self.stored.borrow().clone())
        }

        async fn create(&self, dto: &InventoryItemDto) -> Result<MessageResponse, ApiError> {
            self.calls.borrow_mut().push(format!("create {}", dto.item_code));
            self.write_result()?;
            let n = self.stored.borrow().len() + 1;
            let mut created = item(n);
            created.item_code = dto.item_code.clone();
            self.stored.borrow_mut().push(created);
            Ok(MessageResponse {
                message: Some("Invoice created successfully".into()),
            })
        }

        async fn update(&self, id: &InventoryItemId, dto: &InventoryItemDto) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("update {}", id));
            self.write_result()?;
            for stored in self.stored.borrow_mut().iter_mut() {
                if &stored.id == id {
                    stored.item_name = dto.item_name.clone();
                }
            }
            Ok(())
        }

        async fn delete(&self, id: &InventoryItemId) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {}", id));
            self.write_result()?;
            self.stored.borrow_mut().retain(|i| &i.id != id);
            Ok(())
        }
    }

    fn item(n: usize) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId::new(format!("id-{}", n)),
            item_code: format!("C{}", n),
            item_name: format!("Item {}", n),
            category: "Vegetables".into(),
            quantity: 2.0,
            rate: Some(50.0),
            location: None,
        }
    }

    fn id(n: usize) -> InventoryItemId {
        InventoryItemId::new(format!("id-{}", n))
    }

    fn valid_form(name: &str) -> InventoryItemForm {
        InventoryItemForm {
            item_code: "C9".into(),
            item_name: name.into(),
            category: "Fruits".into(),
            quantity: "1".into(),
            rate: "3".into(),
            location: "Calicut".into(),
        }
    }

    #[tokio::test]
    async fn test_refresh_loads_and_notifies_change() {
        let changes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&changes);
        let controller = InventoryTableController::new(FakeGateway::with_items(8))
            .with_on_change(move || counter.set(counter.get() + 1));

        let report = controller.refresh().await;
        assert!(report.succeeded);
        assert!(report.notifications.is_empty());
        assert!(changes.get() >= 2);

        let rows = controller.read(|t| t.visible_rows());
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].item_code, "C8");
        assert_eq!(rows[0].amount_display(), "90.00");
    }

    #[tokio::test]
    async fn test_refresh_failure_reports_error() {
        let gateway = FakeGateway::with_items(2);
        gateway.fail_fetch.set(true);
        let controller = InventoryTableController::new(gateway);

        let report = controller.refresh().await;
        assert!(!report.succeeded);
        assert_eq!(report.notifications[0].detail, MSG_FETCH_FAILED);
        assert!(!controller.read(|t| t.is_loaded()));
    }

    #[tokio::test]
    async fn test_out_of_order_responses_keep_latest() {
        let gateway = FakeGateway::default();
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        gateway.held_fetches.borrow_mut().push_back(rx_first);
        gateway.held_fetches.borrow_mut().push_back(rx_second);
        let controller = InventoryTableController::new(gateway);

        let driver = async {
            tokio::task::yield_now().await;
            let _ = tx_second.send(Ok(vec![item(2)]));
            tokio::task::yield_now().await;
            let _ = tx_first.send(Ok(vec![item(1), item(3), item(4)]));
        };
        let (a, b, ()) = tokio::join!(controller.refresh(), controller.refresh(), driver);

        assert!(a.succeeded && b.succeeded);
        let ids: Vec<InventoryItemId> = controller.read(|t| t.items().iter().map(|i| i.id.clone()).collect());
        assert_eq!(ids, vec![id(2)]);
    }

    #[tokio::test]
    async fn test_delete_removes_and_refetches() {
        let controller = InventoryTableController::new(FakeGateway::with_items(3));
        controller.refresh().await;

        let report = controller.delete(&id(2)).await;
        assert!(report.succeeded);
        assert_eq!(report.notifications.len(), 1);
        assert_eq!(report.notifications[0].detail, MSG_DELETED);
        assert!(controller.read(|t| t.find(&id(2)).is_none()));
        assert_eq!(
            *controller.gateway.calls.borrow(),
            vec!["fetch", "delete id-2", "fetch"]
        );
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_rows() {
        let gateway = FakeGateway::with_items(3);
        *gateway.fail_writes.borrow_mut() = Some(ApiError::Status {
            status: 500,
            message: Some("Database unavailable".into()),
        });
        let controller = InventoryTableController::new(gateway);
        controller.refresh().await;

        let report = controller.delete(&id(1)).await;
        assert!(!report.succeeded);
        assert_eq!(report.notifications[0].kind, NotificationKind::Error);
        assert_eq!(report.notifications[0].detail, "Database unavailable");
        assert_eq!(controller.read(|t| t.items().len()), 3);
        // no refetch after a failed write
        assert_eq!(controller.gateway.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_save_edit_closes_and_refetches() {
        let controller = InventoryTableController::new(FakeGateway::with_items(2));
        controller.refresh().await;
        controller.open_edit(&id(1)).unwrap();

        let report = controller.save_edit(&valid_form("Renamed")).await;
        assert!(report.succeeded);
        assert_eq!(report.notifications[0].detail, MSG_UPDATED);
        assert!(controller.read(|t| t.selection().is_idle()));
        let name = controller.read(|t| t.find(&id(1)).map(|i| i.item_name.clone()));
        assert_eq!(name.as_deref(), Some("Renamed"));
    }

    #[tokio::test]
    async fn test_save_edit_invalid_form_makes_no_call() {
        let controller = InventoryTableController::new(FakeGateway::with_items(1));
        controller.refresh().await;
        controller.open_edit(&id(1)).unwrap();

        let mut form = valid_form("X");
        form.quantity = "-3".into();
        let report = controller.save_edit(&form).await;
        assert!(!report.succeeded);
        assert_eq!(report.notifications[0].detail, "Quantity must not be negative");
        assert!(controller.read(|t| t.selection().editing().is_some()));
        assert_eq!(controller.gateway.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_create_resets_form_and_refetches() {
        let controller = InventoryTableController::new(FakeGateway::with_items(1));
        controller.refresh().await;
        controller.update_form(|f| *f = valid_form("Apple"));

        let report = controller.create().await;
        assert!(report.succeeded);
        assert_eq!(report.notifications[0].detail, "Invoice created successfully");
        assert_eq!(controller.read_form(|s| s.form.clone()), InventoryItemForm::default());
        assert_eq!(controller.read(|t| t.items().len()), 2);
        assert_eq!(controller.read(|t| t.items()[0].item_code.clone()), "C9");
    }

    #[tokio::test]
    async fn test_create_with_empty_form_is_rejected() {
        let controller = InventoryTableController::new(FakeGateway::default());
        let report = controller.create().await;
        assert!(!report.succeeded);
        assert_eq!(report.notifications[0].detail, "Item Code is required");
        assert!(controller.gateway.calls.borrow().is_empty());
    }
}
