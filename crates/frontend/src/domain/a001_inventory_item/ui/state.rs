use crate::domain::a001_inventory_item::api::HttpInventoryGateway;
use contracts::domain::a001_inventory_item::{
    CreateFormState, InventoryTable, InventoryTableController,
};
use leptos::prelude::*;

pub type StockController = InventoryTableController<HttpInventoryGateway>;

/// Reactive handle to the stock controller.
///
/// The controller itself is not reactive; every change it reports bumps
/// `version`, which the `with_*` readers subscribe to.
#[derive(Clone, Copy)]
pub struct InventoryState {
    controller: StoredValue<StockController, LocalStorage>,
    version: RwSignal<u64>,
}

impl InventoryState {
    pub fn controller(&self) -> StockController {
        self.controller.get_value()
    }

    pub fn with_table<R>(&self, f: impl FnOnce(&InventoryTable) -> R) -> R {
        self.version.track();
        self.with_table_untracked(f)
    }

    pub fn with_table_untracked<R>(&self, f: impl FnOnce(&InventoryTable) -> R) -> R {
        self.controller.with_value(|c| c.read(f))
    }

    pub fn with_form<R>(&self, f: impl FnOnce(&CreateFormState) -> R) -> R {
        self.version.track();
        self.controller.with_value(|c| c.read_form(f))
    }
}

pub fn create_state() -> InventoryState {
    let version = RwSignal::new(0u64);
    let controller = InventoryTableController::new(HttpInventoryGateway::default())
        .with_on_change(move || {
            let _ = version.try_update(|v| *v = v.wrapping_add(1));
        });

    InventoryState {
        controller: StoredValue::new_local(controller),
        version,
    }
}
