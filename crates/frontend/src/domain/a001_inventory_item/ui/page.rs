use super::form::InventoryItemCreateForm;
use super::list::InventoryList;
use super::state::create_state;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let state = create_state();
    let total = Signal::derive(move || state.with_table(|t| t.items().len()));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("inventory")}
                    <h1 class="page__title">"Stock Inventory"</h1>
                    <span class="badge badge--primary">{move || total.get().to_string()}</span>
                </div>
            </div>
            <div class="page__content">
                <InventoryItemCreateForm state=state />
                <InventoryList state=state />
            </div>
        </div>
    }
}
