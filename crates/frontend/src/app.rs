use crate::domain::a001_inventory_item::ui::InventoryPage;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toasts for every table and form operation
    provide_context(NotificationService::new());

    view! {
        <InventoryPage />
        <NotificationHost />
    }
}
