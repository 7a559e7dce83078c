use super::super::state::InventoryState;
use crate::shared::modal::Modal;
use contracts::domain::a001_inventory_item::{project, DisplayRow};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

/// The read-only dialog has its own two pages, unrelated to table paging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewPage {
    Details,
    Pricing,
}

impl ViewPage {
    fn number(self) -> usize {
        match self {
            ViewPage::Details => 1,
            ViewPage::Pricing => 2,
        }
    }
}

#[component]
pub fn ViewItemDialog(state: InventoryState) -> impl IntoView {
    let viewing = Memo::new(move |_| state.with_table(|t| t.selection().viewing().map(project)));

    move || {
        viewing
            .get()
            .map(|row| view! { <ViewItemCard state=state row=row /> })
    }
}

fn field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="details__field">
            <span class="details__label">{label}</span>
            <span class="details__value">{value}</span>
        </div>
    }
}

#[component]
fn ViewItemCard(state: InventoryState, row: DisplayRow) -> impl IntoView {
    let page = RwSignal::new(ViewPage::Details);
    let close = Callback::new(move |_| state.controller().close_dialog());
    let title = format!("{} ({})", row.item_name, row.item_code);

    let details = {
        let row = row.clone();
        move || {
            view! {
                {field("Item Code", row.item_code.clone())}
                {field("Item Name", row.item_name.clone())}
                {field("Category", row.category.clone())}
                {field("Location", row.location_display())}
            }
        }
    };

    let pricing = move || {
        view! {
            {field("Quantity", row.quantity_display())}
            {field("Rate", row.rate_display())}
            {field("Price", row.price_display())}
            {field("Discount", row.discount_display())}
            {field("Amount", row.amount_display())}
        }
    };

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| page.set(ViewPage::Details)
                disabled=Signal::derive(move || page.get() == ViewPage::Details)
            >
                "Previous"
            </Button>
            <span class="pagination-info">{move || format!("{} / 2", page.get().number())}</span>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| page.set(ViewPage::Pricing)
                disabled=Signal::derive(move || page.get() == ViewPage::Pricing)
            >
                "Next"
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=close footer=footer>
            <div class="details">
                {move || match page.get() {
                    ViewPage::Details => details().into_any(),
                    ViewPage::Pricing => pricing().into_any(),
                }}
            </div>
        </Modal>
    }
}
