use super::super::form::fields::{ItemFields, ItemFormFields};
use super::super::state::InventoryState;
use crate::shared::modal::Modal;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_inventory_item::{InventoryItem, InventoryItemForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

/// Edit dialog, open while the selection is in editing mode
#[component]
pub fn EditItemDialog(state: InventoryState) -> impl IntoView {
    // memoised so a refresh in the background does not reset the inputs
    let editing = Memo::new(move |_| state.with_table(|t| t.selection().editing().cloned()));

    move || {
        editing
            .get()
            .map(|item| view! { <EditItemForm state=state item=item /> })
    }
}

#[component]
fn EditItemForm(state: InventoryState, item: InventoryItem) -> impl IntoView {
    let notifications = use_notifications();
    let fields = ItemFields::new(&InventoryItemForm::from_item(&item));
    let saving = Signal::derive(move || state.with_table(|t| t.is_saving_edit()));

    let close = Callback::new(move |_| state.controller().close_dialog());

    let save = move |_| {
        let form = fields.snapshot();
        spawn_local(async move {
            let report = state.controller().save_edit(&form).await;
            notifications.show_all(report.notifications);
        });
    };

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                "Cancel"
            </Button>
            <Button appearance=ButtonAppearance::Primary on_click=save disabled=saving>
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </Button>
        }
        .into_any()
    });

    view! {
        <Modal
            title=format!("Edit {}", item.item_code)
            on_close=close
            footer=footer
        >
            <ItemFormFields fields=fields />
        </Modal>
    }
}
