pub mod fields;

use self::fields::{ItemFields, ItemFormFields};
use super::state::InventoryState;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_inventory_item::{CreateFormState, InventoryItemForm};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// "Add stock" form above the table
#[component]
pub fn InventoryItemCreateForm(state: InventoryState) -> impl IntoView {
    let notifications = use_notifications();
    let fields = ItemFields::new(&InventoryItemForm::default());
    let submitting = Signal::derive(move || state.with_form(|s| s.is_submitting()));

    let submit = move |_| {
        let controller = state.controller();
        let form = fields.snapshot();
        controller.update_form(move |f| *f = form);

        if let Err(n) = controller.read_form(|s| s.check()) {
            notifications.show(n);
            return;
        }
        if !confirm("Are you sure you want to submit this form?") {
            notifications.show(CreateFormState::submit_cancelled());
            return;
        }

        spawn_local(async move {
            let report = controller.create().await;
            if report.succeeded {
                fields.fill(&controller.read_form(|s| s.form.clone()));
            }
            notifications.show_all(report.notifications);
        });
    };

    view! {
        <section class="item-form">
            <h2 class="item-form__title">"Add Stock"</h2>
            <ItemFormFields fields=fields />
            <div class="item-form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=submit
                    disabled=submitting
                >
                    {icon("plus")}
                    {move || if submitting.get() { " Submitting..." } else { " Submit" }}
                </Button>
            </div>
        </section>
    }
}
