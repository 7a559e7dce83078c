use super::details::edit::EditItemDialog;
use super::details::view::ViewItemDialog;
use super::state::InventoryState;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use contracts::domain::a001_inventory_item::{DisplayRow, InventoryItemId, InventoryTable};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a001-inventory-item-table";

/// Paginated stock table with row actions and the two dialogs
#[component]
pub fn InventoryList(state: InventoryState) -> impl IntoView {
    let notifications = use_notifications();
    let (loading, set_loading) = signal(false);

    let load_items = move || {
        spawn_local(async move {
            set_loading.set(true);
            let report = state.controller().refresh().await;
            notifications.show_all(report.notifications);
            let _ = set_loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_table_untracked(|t| t.is_loaded()) {
            log::debug!("Loading stock...");
            load_items();
        }
    });

    let open_view = move |id: InventoryItemId| {
        if let Err(e) = state.controller().open_view(&id) {
            log::warn!("Cannot open record {}: {}", id, e);
        }
    };

    let open_edit = move |id: InventoryItemId| {
        if let Err(e) = state.controller().open_edit(&id) {
            log::warn!("Cannot edit record {}: {}", id, e);
        }
    };

    let delete_item = move |id: InventoryItemId| {
        if !confirm("Do you want to delete this record?") {
            notifications.show(InventoryTable::delete_cancelled());
            return;
        }
        spawn_local(async move {
            let report = state.controller().delete(&id).await;
            notifications.show_all(report.notifications);
        });
    };

    let go_to_page = move |page: usize| {
        state.controller().set_page(page);
    };

    let render_row = move |row: DisplayRow| {
        let id_for_view = row.id.clone();
        let id_for_edit = row.id.clone();
        let id_for_delete = row.id.clone();
        let id_for_busy = row.id.clone();
        let deleting = Signal::derive(move || state.with_table(|t| t.is_deleting(&id_for_busy)));
        let item_code = row.item_code.clone();
        let item_name = row.item_name.clone();
        let category = row.category.clone();
        let category_abbrev = row.category_abbrev.clone();
        let quantity_display = row.quantity_display();
        let rate_display = row.rate_display();
        let price_display = row.price_display();
        let discount_display = row.discount_display();
        let amount_display = row.amount_display();
        let location_display = row.location_display();

        view! {
            <TableRow>
                <TableCell>
                    <TableCellLayout truncate=true>
                        <span class="table__code">{item_code}</span>
                    </TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout truncate=true>{item_name}</TableCellLayout>
                </TableCell>
                <TableCell>
                    <TableCellLayout>
                        <span class="badge badge--primary" title=category>
                            {category_abbrev}
                        </span>
                    </TableCellLayout>
                </TableCell>
                <TableCell class="table__cell--number">{quantity_display}</TableCell>
                <TableCell class="table__cell--number">{rate_display}</TableCell>
                <TableCell class="table__cell--number">{price_display}</TableCell>
                <TableCell class="table__cell--number">{discount_display}</TableCell>
                <TableCell class="table__cell--number">
                    <strong>{amount_display}</strong>
                </TableCell>
                <TableCell>{location_display}</TableCell>
                <TableCell>
                    <div class="table__actions">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| open_view(id_for_view.clone())
                        >
                            {icon("eye")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| open_edit(id_for_edit.clone())
                        >
                            {icon("edit")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| delete_item(id_for_delete.clone())
                            disabled=deleting
                        >
                            {icon("trash")}
                        </Button>
                    </div>
                </TableCell>
            </TableRow>
        }
    };

    view! {
        <section class="stock-table">
            <div class="filter-panel-header">
                <div class="filter-panel-header__center">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with_table(|t| t.page()))
                        total_pages=Signal::derive(move || state.with_table(|t| t.total_pages()))
                        total_count=Signal::derive(move || state.with_table(|t| t.items().len()))
                        on_page_change=Callback::new(go_to_page)
                    />
                </div>
                <div class="filter-panel-header__right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_items()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="table-wrapper">
                <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Item Code"</TableHeaderCell>
                            <TableHeaderCell>"Item Name"</TableHeaderCell>
                            <TableHeaderCell>"Category"</TableHeaderCell>
                            <TableHeaderCell>"Quantity"</TableHeaderCell>
                            <TableHeaderCell>"Rate"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Discount"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Location"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        // rows are rebuilt on every change: an edit keeps the id
                        // but changes the content
                        {move || {
                            state
                                .with_table(|t| t.visible_rows())
                                .into_iter()
                                .map(render_row)
                                .collect_view()
                        }}
                    </TableBody>
                </Table>

                {move || {
                    let empty = state.with_table(|t| t.is_loaded() && t.items().is_empty());
                    empty.then(|| view! { <div class="table__empty">"No stock items yet"</div> })
                }}
            </div>

            <ViewItemDialog state=state />
            <EditItemDialog state=state />
        </section>
    }
}
