use contracts::domain::a001_inventory_item::InventoryItemForm;
use contracts::enums::{Category, Location};
use leptos::prelude::*;
use thaw::*;

/// Input signals shared by the create form and the edit dialog
#[derive(Clone, Copy)]
pub struct ItemFields {
    pub item_code: RwSignal<String>,
    pub item_name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub quantity: RwSignal<String>,
    pub rate: RwSignal<String>,
    pub location: RwSignal<String>,
}

impl ItemFields {
    pub fn new(form: &InventoryItemForm) -> Self {
        Self {
            item_code: RwSignal::new(form.item_code.clone()),
            item_name: RwSignal::new(form.item_name.clone()),
            category: RwSignal::new(form.category.clone()),
            quantity: RwSignal::new(form.quantity.clone()),
            rate: RwSignal::new(form.rate.clone()),
            location: RwSignal::new(form.location.clone()),
        }
    }

    pub fn snapshot(&self) -> InventoryItemForm {
        InventoryItemForm {
            item_code: self.item_code.get_untracked(),
            item_name: self.item_name.get_untracked(),
            category: self.category.get_untracked(),
            quantity: self.quantity.get_untracked(),
            rate: self.rate.get_untracked(),
            location: self.location.get_untracked(),
        }
    }

    pub fn fill(&self, form: &InventoryItemForm) {
        self.item_code.set(form.item_code.clone());
        self.item_name.set(form.item_name.clone());
        self.category.set(form.category.clone());
        self.quantity.set(form.quantity.clone());
        self.rate.set(form.rate.clone());
        self.location.set(form.location.clone());
    }
}

#[component]
pub fn ItemFormFields(fields: ItemFields) -> impl IntoView {
    view! {
        <div class="item-form__grid">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Item Code"</Label>
                <Input value=fields.item_code placeholder="Item code" />
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Item Name"</Label>
                <Input value=fields.item_name placeholder="Item name" />
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Category"</Label>
                <Select value=fields.category>
                    <option value="">"Select category"</option>
                    {Category::all()
                        .into_iter()
                        .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                        .collect_view()}
                </Select>
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Quantity"</Label>
                <Input value=fields.quantity input_type=InputType::Number placeholder="0" />
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Rate"</Label>
                <Input value=fields.rate input_type=InputType::Number placeholder="0.00" />
            </Flex>
            <Flex vertical=true gap=FlexGap::Small>
                <Label>"Location"</Label>
                <Select value=fields.location>
                    <option value="">"Select location"</option>
                    {Location::all()
                        .into_iter()
                        .map(|l| view! { <option value=l.code()>{l.code()}</option> })
                        .collect_view()}
                </Select>
            </Flex>
        </div>
    }
}
