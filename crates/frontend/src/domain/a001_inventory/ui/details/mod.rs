pub mod model;
pub mod view;

pub use view::InventoryDetails;

use crate::routes::{route_key, AppRoute};
use crate::shared::form::{FormMode, MissingRecord};
use contracts::domain::a001_inventory::aggregate::Sku;
use leptos::prelude::*;

#[component]
pub fn InventoryCreatePage() -> impl IntoView {
    view! { <InventoryDetails mode=FormMode::Create /> }
}

#[component]
pub fn InventoryEditPage() -> impl IntoView {
    match route_key::<Sku>("sku") {
        Some(sku) => view! { <InventoryDetails mode=FormMode::Edit(sku) /> }.into_any(),
        None => view! { <MissingRecord list_path=AppRoute::InventoryList.href() /> }.into_any(),
    }
}
