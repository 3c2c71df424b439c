pub mod model;
pub mod view;

pub use view::VoucherDetails;

use crate::routes::{route_key, AppRoute};
use crate::shared::form::{FormMode, MissingRecord};
use contracts::domain::a003_voucher::aggregate::VoucherId;
use leptos::prelude::*;

#[component]
pub fn VoucherCreatePage() -> impl IntoView {
    view! { <VoucherDetails mode=FormMode::Create /> }
}

#[component]
pub fn VoucherEditPage() -> impl IntoView {
    match route_key::<VoucherId>("id") {
        Some(id) => view! { <VoucherDetails mode=FormMode::Edit(id) /> }.into_any(),
        None => view! { <MissingRecord list_path=AppRoute::VoucherList.href() /> }.into_any(),
    }
}
