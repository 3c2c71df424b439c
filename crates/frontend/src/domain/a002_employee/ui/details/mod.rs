pub mod model;
pub mod view;

pub use view::EmployeeDetails;

use crate::routes::{route_key, AppRoute};
use crate::shared::form::{FormMode, MissingRecord};
use contracts::domain::a002_employee::aggregate::EmployeeId;
use leptos::prelude::*;

#[component]
pub fn EmployeeCreatePage() -> impl IntoView {
    view! { <EmployeeDetails mode=FormMode::Create /> }
}

#[component]
pub fn EmployeeEditPage() -> impl IntoView {
    match route_key::<EmployeeId>("id") {
        Some(id) => view! { <EmployeeDetails mode=FormMode::Edit(id) /> }.into_any(),
        None => view! { <MissingRecord list_path=AppRoute::EmployeeList.href() /> }.into_any(),
    }
}
