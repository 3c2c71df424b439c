use crate::domain::a001_inventory::ui::details::{InventoryCreatePage, InventoryEditPage};
use crate::domain::a001_inventory::ui::list::InventoryList;
use crate::domain::a002_employee::ui::details::{EmployeeCreatePage, EmployeeEditPage};
use crate::domain::a002_employee::ui::list::EmployeeList;
use crate::domain::a003_voucher::ui::details::{VoucherCreatePage, VoucherEditPage};
use crate::domain::a003_voucher::ui::list::VoucherList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=HomePage />

                    <Route path=path!("/polizas") view=VoucherList />
                    <Route path=path!("/polizas/nueva") view=VoucherCreatePage />
                    <Route path=path!("/polizas/editar/:id") view=VoucherEditPage />

                    <Route path=path!("/empleados") view=EmployeeList />
                    <Route path=path!("/empleados/nuevo") view=EmployeeCreatePage />
                    <Route path=path!("/empleados/editar/:id") view=EmployeeEditPage />

                    <Route path=path!("/inventario") view=InventoryList />
                    <Route path=path!("/inventario/nuevo") view=InventoryCreatePage />
                    <Route path=path!("/inventario/editar/:sku") view=InventoryEditPage />
                </Routes>
            </Shell>
        </Router>
    }
}
