use crate::routes::AppRoute;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::A;

const SECTIONS: [(AppRoute, &str, &str, &str); 3] = [
    (
        AppRoute::VoucherList,
        "file-text",
        "Pólizas",
        "Registre las salidas de inventario asignadas a cada empleado.",
    ),
    (
        AppRoute::EmployeeList,
        "users",
        "Empleados",
        "Administre el personal que genera pólizas.",
    ),
    (
        AppRoute::InventoryList,
        "inventory",
        "Inventario",
        "Consulte y actualice las existencias por SKU.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="sys_home--system" category=PAGE_CAT_SYSTEM>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Sistema de Pólizas"}</h1>
                </div>
            </div>
            <div class="home__sections">
                {SECTIONS
                    .into_iter()
                    .map(|(route, icon_name, title, text)| {
                        view! {
                            <A href=route.href() attr:class="home__card">
                                <span class="home__card-icon">{icon(icon_name)}</span>
                                <h2 class="home__card-title">{title}</h2>
                                <p class="home__card-text">{text}</p>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
