use crate::routes::AppRoute;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV: [(AppRoute, &str, &str); 3] = [
    (AppRoute::VoucherList, "file-text", "Pólizas"),
    (AppRoute::EmployeeList, "users", "Empleados"),
    (AppRoute::InventoryList, "inventory", "Inventario"),
];

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    // create/edit pages keep their section highlighted
    let section = Memo::new(move |_| {
        location
            .pathname
            .with(|path| AppRoute::parse(path).and_then(|route| route.section()))
    });

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href=AppRoute::Home.href() attr:class="header__title">
                    "Sistema de Pólizas"
                </A>
                <nav class="header__nav">
                    {NAV
                        .into_iter()
                        .map(|(route, icon_name, label)| {
                            view! {
                                <A
                                    href=route.href()
                                    attr:class=move || {
                                        if section.get() == Some(route) {
                                            "header__link header__link--active"
                                        } else {
                                            "header__link"
                                        }
                                    }
                                >
                                    {icon(icon_name)}
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
