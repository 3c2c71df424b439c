use crate::app::use_services;
use crate::shared::api::{HttpRequest, Transport};
use chrono::Datelike;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Servidor: en línea",
            ServerStatus::Offline => "Servidor: sin conexión",
            ServerStatus::Checking => "Servidor: verificando...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);
    let transport = use_services().transport;
    let year = chrono::Local::now().year();

    // any HTTP answer means the backend is reachable
    spawn_local(async move {
        let request = HttpRequest::get("/inventario/paginated").with_query("page=0&size=5".to_string());
        let next = match transport.send(&request).await {
            Ok(_) => ServerStatus::Online,
            Err(e) => {
                log::warn!("backend unreachable: {}", e);
                ServerStatus::Offline
            }
        };
        status.set(next);
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
            <span class="status-bar__copyright">{format!("© {} Sistema de Pólizas", year)}</span>
        </footer>
    }
}
