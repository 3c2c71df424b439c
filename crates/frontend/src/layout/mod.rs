pub mod footer;
pub mod header;

use crate::shared::notifications::ToastStack;
use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Persistent frame around the routed page.
///
/// ```text
/// +------------------------------------------+
/// |      Header (brand + navigation)         |
/// +------------------------------------------+
/// |              routed page                 |
/// +------------------------------------------+
/// |      Footer (server status, year)        |
/// +------------------------------------------+
///                                   [toasts]
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
            <ToastStack />
        </div>
    }
}
