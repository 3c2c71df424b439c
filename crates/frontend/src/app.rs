use crate::config::config;
use crate::routes::AppRoutes;
use crate::shared::api::HttpTransport;
use crate::shared::api_utils::api_base;
use crate::shared::cache::QueryCache;
use crate::shared::notifications::NotificationChannel;
use leptos::prelude::*;
use thaw::ConfigProvider;

/// Services shared by every page
#[derive(Clone)]
pub struct AppServices {
    pub transport: HttpTransport,
    pub notifier: NotificationChannel,
    pub cache: QueryCache,
}

pub fn use_services() -> AppServices {
    AppServices {
        transport: expect_context::<HttpTransport>(),
        notifier: expect_context::<NotificationChannel>(),
        cache: expect_context::<QueryCache>(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    log::info!("API base path: {}", api_base());

    // One channel for the whole app; toasts outlive page changes
    provide_context(NotificationChannel::browser());
    provide_context(QueryCache::new());
    provide_context(HttpTransport::from_config(config()));

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
