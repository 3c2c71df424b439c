use super::NotificationChannel;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Stacked toasts, bottom-right, oldest on top
#[component]
pub fn ToastStack() -> impl IntoView {
    let channel = expect_context::<NotificationChannel>();
    let items = channel.items();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || items.get()
                key=|n| n.id
                children=move |n| {
                    let channel = channel.clone();
                    let id = n.id;
                    view! {
                        <div class=format!("toast {}", n.severity.css_modifier())>
                            <span class="toast__icon">{icon(n.severity.icon_name())}</span>
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="toast__close"
                                title="Cerrar"
                                on:click=move |_| channel.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
