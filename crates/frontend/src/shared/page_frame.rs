//! Root element of every routed page.
//!
//! The element carries `id="{entity}--{category}"` (for example
//! `a003_voucher--list`) and `data-page-category`, so styles and
//! browser tests can address pages without knowing their markup.

use super::page_standard::*;
use leptos::prelude::*;

/// Detail and system pages get a `page--{category}` modifier; lists use plain `page`.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    #[prop(into)]
    page_id: String,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) {
        log::warn!("page id {:?} does not follow {{entity}}--{{category}}", page_id);
    }

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
