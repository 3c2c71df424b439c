use crate::shared::icons::icon;
use crate::shared::list_view::PageSize;
use leptos::prelude::*;

fn next_page(page: usize, last: usize) -> usize {
    page.saturating_add(1).min(last)
}

fn position_label(page: usize, total_pages: usize, total_count: u64) -> String {
    format!(
        "Página {} de {} ({} registros)",
        page.saturating_add(1),
        total_pages.max(1),
        total_count,
    )
}

/// First/previous/next/last buttons, position readout and page size select
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<PageSize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<PageSize>,
) -> impl IntoView {
    let last_page = move || total_pages.get().max(1) - 1;
    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() >= last_page();

    // target is resolved at click time against the current page
    let nav_button = move |title: &'static str, glyph: &'static str, target: fn(usize, usize) -> usize, disabled: fn(bool, bool) -> bool| {
        view! {
            <button
                class="pagination-btn"
                title=title
                disabled=move || disabled(at_first(), at_last())
                on:click=move |_| {
                    let next = target(current_page.get_untracked(), last_page());
                    if next != current_page.get_untracked() {
                        on_page_change.run(next);
                    }
                }
            >
                {icon(glyph)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav_button("Primera página", "chevrons-left", |_, _| 0, |first, _| first)}
            {nav_button("Página anterior", "chevron-left", |page, _| page.saturating_sub(1), |first, _| first)}
            <span class="pagination-info">
                {move || position_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            {nav_button("Página siguiente", "chevron-right", next_page, |_, last| last)}
            {nav_button("Última página", "chevrons-right", |_, last| last, |_, last| last)}
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev)
                        .parse()
                        .ok()
                        .and_then(PageSize::new)
                        .unwrap_or_default();
                    on_page_size_change.run(size);
                }
                prop:value=move || page_size.get().get().to_string()
            >
                {PageSize::OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get().get() == size>
                                {format!("{} por página", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_stops_at_last() {
        assert_eq!(next_page(0, 3), 1);
        assert_eq!(next_page(3, 3), 3);
        assert_eq!(next_page(usize::MAX, 3), 3);
    }

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(0, 0, 0), "Página 1 de 1 (0 registros)");
        assert_eq!(position_label(1, 3, 25), "Página 2 de 3 (25 registros)");
        assert!(position_label(usize::MAX, 1, 1).starts_with(&format!("Página {} ", usize::MAX)));
    }
}
