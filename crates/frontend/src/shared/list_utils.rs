//! Shared list helpers: local search and sort, sortable headers, debounced search input
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types that can be matched against a free-text search
pub trait Searchable {
    /// Whether the record matches the (already lowercased) needle
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive comparison used by `Sortable` impls
pub fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Sort the list by the given field; stable for equal keys
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Keep the records matching `filter`; a blank filter keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(&needle))
        .collect()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Clickable `<th>` showing the sort state of `field`
#[component]
pub fn SortHeader(
    label: &'static str,
    field: &'static str,
    #[prop(into)] sort_field: Signal<String>,
    #[prop(into)] ascending: Signal<bool>,
    on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <th
            class="table__header-cell table__header-cell--sortable"
            on:click=move |_| on_sort.run(field)
        >
            {label}
            <span class="table__sort-indicator">
                {move || get_sort_indicator(&sort_field.get(), field, ascending.get())}
            </span>
        </th>
    }
}

/// Whether a filter value that changed outside the input should replace what
/// the user typed. Whitespace-only differences are the filter's own trimming.
fn needs_resync(external: &str, typed: &str) -> bool {
    external.trim() != typed.trim()
}

/// Text input that reports its value 300 ms after the last keystroke
#[component]
pub fn SearchInput(
    /// Current filter value (from the list query)
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // dropping a pending Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    // clear filters, back/forward: the query wins and a pending report is dropped
    Effect::new(move |_| {
        let external = value.get();
        if needs_resync(&external, &input_value.get_untracked()) {
            pending.set_value(None);
            set_input_value.set(external);
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(300, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}
