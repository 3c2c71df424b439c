use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    /// HTML input type, "text" when omitted
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label" for=id>{label}</label>
            <input
                class="form__input"
                type=input_type.unwrap_or("text")
                id=id
                name=id
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

/// `<select>` over (value, label) pairs with an empty first choice
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or("Seleccione una opción");

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label" for=id>{label}</label>
            <select
                class="form__input"
                id=id
                name=id
                prop:value=move || value.get()
                disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    let current = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, text)| {
                            let selected = v == current;
                            view! { <option value=v selected=selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
        </div>
    }
}

/// Cancel link back to `list_path` and the submit button of the enclosing `<form>`
#[component]
pub fn FormActions(
    #[prop(into)] list_path: String,
    #[prop(into)] submit_label: Signal<String>,
    #[prop(into)] can_submit: Signal<bool>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__actions">
            <A href=list_path attr:class="button button--secondary">
                "Cancelar"
            </A>
            <button
                type="submit"
                class="button button--primary"
                disabled=move || !can_submit.get()
            >
                {move || saving.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                {move || submit_label.get()}
            </button>
        </div>
    }
}

/// Shown instead of a form when the route key does not parse
#[component]
pub fn MissingRecord(#[prop(into)] list_path: String) -> impl IntoView {
    view! {
        <div class="warning-box">
            <span class="warning-box__icon">"⚠"</span>
            <span class="warning-box__text">"El registro solicitado no es válido."</span>
            <A href=list_path attr:class="button button--secondary">"Volver al listado"</A>
        </div>
    }
}
