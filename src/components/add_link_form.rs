//! Form for saving a new link.

use leptos::prelude::*;

/// Title/URL form. Submits trimmed values through `on_submit` and clears
/// itself; blank fields are ignored.
#[component]
pub fn AddLinkForm(
    on_submit: Callback<(String, String)>,
    #[prop(into)] saving: Signal<bool>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let t = title.get().trim().to_owned();
        let u = url.get().trim().to_owned();
        if t.is_empty() || u.is_empty() {
            return;
        }
        on_submit.run((t, u));
        title.set(String::new());
        url.set(String::new());
    };

    view! {
        <form class="add-link-form" on:submit=submit>
            <label class="field">
                <span>"Title"</span>
                <input
                    type="text"
                    placeholder="My favorite article"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                    required
                />
            </label>

            <label class="field">
                <span>"URL"</span>
                <input
                    type="url"
                    placeholder="https://example.com"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                    required
                />
            </label>

            <button type="submit" class="primary-btn" disabled=move || saving.get()>
                {move || if saving.get() { "Saving…" } else { "Save link" }}
            </button>
        </form>
    }
}
