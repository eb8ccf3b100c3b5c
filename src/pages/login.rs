//! Login / signup page, including the magic-link callback path.
//!
//! Two producers converge on the session sink: the form submit handlers and
//! the URL-callback effect. Both go through `SessionHandle::establish`, so
//! persistence and in-memory state move together.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::{session_from_callback, session_from_login, AuthFormState, AuthMode};
use crate::state::session::SessionHandle;
use crate::util::auth_callback::{self, CallbackOutcome};

/// Auth page with a login/signup toggle and the out-of-band token path.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let form = RwSignal::new(AuthFormState::default());

    // Magic-link callback: consumed on mount and re-checked when the form
    // email changes, since a token without an email borrows the form's.
    Effect::new(move || {
        let form_email = form.with(|f| f.email.clone());
        match auth_callback::take_from_location() {
            Some(CallbackOutcome::Error(message)) => {
                form.update(|f| {
                    f.info = None;
                    f.error = Some(message);
                });
            }
            Some(CallbackOutcome::Token { token, email }) => {
                session.establish(session_from_callback(token, email, &form_email));
            }
            None => {}
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with(|f| f.submitting) {
            return;
        }
        let (mode, email, password) =
            form.with(|f| (f.mode, f.email.clone(), f.password.clone()));
        form.update(AuthFormState::begin_submit);

        leptos::task::spawn_local(async move {
            match mode {
                AuthMode::Login => match api::login(&email, &password).await {
                    Ok(resp) => match session_from_login(resp, &email) {
                        Ok(new_session) => {
                            form.update(|f| f.submitting = false);
                            session.establish(new_session);
                        }
                        Err(err) => form.update(|f| f.fail(err.to_string())),
                    },
                    Err(err) => form.update(|f| f.fail(err.to_string())),
                },
                AuthMode::Signup => match api::signup(&email, &password).await {
                    Ok(body) => {
                        if let Some(message) =
                            body.get("error").and_then(serde_json::Value::as_str)
                        {
                            let message = message.to_owned();
                            form.update(|f| f.fail(message));
                        } else {
                            form.update(AuthFormState::signup_succeeded);
                        }
                    }
                    Err(err) => form.update(|f| f.fail(err.to_string())),
                },
            }
        });
    };

    let is_login = move || form.with(|f| f.mode == AuthMode::Login);
    let submitting = move || form.with(|f| f.submitting);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="app-title">"LinkBin"</h1>
                <p class="app-subtitle">"Private bookmarking for your favorite links"</p>

                <div class="auth-toggle">
                    <button
                        type="button"
                        class=move || if is_login() { "toggle-btn active" } else { "toggle-btn" }
                        on:click=move |_| form.update(|f| f.toggle_mode(AuthMode::Login))
                    >
                        "Login"
                    </button>
                    <button
                        type="button"
                        class=move || if is_login() { "toggle-btn" } else { "toggle-btn active" }
                        on:click=move |_| form.update(|f| f.toggle_mode(AuthMode::Signup))
                    >
                        "Sign Up"
                    </button>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <label class="field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev));
                            }
                            required
                            autocomplete="email"
                        />
                    </label>

                    <label class="field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                            }
                            required
                            autocomplete=move || {
                                if is_login() { "current-password" } else { "new-password" }
                            }
                        />
                    </label>

                    {move || {
                        form.with(|f| f.error.clone())
                            .map(|message| view! { <div class="error-box">{message}</div> })
                    }}
                    {move || {
                        form.with(|f| f.info.clone())
                            .map(|message| view! { <div class="info-box">{message}</div> })
                    }}

                    <button type="submit" class="primary-btn" disabled=submitting>
                        {move || {
                            if submitting() {
                                "Please wait..."
                            } else if is_login() {
                                "Login"
                            } else {
                                "Create account"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
