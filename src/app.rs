//! Root application component, session context, and HTML shell.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::pages::{dashboard::DashboardPage, login::AuthPage};
use crate::state::session::SessionHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component.
///
/// Restores any persisted session before first render and provides it via
/// context; the auth page is the only producer after that, the dashboard
/// the only consumer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::restore();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/linkbin.css"/>
        <Title text="LinkBin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// The single page of the app: auth card when logged out, dashboard once a
/// session exists.
#[component]
fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    view! {
        <div class="app-root">
            <Show when=move || session.get().is_some() fallback=|| view! { <AuthPage/> }>
                <DashboardPage/>
            </Show>
        </div>
    }
}
