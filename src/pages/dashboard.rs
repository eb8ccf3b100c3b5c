//! Dashboard page: the link feed controller plus the profile header.
//!
//! `load_user` and the first `load_links(1)` fire together at mount as
//! independent best-effort fetches; neither blocks the other and each
//! updates its own slice of state. Creating a link always re-fetches page 1
//! rather than inserting locally, so the authoritative order wins.

use leptos::prelude::*;

use crate::components::add_link_form::AddLinkForm;
use crate::components::link_list::LinkList;
use crate::net::api;
use crate::state::links::{LinkFeedState, PAGE_SIZE};
use crate::state::profile::ProfileState;
use crate::state::session::SessionHandle;

/// Fetch one page and fold the result into the feed: a success replaces the
/// whole page slice, a failure keeps the previous data and records the error.
async fn fetch_page(feed: RwSignal<LinkFeedState>, token: String, page: u32) {
    feed.update(LinkFeedState::begin_load);
    match api::get_links(&token, page, PAGE_SIZE).await {
        Ok(link_page) => feed.update(|f| f.apply_page(link_page)),
        Err(err) => feed.update(|f| f.fail_load(err.to_string())),
    }
}

/// Dashboard — add-link form, paginated link table, and the user header.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();

    // The token is fixed for the lifetime of this page; a logout unmounts it.
    let current = session.get_untracked();
    let token = current.as_ref().map(|s| s.token.clone()).unwrap_or_default();
    let login_email = current.map(|s| s.user.email);

    let feed = RwSignal::new(LinkFeedState::default());
    let profile = RwSignal::new(ProfileState::from_session_user(
        login_email
            .clone()
            .map(|email| crate::net::types::SessionUser::from_email(email)),
    ));

    let load_links = {
        let token = token.clone();
        move |page: u32| {
            let token = token.clone();
            leptos::task::spawn_local(fetch_page(feed, token, page));
        }
    };

    let load_user = {
        let token = token.clone();
        move || {
            let token = token.clone();
            profile.update(|p| p.loading = true);
            leptos::task::spawn_local(async move {
                match api::get_me(&token).await {
                    Ok(user) => profile.update(|p| {
                        p.user = Some(user);
                        p.loading = false;
                    }),
                    Err(err) => {
                        #[cfg(feature = "hydrate")]
                        log::warn!("failed to load user info: {err}");
                        #[cfg(not(feature = "hydrate"))]
                        let _ = err;
                        profile.update(|p| p.loading = false);
                    }
                }
            });
        }
    };

    // Fire both initial fetches once the page is live in the browser.
    Effect::new({
        let load_links = load_links.clone();
        let load_user = load_user.clone();
        move || {
            load_user();
            load_links(1);
        }
    });

    let on_add = {
        let token = token.clone();
        Callback::new(move |(title, url): (String, String)| {
            let token = token.clone();
            feed.update(|f| {
                f.creating = true;
                f.error = None;
            });
            leptos::task::spawn_local(async move {
                match api::create_link(&token, &title, &url).await {
                    Ok(_) => {
                        feed.update(|f| f.creating = false);
                        // Back to page 1 so the new link is visible on top.
                        fetch_page(feed, token, 1).await;
                    }
                    Err(err) => feed.update(|f| {
                        f.creating = false;
                        f.error = Some(err.to_string());
                    }),
                }
            });
        })
    };

    let on_logout = move |_| session.sign_out();

    let on_refresh = {
        let load_links = load_links.clone();
        move |_| load_links(feed.with_untracked(|f| f.page))
    };
    let on_prev = {
        let load_links = load_links.clone();
        move |_| {
            let f = feed.get_untracked();
            if f.can_prev() && !f.loading {
                load_links(f.page - 1);
            }
        }
    };
    let on_next = {
        let load_links = load_links.clone();
        move |_| {
            let f = feed.get_untracked();
            if f.can_next() && !f.loading {
                load_links(f.page + 1);
            }
        }
    };

    let loading = Signal::derive(move || feed.with(|f| f.loading));
    let display_email = move || {
        profile.with(|p| p.display_email(login_email.as_deref()))
    };

    view! {
        <div class="dashboard-shell">
            <div class="dashboard-inner">
                <header class="dashboard-header">
                    <div>
                        <h1 class="app-title">"LinkBin"</h1>
                        <p class="app-subtitle">"Your private bookmark collection"</p>
                    </div>
                    <div class="dashboard-header-right">
                        <span class="user-pill">{display_email}</span>
                        <button class="secondary-btn" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </header>

                <main class="dashboard-main">
                    <section class="dashboard-card">
                        <h2 class="section-title">"Add a new link"</h2>
                        <AddLinkForm
                            on_submit=on_add
                            saving=Signal::derive(move || feed.with(|f| f.creating))
                        />
                    </section>

                    <section class="dashboard-card">
                        <div class="links-top-row">
                            <h2 class="section-title">"Your saved links"</h2>
                            <button
                                class="secondary-btn small"
                                on:click=on_refresh
                                disabled=move || loading.get()
                            >
                                "⟳ Refresh"
                            </button>
                        </div>

                        {move || {
                            feed.with(|f| f.error.clone())
                                .map(|message| view! { <div class="error-box">{message}</div> })
                        }}

                        <div class="links-content">
                            <LinkList
                                links=Signal::derive(move || feed.with(|f| f.items.clone()))
                                loading=loading
                            />

                            <div class="pagination-row">
                                <button
                                    class="secondary-btn small"
                                    on:click=on_prev
                                    disabled=move || feed.with(|f| !f.can_prev() || f.loading)
                                >
                                    "← Previous"
                                </button>
                                <span class="pagination-info">
                                    {move || {
                                        feed.with(|f| {
                                            if f.total_items > 0 {
                                                format!(
                                                    "Page {} of {} (total {} links)",
                                                    f.page, f.total_pages, f.total_items,
                                                )
                                            } else {
                                                format!("Page {} of {}", f.page, f.total_pages)
                                            }
                                        })
                                    }}
                                </span>
                                <button
                                    class="secondary-btn small"
                                    on:click=on_next
                                    disabled=move || feed.with(|f| !f.can_next() || f.loading)
                                >
                                    "Next →"
                                </button>
                            </div>
                        </div>
                    </section>
                </main>
            </div>
        </div>
    }
}
