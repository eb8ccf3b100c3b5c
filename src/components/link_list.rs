//! Link table: title, URL, and saved-at columns with loading/empty rows.

use leptos::prelude::*;

use crate::net::types::Link;
use crate::util::format;

/// Stateless table over the current page of links.
#[component]
pub fn LinkList(
    #[prop(into)] links: Signal<Vec<Link>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="links-table-container">
            <table class="links-table">
                <thead>
                    <tr>
                        <th style="width: 40%">"Title"</th>
                        <th style="width: 40%">"URL"</th>
                        <th style="width: 20%">"Saved at"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        if loading.get() {
                            view! {
                                <tr>
                                    <td colspan="3" class="links-table-empty">
                                        "Loading links…"
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else if links.with(Vec::is_empty) {
                            view! {
                                <tr>
                                    <td colspan="3" class="links-table-empty">
                                        "No links to show yet. Add your first one above."
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            links
                                .get()
                                .into_iter()
                                .map(|link| {
                                    let title = if link.title.is_empty() {
                                        "(No title)".to_owned()
                                    } else {
                                        link.title
                                    };
                                    let saved = link
                                        .created_at
                                        .as_deref()
                                        .map(format::saved_at)
                                        .unwrap_or_default();
                                    view! {
                                        <tr>
                                            <td class="links-table-title">{title}</td>
                                            <td class="links-table-url">
                                                <a
                                                    href=link.url.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                >
                                                    {link.url.clone()}
                                                </a>
                                            </td>
                                            <td class="links-table-date">{saved}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
