use dioxus::prelude::*;
use wordlist::model::{
    session::pagination_limit_cookie,
    table::{page_links, PageLink, PageWindow, ROWS_PER_PAGE_OPTIONS},
};

use crate::client::util::cookie::{reload_to, set_cookie};

/// Rows-per-page picker, row range and page links below the word table
///
/// Changing rows per page stores the `paginationLimit` cookie and loads page 1 afresh.
#[component]
pub fn Pagination(page: u64, page_count: u64, rows_per_page: u64, total_rows: u64) -> Element {
    let window = PageWindow::new(page, rows_per_page, total_rows);
    let links = page_links(page, page_count);

    let on_rows_per_page = move |event: FormEvent| {
        let Ok(limit) = event.value().parse::<u64>() else {
            return;
        };

        set_cookie(pagination_limit_cookie(limit));
        reload_to("/wordlist/1");
    };

    rsx!(
        div { class: "flex flex-wrap items-center justify-end gap-4 py-2",
            label { class: "flex items-center gap-2",
                "Rows per page:"
                select {
                    class: "select select-sm",
                    value: "{rows_per_page}",
                    onchange: on_rows_per_page,
                    for limit in ROWS_PER_PAGE_OPTIONS {
                        option {
                            value: "{limit}",
                            selected: limit == rows_per_page,
                            "{limit}"
                        }
                    }
                }
            }
            p { "{window.from}-{window.to} of {window.total}" }
            div { class: "join",
                for link in links {
                    PageLinkButton { link }
                }
            }
        }
    )
}

#[component]
fn PageLinkButton(link: PageLink) -> Element {
    match link {
        PageLink::Previous(target) => rsx!(PageAnchor { target, label: "Previous".to_string() }),
        PageLink::Next(target) => rsx!(PageAnchor { target, label: "Next".to_string() }),
        PageLink::Page { page, current } => rsx!(
            a {
                class: if current {
                    "join-item btn btn-sm btn-active"
                } else {
                    "join-item btn btn-sm"
                },
                href: "/wordlist/{page}",
                "aria-current": if current { "page" } else { "false" },
                "{page}"
            }
        ),
        PageLink::Ellipsis => rsx!(
            span { class: "join-item btn btn-sm btn-disabled", "…" }
        ),
    }
}

#[component]
fn PageAnchor(target: Option<u64>, label: String) -> Element {
    rsx!(
        if let Some(page) = target {
            a { class: "join-item btn btn-sm", href: "/wordlist/{page}", "{label}" }
        } else {
            span { class: "join-item btn btn-sm btn-disabled", "{label}" }
        }
    )
}
