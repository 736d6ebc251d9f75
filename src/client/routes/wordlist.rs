use dioxus::document::Title;
use dioxus::prelude::*;
use wordlist::model::wordlist::PageResultDto;

use crate::client::{
    components::{ErrorPage, Page, Pagination, WordTable},
    router::Route,
    util::api::SessionFetch,
};

#[component]
pub fn WordList(page: u64) -> Element {
    let nav = use_navigator();

    let result = use_resource(use_reactive!(|(page,)| async move {
        load_page(page).await
    }));

    use_effect(move || {
        if let Some(SessionFetch::LoggedOut) = &*result.read() {
            nav.replace(Route::Home {});
        }
    });

    rsx!(
        Title { "Word List | Page {page}" }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                match &*result.read() {
                    Some(SessionFetch::Ready(data)) => rsx! {
                        WordTable { key: "{data.page}-{data.rows_per_page}", rows: data.rows.clone() }
                        Pagination {
                            page: data.page,
                            page_count: data.page_count,
                            rows_per_page: data.rows_per_page,
                            total_rows: data.total_rows,
                        }
                    },
                    Some(SessionFetch::Failed(e)) => rsx! {
                        ErrorPage { status: e.status }
                    },
                    _ => rsx! {
                        div { class: "skeleton h-64 w-full" }
                    },
                }
            }
        }
    )
}

/// Fetch a page with the browser session's token and rows per page
#[cfg(feature = "web")]
async fn load_page(page: u64) -> SessionFetch<PageResultDto> {
    use crate::client::util::{api, cookie::read_session};

    let session = read_session().await;
    let Some(token) = session.token.as_deref() else {
        return SessionFetch::LoggedOut;
    };

    match api::get_word_page(token, page, session.rows_per_page()).await {
        Ok(data) => SessionFetch::Ready(data),
        Err(e) => SessionFetch::Failed(e),
    }
}

/// Pages are fetched by the browser only
#[cfg(not(feature = "web"))]
async fn load_page(_page: u64) -> SessionFetch<PageResultDto> {
    std::future::pending().await
}
