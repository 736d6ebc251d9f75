use dioxus::prelude::*;

use crate::client::router::Route;

fn error_title(status: u16) -> &'static str {
    match status {
        401 => "You need to log in to see this page",
        404 => "This page could not be found",
        _ => "An unexpected error occurred",
    }
}

#[component]
pub fn ErrorPage(status: u16) -> Element {
    rsx!(
        div { class: "flex flex-col items-center justify-center gap-4 py-16",
            p { class: "text-4xl font-bold",
                "{status}"
            }
            p { class: "text-lg",
                {error_title(status)}
            }
            Link { to: Route::Home {}, class: "btn btn-outline",
                "Back to home"
            }
        }
    )
}
