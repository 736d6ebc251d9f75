use dioxus::prelude::*;

use crate::client::components::ErrorPage;

/// Page body below the navbar
///
/// Render failures of the children are caught and shown as a 500 error page.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = if let Some(class) = class { class } else { "" };

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4 {class}",
            ErrorBoundary {
                handle_error: |_: ErrorContext| rsx! {
                    ErrorPage { status: 500 }
                },
                {children}
            }
        }
    )
}
