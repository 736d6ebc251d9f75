use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::components::{ErrorPage, Page};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx!(
        Title { "Not Found | Word List" }
        Page {
            ErrorPage { status: 404 }
        }
    )
}
