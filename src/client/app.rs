use dioxus::prelude::*;

use crate::client::{router::Route, store::session::SessionState, util::cookie::read_session};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));

    use_future(move || async move {
        session.set(SessionState::loaded(read_session().await));
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
