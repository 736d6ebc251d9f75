use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Home, NotFound, Profile, WordList},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/wordlist/:page")]
    WordList { page: u64 },

    #[route("/profile")]
    Profile {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
