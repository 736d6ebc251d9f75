use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBook;
use dioxus_free_icons::Icon;

use crate::client::{
    components::{LoginModal, Page},
    router::Route,
    util::cookie::use_session,
};

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let logged_in = session.read().is_authenticated();
    let fetched = session.read().fetched;

    rsx!(
        Title { "Word List" }
        Meta {
            name: "description",
            content: "Browse a paginated list of words and their parts of speech."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 max-w-256",
                p { class: "text-2xl", "Word List" }
                p {
                    "Log in with your public identity provider username to browse the word list and view your profile."
                }
                if logged_in {
                    Link { to: Route::WordList { page: 1 },
                        button {
                            class: "btn btn-primary w-48 flex gap-2",
                            Icon { width: 20, height: 20, icon: FaBook }
                            p { "Open the word list" }
                        }
                    }
                } else if fetched {
                    LoginModal {}
                }
            }
        }
    )
}
