use dioxus::prelude::*;

use crate::client::{components::LoginModal, router::Route, util::cookie::use_session};

#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let logged_in = session.read().is_authenticated();
    let fetched = session.read().fetched;

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link { to: Route::Home {}, class: "text-xl px-2",
                    "Word List"
                }
            }
            div {
                class: "navbar-center",
                if logged_in {
                    ul { class: "menu menu-horizontal gap-2",
                        li {
                            Link { to: Route::WordList { page: 1 }, "Word List" }
                        }
                        li {
                            Link { to: Route::Profile {}, "Profile" }
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                if logged_in {
                    a { href: "/api/logout",
                        button {
                            class: "btn btn-outline",
                            "Logout"
                        }
                    }
                } else if fetched {
                    LoginModal {}
                }
            }
        }

        Outlet::<Route> {}
    }
}
