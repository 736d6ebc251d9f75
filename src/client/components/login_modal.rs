use dioxus::prelude::*;

use crate::client::{
    router::Route,
    util::{api::ApiError, cookie::use_session},
};

#[component]
pub fn LoginModal() -> Element {
    let mut open = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let mut session = use_session();
    let nav = use_navigator();

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let name = username().trim().to_string();
        if name.is_empty() {
            error.set(Some("Enter a username".to_string()));
            return;
        }

        submitting.set(true);
        spawn(async move {
            match login(&name).await {
                Ok(token) => {
                    session.write().session.sign_in(token);
                    open.set(false);
                    error.set(None);
                    nav.push(Route::WordList { page: 1 });
                }
                Err(e) => error.set(Some(e.message)),
            }
            submitting.set(false);
        });
    };

    rsx!(
        button {
            class: "btn btn-primary",
            onclick: move |_| open.set(true),
            "Login"
        }
        if open() {
            div { class: "modal modal-open",
                div { class: "modal-box",
                    h3 { class: "text-lg font-bold", "Login" }
                    form {
                        class: "flex flex-col gap-2 mt-4",
                        onsubmit: on_submit,
                        label { class: "label", r#for: "username", "Username" }
                        input {
                            id: "username",
                            class: "input input-bordered w-full",
                            r#type: "text",
                            value: "{username}",
                            oninput: move |event| username.set(event.value()),
                        }
                        if let Some(message) = error() {
                            p { class: "text-error", "{message}" }
                        }
                        div { class: "modal-action",
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: move |_| open.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled: submitting(),
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Logs in and stores the issued token as the session cookie
#[cfg(feature = "web")]
async fn login(username: &str) -> Result<String, ApiError> {
    use wordlist::model::session::token_cookie;

    use crate::client::util::{api, cookie::set_cookie};

    let token = api::login(username).await?.token;
    set_cookie(token_cookie(&token));

    Ok(token)
}

/// Logins are submitted by the browser only
#[cfg(not(feature = "web"))]
async fn login(_username: &str) -> Result<String, ApiError> {
    std::future::pending().await
}
