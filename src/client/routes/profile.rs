use dioxus::document::Title;
use dioxus::prelude::*;
use wordlist::model::profile::ProfileDto;

use crate::client::{
    components::{ErrorPage, Page},
    router::Route,
    util::api::SessionFetch,
};

#[component]
pub fn Profile() -> Element {
    let nav = use_navigator();

    let result = use_resource(|| async move { load_profile().await });

    use_effect(move || {
        if let Some(SessionFetch::LoggedOut) = &*result.read() {
            nav.replace(Route::Home {});
        }
    });

    rsx!(
        Title { "Profile | Word List" }
        Page { class: "flex flex-col items-center",
            match &*result.read() {
                Some(SessionFetch::Ready(profile)) => rsx! {
                    ProfileCard { profile: profile.clone() }
                },
                Some(SessionFetch::Failed(e)) => rsx! {
                    ErrorPage { status: e.status }
                },
                _ => rsx! {
                    div { class: "skeleton h-64 w-96" }
                },
            }
        }
    )
}

#[component]
fn ProfileCard(profile: ProfileDto) -> Element {
    let data = &profile.data;
    let login = data.field("login").unwrap_or_default().to_string();
    let name = data.field("name").map(str::to_string);
    let bio = data.field("bio").map(str::to_string);

    rsx!(
        div { class: "card shadow-sm w-full max-w-96",
            div { class: "card-body items-center",
                if let Some(avatar_url) = data.avatar_url.clone() {
                    div { class: "avatar",
                        div { class: "w-24 rounded-full",
                            img { src: "{avatar_url}", alt: "{login}" }
                        }
                    }
                }
                if let Some(name) = name {
                    h2 { class: "card-title", "{name}" }
                }
                p { class: "text-sm", "@{login}" }
                if let Some(bio) = bio {
                    p { "{bio}" }
                }
            }
        }
    )
}

#[cfg(feature = "web")]
async fn load_profile() -> SessionFetch<ProfileDto> {
    use crate::client::util::{api, cookie::read_session};

    let session = read_session().await;
    let Some(token) = session.token.as_deref() else {
        return SessionFetch::LoggedOut;
    };

    match api::get_profile(token).await {
        Ok(profile) => SessionFetch::Ready(profile),
        Err(e) => SessionFetch::Failed(e),
    }
}

#[cfg(not(feature = "web"))]
async fn load_profile() -> SessionFetch<ProfileDto> {
    std::future::pending().await
}
