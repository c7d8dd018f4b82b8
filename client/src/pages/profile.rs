//! Profile page for the signed-in account.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::{Role, UserProfile};
use crate::state::session::Session;

#[cfg(feature = "hydrate")]
const DELETE_CONFIRM_PROMPT: &str = "Delete your account? This cannot be undone.";
#[cfg(feature = "hydrate")]
const DELETE_FALLBACK_MESSAGE: &str = "Could not delete the account. Please try again.";

pub fn role_label(user: &UserProfile) -> &'static str {
    match user.role() {
        Ok(Role::Pharmacy) => "Pharmacy Owner",
        Ok(Role::Individual) => "User",
        Err(_) => "Unrecognized role",
    }
}

/// Uppercased first character of the name, or `?` for an empty name.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

#[cfg(feature = "hydrate")]
fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(DELETE_CONFIRM_PROMPT).ok())
        .unwrap_or(false)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let error = RwSignal::new(String::new());
    let deleting = RwSignal::new(false);

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if deleting.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if !confirm_delete() {
                return;
            }
            deleting.set(true);
            error.set(String::new());
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_account().await {
                    Ok(()) => {
                        leptos::logging::log!("account deleted");
                        session.logout();
                    }
                    Err(e) => {
                        leptos::logging::warn!("account deletion failed: {e}");
                        error.set(e.user_message(DELETE_FALLBACK_MESSAGE));
                        deleting.set(false);
                    }
                }
            });
        }
    };

    view! {
        {move || match session.current_user() {
            None => view! { <p class="profile-page__loading">"Loading profile..."</p> }.into_any(),
            Some(user) => {
                view! {
                    <section class="profile-page">
                        <div class="profile-page__identity">
                            <div class="avatar avatar--large">{avatar_initial(&user.name)}</div>
                            <div>
                                <h1>{user.name.clone()}</h1>
                                <p class="profile-page__role">{role_label(&user)}</p>
                            </div>
                        </div>
                        <dl class="profile-page__details">
                            <dt>"Full Name"</dt>
                            <dd>{user.name.clone()}</dd>
                            <dt>"Email Address"</dt>
                            <dd>{user.email.clone()}</dd>
                            {user
                                .address
                                .clone()
                                .map(|address| {
                                    view! {
                                        <dt>"Registered Address"</dt>
                                        <dd>{address}</dd>
                                    }
                                })}
                        </dl>
                        <div class="profile-page__actions">
                            <button class="btn btn--outlined" on:click=move |_| session.logout()>
                                "Logout"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || deleting.get()
                                on:click=on_delete
                            >
                                {move || if deleting.get() { "Deleting..." } else { "Delete Account" }}
                            </button>
                        </div>
                        <Show when=move || !error.get().is_empty()>
                            <p class="alert alert--error">{move || error.get()}</p>
                        </Show>
                    </section>
                }
                    .into_any()
            }
        }}
    }
}
