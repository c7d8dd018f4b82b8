//! Registration page for individual users and pharmacies.
//!
//! The server geocodes the address on registration, so address failures come
//! back as request errors and are rewritten into a friendlier prompt.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::net::error::ApiError;
use crate::net::types::RegisterRequest;

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Please login.";
pub const GEOCODE_FAILED_MESSAGE: &str =
    "We could not find that address. Please try to be more specific or check for typos.";

const REGISTER_FALLBACK_MESSAGE: &str = "Registration failed";
const GEOCODE_FAILED_CODE: &str = "geocode_failed";
const GEOCODE_FAILED_TEXT: &str = "could not geocode";

/// Delay before leaving the page after a successful registration.
#[cfg(feature = "hydrate")]
const REDIRECT_DELAY: std::time::Duration = std::time::Duration::from_secs(2);

/// Trim every text field and require all of them.
///
/// The password is checked but not trimmed.
pub fn validate_register_form(form: &RegisterRequest) -> Result<RegisterRequest, &'static str> {
    let cleaned = RegisterRequest {
        name: form.name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        is_pharmacy: form.is_pharmacy,
        address_line: form.address_line.trim().to_owned(),
        city: form.city.trim().to_owned(),
        state: form.state.trim().to_owned(),
        postal_code: form.postal_code.trim().to_owned(),
        country: form.country.trim().to_owned(),
    };
    let required = [
        &cleaned.name,
        &cleaned.email,
        &cleaned.password,
        &cleaned.address_line,
        &cleaned.city,
        &cleaned.state,
        &cleaned.postal_code,
        &cleaned.country,
    ];
    if required.iter().any(|value| value.is_empty()) {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(cleaned)
}

/// Message shown for a failed registration.
///
/// A structured `geocode_failed` code is checked first; older servers only
/// say so in the message text.
pub fn register_error_message(err: &ApiError) -> String {
    let geocode_failed = err.code() == Some(GEOCODE_FAILED_CODE)
        || err.server_message().is_some_and(|m| m.contains(GEOCODE_FAILED_TEXT));
    if geocode_failed {
        return GEOCODE_FAILED_MESSAGE.to_owned();
    }
    err.user_message(REGISTER_FALLBACK_MESSAGE)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_pharmacy = RwSignal::new(false);
    let address_line = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let postal_code = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());

    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        success.set(String::new());

        let draft = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            is_pharmacy: is_pharmacy.get_untracked(),
            address_line: address_line.get_untracked(),
            city: city.get_untracked(),
            state: state.get_untracked(),
            postal_code: postal_code.get_untracked(),
            country: country.get_untracked(),
        };
        let form = match validate_register_form(&draft) {
            Ok(form) => form,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::register(&form).await;
                busy.set(false);
                match outcome {
                    Ok(_) => {
                        success.set(REGISTER_SUCCESS_MESSAGE.to_owned());
                        gloo_timers::future::sleep(REDIRECT_DELAY).await;
                        navigate("/login", Default::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        error.set(register_error_message(&e));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = form;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Register for MediLocate"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="alert alert--error">{move || error.get()}</p>
                </Show>
                <Show when=move || !success.get().is_empty()>
                    <p class="alert alert--success">{move || success.get()}</p>
                </Show>
                <form class="auth-form auth-form--grid" on:submit=on_submit>
                    <TextField label="Full Name or Pharmacy Name" value=name name="name" autocomplete="name"/>
                    <TextField label="Email Address" value=email input_type="email" name="email" autocomplete="email"/>
                    <TextField
                        label="Password"
                        value=password
                        input_type="password"
                        name="password"
                        autocomplete="new-password"
                    />
                    <TextField
                        label="Address Line"
                        value=address_line
                        name="address_line"
                        autocomplete="address-line1"
                    />
                    <TextField label="City" value=city name="city" autocomplete="address-level2"/>
                    <TextField label="State / Province" value=state name="state" autocomplete="address-level1"/>
                    <TextField label="Postal Code" value=postal_code name="postal_code" autocomplete="postal-code"/>
                    <TextField label="Country" value=country name="country" autocomplete="country-name"/>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            name="is_pharmacy"
                            prop:checked=move || is_pharmacy.get()
                            on:change=move |ev| is_pharmacy.set(event_target_checked(&ev))
                        />
                        "Register as a Pharmacy"
                    </label>
                    <p class="form-hint">"Check this box if you are a pharmacy owner and want to list your inventory."</p>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href="/login">"Sign In"</A>
                </p>
            </div>
        </div>
    }
}
