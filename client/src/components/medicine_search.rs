//! Individual-user dashboard: find the nearest pharmacies stocking a medicine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Geocoding, stock lookup and distance ranking all happen server-side; this
//! view collects the address + medicine name, offers prefix suggestions and
//! renders the ranked results.

#[cfg(test)]
#[path = "medicine_search_test.rs"]
mod medicine_search_test;

use leptos::prelude::*;

use crate::components::pharmacy_card::PharmacyCard;
use crate::net::error::ApiError;
use crate::net::types::{SearchRequest, SearchResult};
use crate::state::session::Session;

/// Suggestions are requested once the typed name reaches this many characters.
pub const MIN_SUGGEST_CHARS: usize = 2;

const MISSING_INPUT_MESSAGE: &str = "Please provide an address and medicine name";
const INVALID_ADDRESS_MESSAGE: &str =
    "Could not find that location. Please try a more general area or check for typos.";

pub fn should_suggest(input: &str) -> bool {
    input.trim().chars().count() >= MIN_SUGGEST_CHARS
}

/// Address to search from: the custom one when enabled, else the registered one.
pub fn resolve_search_address(use_custom: bool, custom: &str, registered: Option<&str>) -> Option<String> {
    let raw = if use_custom { Some(custom) } else { registered };
    raw.map(str::trim).filter(|a| !a.is_empty()).map(str::to_owned)
}

/// Build the search request, requiring both address and medicine name.
///
/// # Errors
///
/// Returns the message to show when either input is blank.
pub fn validate_search(address: Option<String>, medicine_name: &str) -> Result<SearchRequest, &'static str> {
    let medicine_name = medicine_name.trim();
    match address {
        Some(address) if !medicine_name.is_empty() => {
            Ok(SearchRequest { address, medicine_name: medicine_name.to_owned() })
        }
        _ => Err(MISSING_INPUT_MESSAGE),
    }
}

pub fn search_error_message(err: &ApiError) -> String {
    let message = err.user_message("Search failed");
    if message.contains("Invalid address") {
        INVALID_ADDRESS_MESSAGE.to_owned()
    } else {
        message
    }
}

pub fn results_heading(count: usize, medicine_name: &str) -> String {
    let noun = if count == 1 { "pharmacy" } else { "pharmacies" };
    format!("Found {count} {noun} with {medicine_name}")
}

#[component]
pub fn MedicineSearch() -> impl IntoView {
    let session = expect_context::<Session>();
    let registered_address = Memo::new(move |_| session.current_user().and_then(|u| u.address));

    let use_custom = RwSignal::new(false);
    let custom_address = RwSignal::new(String::new());
    let medicine = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<String>::new());
    let results = RwSignal::new(Vec::<SearchResult>::new());
    let searched_name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_toggle_custom = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        if enabled && custom_address.get_untracked().is_empty() {
            custom_address.set(registered_address.get_untracked().unwrap_or_default());
        }
        use_custom.set(enabled);
    };

    let on_medicine_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        medicine.set(value.clone());
        if !should_suggest(&value) {
            suggestions.set(Vec::new());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_by_prefix(value.trim()).await {
                Ok(found) => {
                    // Drop responses for a prefix the user has already typed past.
                    if medicine.get_untracked() == value {
                        suggestions.set(found);
                    }
                }
                Err(e) => leptos::logging::warn!("suggestion lookup failed: {e}"),
            }
        });
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let address = resolve_search_address(
            use_custom.get_untracked(),
            &custom_address.get_untracked(),
            registered_address.get_untracked().as_deref(),
        );
        let query = match validate_search(address, &medicine.get_untracked()) {
            Ok(query) => query,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        results.set(Vec::new());
        searched_name.set(query.medicine_name.clone());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::search_medicine(&query).await {
                Ok(found) => results.set(found),
                Err(e) => error.set(search_error_message(&e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            busy.set(false);
        }
    };

    view! {
        <section class="search-dashboard">
            <h1>"User Dashboard"</h1>
            <h2>"Find the nearest pharmacy with your medicine"</h2>
            <form class="search-form" on:submit=on_search>
                <label class="search-form__toggle">
                    <input type="checkbox" prop:checked=move || use_custom.get() on:change=on_toggle_custom/>
                    "Use a different address for this search"
                </label>
                <label class="search-form__field">
                    {move || if use_custom.get() { "Your Address" } else { "Your Registered Address" }}
                    <input
                        type="text"
                        placeholder="Enter your full address"
                        prop:disabled=move || !use_custom.get()
                        prop:value=move || {
                            if use_custom.get() {
                                custom_address.get()
                            } else {
                                registered_address.get().unwrap_or_default()
                            }
                        }
                        on:input=move |ev| custom_address.set(event_target_value(&ev))
                    />
                </label>
                <label class="search-form__field">
                    "Medicine Name"
                    <input
                        type="text"
                        list="medicine-suggestions"
                        placeholder="Start typing medicine name..."
                        prop:value=move || medicine.get()
                        on:input=on_medicine_input
                    />
                    <datalist id="medicine-suggestions">
                        <For each=move || suggestions.get() key=|name| name.clone() let:name>
                            <option value=name></option>
                        </For>
                    </datalist>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Searching..." } else { "Search" }}
                </button>
            </form>

            <Show when=move || !error.get().is_empty()>
                <p class="alert alert--error">{move || error.get()}</p>
            </Show>

            <Show when=move || !results.with(Vec::is_empty)>
                <div class="search-results">
                    <h3>{move || results_heading(results.with(Vec::len), &searched_name.get())}</h3>
                    <div class="search-results__grid">
                        {move || {
                            results
                                .get()
                                .into_iter()
                                .map(|result| view! { <PharmacyCard result=result/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>
            </Show>
        </section>
    }
}
