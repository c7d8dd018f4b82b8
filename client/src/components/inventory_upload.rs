//! Pharmacy dashboard: upload the inventory CSV.
//!
//! The file goes to the server untouched; column checks and per-line error
//! reporting are the server's job and are shown here verbatim.

#[cfg(test)]
#[path = "inventory_upload_test.rs"]
mod inventory_upload_test;

use leptos::html::Input;
use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::ApiMessage;

pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

const UPLOAD_FALLBACK_MESSAGE: &str = "Upload failed. Please check the file format and try again.";
const UPLOAD_SUCCESS_FALLBACK: &str = "File uploaded successfully!";

/// Expected CSV columns, in order, with an optional hint.
pub const CSV_COLUMNS: [(&str, Option<&str>); 9] = [
    ("id", Some("A unique number for the inventory item")),
    ("pharmacy_id", Some("Your pharmacy's unique ID")),
    ("medicine_id", Some("The ID of the medicine")),
    ("name", Some("The name of the medicine")),
    ("manufacturer", None),
    ("description", None),
    ("stock", Some("Number of units available")),
    ("price", Some("Price per unit")),
    ("expiry_date", Some("Format: YYYY-MM-DD")),
];

/// Headline and per-line details for a failed upload.
pub fn upload_failure(err: &ApiError) -> (String, Vec<String>) {
    (err.user_message(UPLOAD_FALLBACK_MESSAGE), err.details().to_vec())
}

pub fn upload_success_message(reply: &ApiMessage) -> String {
    reply.message.clone().unwrap_or_else(|| UPLOAD_SUCCESS_FALLBACK.to_owned())
}

#[component]
pub fn InventoryUpload() -> impl IntoView {
    let file_input = NodeRef::<Input>::new();
    let selected_name = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let error_details = RwSignal::new(Vec::<String>::new());
    let success = RwSignal::new(String::new());

    let clear_messages = move || {
        error.set(String::new());
        error_details.set(Vec::new());
        success.set(String::new());
    };
    #[cfg(not(feature = "hydrate"))]
    let _ = clear_messages;

    let on_file_change = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let name = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(|file| file.name());
            if name.is_some() {
                selected_name.set(name);
                clear_messages();
            }
        }
    };

    let on_upload = move |_: leptos::ev::MouseEvent| {
        if busy.get_untracked() {
            return;
        }
        if selected_name.get_untracked().is_none() {
            error.set(NO_FILE_MESSAGE.to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                error.set(NO_FILE_MESSAGE.to_owned());
                return;
            };
            busy.set(true);
            clear_messages();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_inventory(&file).await {
                    Ok(reply) => success.set(upload_success_message(&reply)),
                    Err(e) => {
                        let (message, details) = upload_failure(&e);
                        error.set(message);
                        error_details.set(details);
                    }
                }
                busy.set(false);
                selected_name.set(None);
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            });
        }
    };

    view! {
        <section class="inventory-dashboard">
            <h1>"Pharmacy Dashboard"</h1>
            <h2>"Upload Your Medicine Inventory"</h2>
            <div class="inventory-dashboard__grid">
                <div class="panel">
                    <h3>"Upload CSV File"</h3>
                    <label class="btn">
                        "Select CSV File"
                        <input node_ref=file_input type="file" accept=".csv" hidden on:change=on_file_change/>
                    </label>
                    <Show when=move || selected_name.get().is_some()>
                        <p>"Selected file: " <strong>{move || selected_name.get().unwrap_or_default()}</strong></p>
                    </Show>
                    <button
                        class="btn btn--secondary"
                        disabled=move || busy.get() || selected_name.get().is_none()
                        on:click=on_upload
                    >
                        {move || if busy.get() { "Uploading..." } else { "Upload Inventory" }}
                    </button>
                    <Show when=move || !error.get().is_empty()>
                        <div class="alert alert--error">
                            <p>{move || error.get()}</p>
                            <ul>
                                {move || {
                                    error_details
                                        .get()
                                        .into_iter()
                                        .map(|detail| view! { <li>{detail}</li> })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </div>
                    </Show>
                    <Show when=move || !success.get().is_empty()>
                        <p class="alert alert--success">{move || success.get()}</p>
                    </Show>
                </div>
                <div class="panel">
                    <h3>"CSV Format Instructions"</h3>
                    <p>"Please ensure your CSV file has the following columns in order:"</p>
                    <ul class="csv-columns">
                        {CSV_COLUMNS
                            .iter()
                            .map(|(column, hint)| {
                                view! {
                                    <li>
                                        <code>{*column}</code>
                                        {hint.map(|h| view! { <span class="csv-columns__hint">{h}</span> })}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
