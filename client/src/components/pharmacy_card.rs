//! Card for one pharmacy in the search results.

#[cfg(test)]
#[path = "pharmacy_card_test.rs"]
mod pharmacy_card_test;

use leptos::prelude::*;

use crate::net::types::{FoundMedicine, SearchResult};

pub fn format_distance(km: f64) -> String {
    format!("{km} km away")
}

pub fn format_price(price: f64) -> String {
    format!("₹{price}")
}

pub fn format_stock(stock: i64) -> String {
    if stock == 1 { "Stock: 1 unit".to_owned() } else { format!("Stock: {stock} units") }
}

#[component]
pub fn PharmacyCard(result: SearchResult) -> impl IntoView {
    let SearchResult { details, medicines } = result;

    view! {
        <article class="pharmacy-card">
            <header class="pharmacy-card__header">
                <h4>{details.pharmacy_name}</h4>
                <p class="pharmacy-card__address">{details.pharmacy_address}</p>
            </header>
            <p class="pharmacy-card__divider">"Available Medicines"</p>
            <ul class="pharmacy-card__medicines">
                {medicines.into_iter().map(medicine_row).collect::<Vec<_>>()}
            </ul>
            <footer class="pharmacy-card__distance">{format_distance(details.distance_km)}</footer>
        </article>
    }
}

fn medicine_row(medicine: FoundMedicine) -> impl IntoView {
    view! {
        <li class="pharmacy-card__medicine">
            <strong>{medicine.medicine_name}</strong>
            <span>{format_stock(medicine.stock)}</span>
            <span class="pharmacy-card__price">{format_price(medicine.price)}</span>
            <span class="pharmacy-card__expiry">"Expires: " {medicine.expiry_date}</span>
        </li>
    }
}
