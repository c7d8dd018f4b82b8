//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="landing">
            <h1 class="landing__title">"MediLocate"</h1>
            <p class="landing__tagline">
                "Your trusted partner in finding the right medicine, right when you need it."
            </p>
            <p class="landing__intro">
                "Search for medicines stocked by pharmacies near you. Pharmacies can manage and showcase their inventory in one place. Log in or create an account to get started."
            </p>
            <div class="landing__actions">
                <A href="/login" attr:class="btn btn--primary">"Login"</A>
                <A href="/register" attr:class="btn btn--outlined">"Register"</A>
            </div>
        </section>
    }
}
