use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About MediLocate"</h1>
            <p>
                "MediLocate connects people who need a medicine with the pharmacies that have it in stock, so nobody has to call around town to find a prescription."
            </p>
            <p>
                "Individuals search by medicine name and see nearby pharmacies ordered by distance. Pharmacy owners upload their inventory and reach customers nearby."
            </p>
            <h2>"Our Vision"</h2>
            <p>
                "A complete, current network of pharmacies that makes essential medication easy to find for everyone."
            </p>
        </section>
    }
}
