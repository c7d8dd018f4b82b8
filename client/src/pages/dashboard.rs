//! Dashboard page: mounts the view matching the signed-in user's role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `ProtectedRoute`. Pharmacy operators get inventory upload,
//! individuals get medicine search. The two views are mutually exclusive and
//! an unrecognized role renders a configuration error instead of guessing.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::inventory_upload::InventoryUpload;
use crate::components::medicine_search::MedicineSearch;
use crate::net::error::RoleError;
use crate::net::types::{Role, UserProfile};
use crate::state::session::Session;

/// The dashboard views a role can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    InventoryManagement,
    MedicineSearch,
}

/// Choose the dashboard for `user`.
///
/// # Errors
///
/// Returns [`RoleError`] when the profile's role is missing or unknown.
pub fn select_dashboard(user: &UserProfile) -> Result<DashboardView, RoleError> {
    Ok(match user.role()? {
        Role::Pharmacy => DashboardView::InventoryManagement,
        Role::Individual => DashboardView::MedicineSearch,
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let selection = Memo::new(move |_| session.current_user().map(|user| select_dashboard(&user)));

    move || match selection.get() {
        None => view! {
            <section class="dashboard-page dashboard-page--empty">
                <p>"Please log in to view your dashboard."</p>
            </section>
        }
        .into_any(),
        Some(Ok(DashboardView::MedicineSearch)) => view! { <MedicineSearch/> }.into_any(),
        Some(Ok(DashboardView::InventoryManagement)) => view! { <InventoryUpload/> }.into_any(),
        Some(Err(err)) => {
            leptos::logging::error!("dashboard role routing failed: {err}");
            view! {
                <section class="dashboard-page dashboard-page--error" role="alert">
                    <h1>"Account configuration error"</h1>
                    <p>"This account has no usable role (" {err.to_string()} "). Please contact support."</p>
                </section>
            }
            .into_any()
        }
    }
}
