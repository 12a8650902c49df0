//! Dashboard overview: headline counts.

use leptos::prelude::*;

use crate::state::dashboard::DashboardStats;

#[component]
pub fn OverviewSection(stats: DashboardStats) -> impl IntoView {
    let tiles = [
        ("Vehicles", stats.total_vehicles),
        ("Drivers", stats.total_drivers),
        ("Bookings", stats.total_bookings),
        ("Pending bookings", stats.pending_bookings),
    ];

    view! {
        <section class="dashboard-section overview">
            <h2>"Overview"</h2>
            <div class="overview__tiles">
                {tiles
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="overview__tile">
                                <span class="overview__value">{value}</span>
                                <span class="overview__label">{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
