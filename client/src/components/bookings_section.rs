//! Dashboard bookings table.

use leptos::prelude::*;

use crate::net::types::{Booking, BookingStatus};

#[component]
pub fn BookingsSection(bookings: Vec<Booking>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h2>"Bookings"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Vehicle"</th>
                        <th>"Dates"</th>
                        <th>"City"</th>
                        <th>"Driver"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {bookings
                        .into_iter()
                        .map(|b| {
                            let pending = b.status == BookingStatus::Pending;
                            let city = if b.intercity { format!("{} (intercity)", b.city_name) } else { b.city_name };
                            view! {
                                <tr>
                                    <td>{b.vehicle_id}</td>
                                    <td>{format!("{} → {}", b.start_date, b.end_date)}</td>
                                    <td>{city}</td>
                                    <td>{b.driver_id.unwrap_or_else(|| "Self-drive".to_owned())}</td>
                                    <td>
                                        <span
                                            class="status-pill"
                                            class:status-pill--pending=pending
                                        >
                                            {b.status.label()}
                                        </span>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}
