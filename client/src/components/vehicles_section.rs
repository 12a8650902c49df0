//! Dashboard vehicles table.

use leptos::prelude::*;

use crate::net::types::Vehicle;

#[component]
pub fn VehiclesSection(vehicles: Vec<Vehicle>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h2>"Vehicles"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Vehicle"</th>
                        <th>"Rent / day"</th>
                        <th>"Seats"</th>
                        <th>"Transmission"</th>
                    </tr>
                </thead>
                <tbody>
                    {vehicles
                        .into_iter()
                        .map(|v| {
                            view! {
                                <tr>
                                    <td>{v.display_name()}</td>
                                    <td>{format!("{:.2}", v.rent)}</td>
                                    <td>{v.capacity}</td>
                                    <td>{v.transmission}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}
