//! Dashboard driver roster.

use leptos::prelude::*;

use crate::net::types::Driver;

#[component]
pub fn DriversSection(drivers: Vec<Driver>) -> impl IntoView {
    view! {
        <section class="dashboard-section">
            <h2>"Drivers"</h2>
            <div class="driver-grid">
                {drivers
                    .into_iter()
                    .map(|d| {
                        let image = d.image.unwrap_or_else(|| "/images/driver-placeholder.png".to_owned());
                        view! {
                            <div class="driver-card">
                                <img class="driver-card__image" src=image alt=d.name.clone()/>
                                <h3 class="driver-card__name">{d.name}</h3>
                                <p class="driver-card__meta">
                                    {format!("Age {} · {} years experience", d.age, d.experience)}
                                </p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
