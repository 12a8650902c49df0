//! Vehicle summary card on the home page.

use leptos::prelude::*;

use crate::net::types::Vehicle;

const PLACEHOLDER_IMAGE: &str = "/images/vehicle-placeholder.png";

#[component]
pub fn VehicleCard(vehicle: Vehicle) -> impl IntoView {
    let name = vehicle.display_name();
    let image = vehicle.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let book_href = format!("/book/{}", vehicle.id);

    view! {
        <article class="vehicle-card">
            <img class="vehicle-card__image" src=image alt=name.clone()/>
            <div class="vehicle-card__body">
                <h3 class="vehicle-card__title">{name}</h3>
                <p class="vehicle-card__meta">
                    {format!("{} seats · {}", vehicle.capacity, vehicle.transmission)}
                </p>
                <p class="vehicle-card__price">{format!("{:.2} / day", vehicle.rent)}</p>
                <a class="btn btn--primary" href=book_href>"Book now"</a>
            </div>
        </article>
    }
}
