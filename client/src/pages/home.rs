//! Landing page: rotating banner, city picker, and the vehicle catalogue.

use leptos::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::components::vehicle_card::VehicleCard;
use crate::net::types::Vehicle;
use crate::state::home::BANNERS;
use crate::util::storage;

const CITIES: [&str; 6] = ["Karachi", "Lahore", "Islamabad", "Rawalpindi", "Faisalabad", "Multan"];

#[component]
pub fn HomePage() -> impl IntoView {
    let banner_index = RwSignal::new(0_usize);
    let city = RwSignal::new(String::new());
    let vehicles = RwSignal::new(None::<Result<Vec<Vehicle>, String>>);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::home::{BANNER_INTERVAL_MS, next_banner};

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(BANNER_INTERVAL_MS))).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                banner_index.update(|i| *i = next_banner(*i, BANNERS.len()));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));

        Effect::new(move || {
            if let Some(saved) = storage::get_cookie(storage::COOKIE_CITY) {
                city.set(saved);
            }
        });

        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_vehicles().await.map_err(|e| e.to_string());
            vehicles.set(Some(result));
        });
    }

    let on_city = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        storage::set_cookie(storage::COOKIE_CITY, &value);
        city.set(value);
    };

    view! {
        <div class="page home">
            <section class="banner">
                {move || {
                    let banner = BANNERS[banner_index.get() % BANNERS.len()];
                    view! {
                        <h1 class="banner__title">{banner.title}</h1>
                        <p class="banner__subtitle">{banner.subtitle}</p>
                    }
                }}
                <div class="banner__dots">
                    {(0..BANNERS.len())
                        .map(|i| {
                            view! {
                                <button
                                    class="banner__dot"
                                    class:banner__dot--active=move || banner_index.get() == i
                                    on:click=move |_| banner_index.set(i)
                                ></button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home__city">
                <label class="form__label">
                    "Your city"
                    <select class="form__input" prop:value=move || city.get() on:change=on_city>
                        <option value="">"Select a city"</option>
                        {CITIES
                            .into_iter()
                            .map(|c| view! { <option value=c>{c}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </section>

            <section class="home__vehicles">
                <h2>"Available vehicles"</h2>
                {move || match vehicles.get() {
                    None => view! { <LoadingIndicator label="Loading vehicles..."/> }.into_any(),
                    Some(Err(message)) => {
                        view! { <p class="page__error">{format!("Could not load vehicles: {message}")}</p> }
                            .into_any()
                    }
                    Some(Ok(list)) if list.is_empty() => {
                        view! { <p class="advisory">"No vehicles are available right now."</p> }.into_any()
                    }
                    Some(Ok(list)) => {
                        view! {
                            <div class="vehicle-grid">
                                {list
                                    .into_iter()
                                    .map(|vehicle| view! { <VehicleCard vehicle=vehicle/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
