//! Booking page for a single vehicle, with an optional driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the vehicle and its company's drivers on mount. Submission goes
//! through [`submit_action`]; a visitor who is not signed in gets a
//! blocking alert and no request is sent.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading_indicator::LoadingIndicator;
use crate::net::types::{Driver, Vehicle};
use crate::state::auth::AuthState;
use crate::state::booking::{BookingDraft, SubmitAction, estimate_total, rental_days, submit_action};
use crate::util::storage;

#[component]
pub fn BookNowPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let vehicle_id = move || params.read().get("id").unwrap_or_default();

    let vehicle = RwSignal::new(None::<Result<Vehicle, String>>);
    let drivers = RwSignal::new(Vec::<Driver>::new());
    let draft = RwSignal::new(BookingDraft::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let id = vehicle_id();
        vehicle.set(None);
        drivers.set(Vec::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            match api::fetch_vehicle(&id).await {
                Ok(found) => {
                    if let Some(company_id) = found.company.clone() {
                        match api::fetch_company_drivers(&company_id).await {
                            Ok(list) => drivers.set(list),
                            Err(e) => log::warn!("drivers for company {company_id} unavailable: {e}"),
                        }
                    }
                    vehicle.set(Some(Ok(found)));
                }
                Err(e) => vehicle.set(Some(Err(e.to_string()))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let saved_city = storage::get_cookie(storage::COOKIE_CITY);
        let auth_state = auth.get_untracked();
        let loaded = vehicle.get_untracked().and_then(Result::ok);
        let action = submit_action(&draft.get_untracked(), loaded.as_ref(), auth_state.user(), saved_city.as_deref());
        let request = match action {
            SubmitAction::Send(request) => request,
            SubmitAction::Alert(e) => {
                crate::util::alert(&e.to_string());
                return;
            }
            SubmitAction::Invalid(e) => {
                info.set(e.to_string());
                return;
            }
            SubmitAction::Ignore => return,
        };

        busy.set(true);
        info.set("Submitting booking...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_booking(&request).await {
                Ok(()) => {
                    info.set("Booking request sent. The company will confirm it shortly.".to_owned());
                    draft.set(BookingDraft::default());
                }
                Err(e) => info.set(format!("Booking failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let estimate = move || {
        let Some(Ok(selected)) = vehicle.get() else {
            return None;
        };
        let d = draft.get();
        rental_days(&d.start_date, &d.end_date).map(|days| (days, estimate_total(selected.rent, days)))
    };

    view! {
        <div class="page book-now">
            {move || match vehicle.get() {
                None => view! { <LoadingIndicator label="Loading vehicle..."/> }.into_any(),
                Some(Err(message)) => {
                    view! { <p class="page__error">{format!("Could not load this vehicle: {message}")}</p> }.into_any()
                }
                Some(Ok(selected)) => {
                    view! {
                        <header class="book-now__vehicle">
                            <h1>{selected.display_name()}</h1>
                            <p>
                                {format!(
                                    "{} seats · {} · {:.2} / day",
                                    selected.capacity,
                                    selected.transmission,
                                    selected.rent,
                                )}
                            </p>
                        </header>
                    }
                        .into_any()
                }
            }}
            <form class="form book-now__form" on:submit=on_submit>
                <label class="form__label">
                    "Start date"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || draft.get().start_date
                        on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "End date"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || draft.get().end_date
                        on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                    />
                </label>
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.get().intercity
                        on:change=move |ev| draft.update(|d| d.intercity = event_target_checked(&ev))
                    />
                    "Intercity trip"
                </label>
                <label class="form__label">
                    {move || if draft.get().intercity { "Destination city" } else { "City (optional)" }}
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || draft.get().city_name
                        on:input=move |ev| draft.update(|d| d.city_name = event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Driver"
                    <select
                        class="form__input"
                        prop:value=move || draft.get().driver_value().to_owned()
                        on:change=move |ev| draft.update(|d| d.select_driver(event_target_value(&ev)))
                    >
                        <option value="">"No driver (self-drive)"</option>
                        {move || {
                            drivers
                                .get()
                                .into_iter()
                                .map(|driver| {
                                    let label = format!("{} · {} yrs experience", driver.name, driver.experience);
                                    view! { <option value=driver.id>{label}</option> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <Show when=move || estimate().is_some()>
                    <p class="book-now__estimate">
                        {move || {
                            estimate()
                                .map(|(days, total)| format!("{days} day(s) · estimated total {total:.2}"))
                                .unwrap_or_default()
                        }}
                    </p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Book now"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form__message">{move || info.get()}</p>
                </Show>
            </form>
        </div>
    }
}
