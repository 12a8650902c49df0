//! Company review of damage reports filed against its bookings.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::loading_indicator::LoadingIndicator;
use crate::net::types::{DamageReport, DamageStatus};
use crate::state::auth::{AccountKind, AuthState};
use crate::state::damage::DamageReportsState;
use crate::util::auth::install_auth_redirect;

#[component]
pub fn DamageReportsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_redirect(auth, AccountKind::Company, use_navigate());

    let reports = RwSignal::new(DamageReportsState::default());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        let Some(company_id) = auth.get().company().map(|c| c.id.clone()) else {
            return;
        };
        requested.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_damage_reports(&company_id).await;
            reports.update(|s| {
                s.loading = false;
                match result {
                    Ok(items) => s.items = items,
                    Err(e) => s.error = Some(e.to_string()),
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = company_id;
    });

    let on_resolve = Callback::new(move |id: String| {
        if reports.get_untracked().updating.is_some() {
            return;
        }
        reports.update(|s| {
            s.updating = Some(id.clone());
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_damage_report(&id, DamageStatus::Resolved).await {
                Ok(updated) => reports.update(|s| s.apply_update(updated)),
                Err(e) => reports.update(|s| {
                    s.updating = None;
                    s.error = Some(e.to_string());
                }),
            }
        });
    });

    view! {
        <div class="page damage-reports">
            <header class="page__header">
                <a class="btn" href="/dashboard">"← Dashboard"</a>
                <h1>"Damage reports"</h1>
                <span class="damage-reports__count">
                    {move || format!("{} unresolved", reports.get().unresolved_count())}
                </span>
            </header>
            <Show when=move || reports.get().error.is_some()>
                <p class="page__error">{move || reports.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !reports.get().loading
                fallback=|| view! { <LoadingIndicator label="Loading damage reports..."/> }
            >
                <Show
                    when=move || !reports.get().items.is_empty()
                    fallback=|| view! { <p class="advisory">"No damage reports found."</p> }
                >
                    <ul class="damage-list">
                        {move || {
                            let state = reports.get();
                            state
                                .items
                                .into_iter()
                                .map(|report| {
                                    let busy = state.updating.as_deref() == Some(report.id.as_str());
                                    view! { <DamageReportRow report=report busy=busy on_resolve=on_resolve/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn DamageReportRow(report: DamageReport, busy: bool, on_resolve: Callback<String>) -> impl IntoView {
    let resolved = report.status == DamageStatus::Resolved;
    let id = report.id.clone();

    view! {
        <li class="damage-list__item" class:damage-list__item--resolved=resolved>
            <div class="damage-list__body">
                <p class="damage-list__booking">{format!("Booking {}", report.booking_id)}</p>
                <p class="damage-list__description">{report.description}</p>
                <div class="damage-list__images">
                    {report
                        .images
                        .into_iter()
                        .map(|src| view! { <img class="damage-list__image" src=src alt="Damage photo"/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
            {if resolved {
                view! { <span class="status-pill">"Resolved"</span> }.into_any()
            } else {
                view! {
                    <button
                        class="btn btn--primary"
                        disabled=busy
                        on:click=move |_| on_resolve.run(id.clone())
                    >
                        {if busy { "Saving..." } else { "Mark resolved" }}
                    </button>
                }
                    .into_any()
            }}
        </li>
    }
}
