//! Company dashboard: sidebar navigation plus one section at a time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Company-only route. On mount it loads the company's vehicles, drivers, and
//! bookings concurrently, then hands the combined outcome to
//! [`DashboardState`]. Rendering is driven entirely by
//! [`DashboardState::resolve`]: spinner while loading, otherwise the selected
//! section with an error banner and advisory when the fetch failed.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::bookings_section::BookingsSection;
use crate::components::drivers_section::DriversSection;
use crate::components::error_display::{Advisory, ErrorDisplay};
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::overview_section::OverviewSection;
use crate::components::sidebar::Sidebar;
use crate::components::vehicles_section::VehiclesSection;
use crate::state::auth::{AccountKind, AuthState};
use crate::state::dashboard::{DashboardData, DashboardState, DashboardView, Section};
use crate::util::auth::install_auth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_redirect(auth, AccountKind::Company, use_navigate());

    let dashboard = RwSignal::new(DashboardState::default());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get_untracked() {
            return;
        }
        let Some(company_id) = auth.get().company().map(|c| c.id.clone()) else {
            return;
        };
        requested.set(true);
        dashboard.update(DashboardState::begin_fetch);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            let (vehicles, drivers, bookings) = futures::join!(
                api::fetch_company_vehicles(&company_id),
                api::fetch_company_drivers(&company_id),
                api::fetch_company_bookings(&company_id),
            );
            let (data, error) = crate::state::dashboard::combine_fetches(vehicles, drivers, bookings);
            if let Some(err) = &error {
                log::warn!("dashboard fetch for {company_id} incomplete: {err}");
            }
            dashboard.update(|d| d.finish_fetch(data, error));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = company_id;
    });

    view! {
        <Show
            when=move || auth.get().company().is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-layout">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <DashboardLayout dashboard=dashboard/>
        </Show>
    }
}

/// Sidebar plus whichever view [`DashboardState::resolve`] selects.
#[component]
pub fn DashboardLayout(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    let on_select = Callback::new(move |section: Section| dashboard.update(|d| d.select(section)));
    let active = Signal::derive(move || dashboard.get().active_section);
    let has_error = Signal::derive(move || dashboard.get().has_error());

    view! {
        <div class="dashboard-layout">
            <Sidebar active=active has_error=has_error on_select=on_select/>
            <main class="dashboard-layout__content">
                {move || match dashboard.get().resolve() {
                    DashboardView::Loading => {
                        view! { <LoadingIndicator label="Loading dashboard..."/> }.into_any()
                    }
                    DashboardView::Section { section, data, error, advisory } => {
                        view! {
                            {error.map(|message| view! { <ErrorDisplay message=message/> })}
                            {advisory.map(|message| view! { <Advisory message=message/> })}
                            {render_section(section, data)}
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}

fn render_section(section: Section, data: DashboardData) -> AnyView {
    match section {
        Section::Overview => view! { <OverviewSection stats=data.stats/> }.into_any(),
        Section::Vehicles => view! { <VehiclesSection vehicles=data.vehicles/> }.into_any(),
        Section::Drivers => view! { <DriversSection drivers=data.drivers/> }.into_any(),
        Section::Bookings => view! { <BookingsSection bookings=data.bookings/> }.into_any(),
    }
}
