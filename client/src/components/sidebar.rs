//! Dashboard navigation between sections.

use leptos::prelude::*;

use crate::state::dashboard::Section;

/// Section list for the dashboard. Selecting a section is never blocked,
/// including while data is loading or after a failed fetch.
#[component]
pub fn Sidebar(
    #[prop(into)] active: Signal<Section>,
    #[prop(into)] has_error: Signal<bool>,
    on_select: Callback<Section>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <h2 class="sidebar__title">"Dashboard"</h2>
            <ul class="sidebar__list">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || active.get() == section
                                    on:click=move |_| on_select.run(section)
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <a class="sidebar__link" href="/dashboard/damage-reports">"Damage reports"</a>
            <Show when=move || has_error.get()>
                <p class="sidebar__status sidebar__status--error">"Some data could not be loaded"</p>
            </Show>
        </aside>
    }
}
