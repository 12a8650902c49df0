//! Static content pages rendered from bundled Markdown.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

const ABOUT_MD: &str = "\
# About RentRide

RentRide connects travellers with trusted local rental companies. Browse the
fleet, pick your dates, and add an experienced driver if you would rather sit
back and enjoy the trip.

- **Wide selection**: hatchbacks, sedans, SUVs and vans.
- **Drivers on demand**: every company lists its drivers with their experience.
- **Intercity trips**: plan a journey between cities in one booking.

Rental companies manage their vehicles, drivers, bookings and damage reports
from the company dashboard.
";

const CONTACT_MD: &str = "\
# Contact us

Questions about a booking are best answered by the rental company listed on
your booking. For anything else, reach us here:

| Channel | Details |
|---|---|
| Email | support@rentride.example |
| Phone | +92 300 0000000 |
| Hours | Mon to Sat, 9:00 to 18:00 |
";

const TERMS_MD: &str = "\
# Terms of service

1. Bookings are requests until the rental company confirms them.
2. The renter must hold a valid driving licence unless a driver is booked.
3. Damage found after a rental is reported to the company and handled under
   its own policy.
4. Accounts are personal; keep your password private.

Sessions on this site last seven days on the device you sign in from.
";

#[component]
fn MarkdownPage(markdown: &'static str) -> impl IntoView {
    let rendered = render_markdown_html(markdown);
    view! { <article class="page content-page" inner_html=rendered></article> }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <MarkdownPage markdown=ABOUT_MD/> }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <MarkdownPage markdown=CONTACT_MD/> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <MarkdownPage markdown=TERMS_MD/> }
}
