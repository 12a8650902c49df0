//! Booking form draft and submit-time validation.
//!
//! Validation runs before any request: a missing identity must stop the flow
//! with a blocking alert and no network call.

#[cfg(test)]
#[path = "booking_test.rs"]
mod booking_test;

use time::Date;
use time::macros::format_description;

use crate::net::types::{NewBooking, UserAccount, Vehicle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Please log in to book a vehicle.")]
    MissingIdentity,
    #[error("This vehicle is not linked to a rental company.")]
    MissingCompany,
    #[error("Select both a start and an end date.")]
    DatesRequired,
    #[error("Dates must use the YYYY-MM-DD format.")]
    InvalidDate,
    #[error("The end date cannot be before the start date.")]
    EndBeforeStart,
    #[error("Enter the destination city for an intercity trip.")]
    CityRequired,
}

/// Raw form values on the booking page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingDraft {
    pub start_date: String,
    pub end_date: String,
    pub intercity: bool,
    /// Destination for intercity trips; overrides the saved city otherwise.
    pub city_name: String,
    pub driver_id: Option<String>,
}

fn parse_date(raw: &str) -> Result<Date, BookingError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| BookingError::InvalidDate)
}

/// Inclusive day count of a rental, or `None` if the range is not valid yet.
pub fn rental_days(start: &str, end: &str) -> Option<i64> {
    let start = parse_date(start).ok()?;
    let end = parse_date(end).ok()?;
    if end < start {
        return None;
    }
    Some((end - start).whole_days() + 1)
}

/// Estimated price shown next to the submit button.
#[allow(clippy::cast_precision_loss)]
pub fn estimate_total(rent_per_day: f64, days: i64) -> f64 {
    rent_per_day * days as f64
}

impl BookingDraft {
    /// Value for the driver `<select>`; empty means self-drive.
    pub fn driver_value(&self) -> &str {
        self.driver_id.as_deref().unwrap_or_default()
    }

    pub fn select_driver(&mut self, value: String) {
        self.driver_id = if value.is_empty() { None } else { Some(value) };
    }

    /// Check the draft and build the request body.
    ///
    /// `saved_city` is the `city` cookie, used for local trips without an
    /// explicit city.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule; identity is checked first.
    pub fn validate(
        &self,
        vehicle: &Vehicle,
        user: Option<&UserAccount>,
        saved_city: Option<&str>,
    ) -> Result<NewBooking, BookingError> {
        let user = user.ok_or(BookingError::MissingIdentity)?;
        let company_id = vehicle.company.clone().ok_or(BookingError::MissingCompany)?;

        if self.start_date.trim().is_empty() || self.end_date.trim().is_empty() {
            return Err(BookingError::DatesRequired);
        }
        let start = parse_date(&self.start_date)?;
        let end = parse_date(&self.end_date)?;
        if end < start {
            return Err(BookingError::EndBeforeStart);
        }

        let typed_city = self.city_name.trim();
        let city_name = if self.intercity {
            if typed_city.is_empty() {
                return Err(BookingError::CityRequired);
            }
            typed_city.to_owned()
        } else if typed_city.is_empty() {
            saved_city.unwrap_or_default().trim().to_owned()
        } else {
            typed_city.to_owned()
        };

        Ok(NewBooking {
            vehicle_id: vehicle.id.clone(),
            user_id: user.id.clone(),
            company_id,
            driver_id: self.driver_id.clone().filter(|id| !id.is_empty()),
            start_date: self.start_date.trim().to_owned(),
            end_date: self.end_date.trim().to_owned(),
            intercity: self.intercity,
            city_name,
        })
    }
}

/// What the booking page does when the form is submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction {
    /// Blocking alert, no request.
    Alert(BookingError),
    /// Inline form message, no request.
    Invalid(BookingError),
    /// Vehicle not loaded; nothing to book.
    Ignore,
    Send(NewBooking),
}

/// Decide the submit outcome. A signed-out visitor is alerted even when the
/// vehicle failed to load.
pub fn submit_action(
    draft: &BookingDraft,
    vehicle: Option<&Vehicle>,
    user: Option<&UserAccount>,
    saved_city: Option<&str>,
) -> SubmitAction {
    if user.is_none() {
        return SubmitAction::Alert(BookingError::MissingIdentity);
    }
    let Some(vehicle) = vehicle else {
        return SubmitAction::Ignore;
    };
    match draft.validate(vehicle, user, saved_city) {
        Ok(request) => SubmitAction::Send(request),
        Err(BookingError::MissingIdentity) => SubmitAction::Alert(BookingError::MissingIdentity),
        Err(e) => SubmitAction::Invalid(e),
    }
}
