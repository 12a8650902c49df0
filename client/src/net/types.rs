//! Wire DTOs for the external rental API.
//!
//! DESIGN
//! ======
//! These are display records only: the backend owns every invariant. Field
//! names follow the API's camelCase JSON and accept `_id` for identifiers.
//! Status strings the client does not know about decode to `Other` so a new
//! backend status never breaks a page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A rentable vehicle as listed on the home page and dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(alias = "_id")]
    pub id: String,
    pub manufacturer: String,
    pub model: String,
    /// Daily rent in the company's currency.
    pub rent: f64,
    /// Seat count.
    pub capacity: u32,
    pub transmission: String,
    #[serde(default, alias = "imageUrl")]
    pub image: Option<String>,
    /// Owning company id.
    #[serde(default)]
    pub company: Option<String>,
}

impl Vehicle {
    /// "Manufacturer Model" label used on cards and tables.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }
}

/// A driver a company offers alongside its vehicles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Years of driving experience.
    pub experience: u32,
    #[serde(default, alias = "profileImage")]
    pub image: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

impl BookingStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Other => "Unknown",
        }
    }
}

/// A booking as returned by the company bookings listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub vehicle_id: String,
    pub user_id: String,
    pub company_id: String,
    #[serde(default)]
    pub driver_id: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub intercity: bool,
    #[serde(default)]
    pub city_name: String,
    #[serde(default)]
    pub status: BookingStatus,
}

/// Request body for `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub vehicle_id: String,
    pub user_id: String,
    pub company_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub intercity: bool,
    pub city_name: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageStatus {
    #[default]
    Pending,
    Resolved,
    #[serde(other)]
    Other,
}

/// A damage report filed against a booking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageReport {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "booking")]
    pub booking_id: String,
    pub description: String,
    #[serde(default)]
    pub status: DamageStatus,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A customer account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A rental company account used for the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyAccount {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Successful login reply. Exactly one of `user` / `company` is expected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<UserAccount>,
    #[serde(default)]
    pub company: Option<CompanyAccount>,
}

/// Request body for both login endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/signup`.
#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
