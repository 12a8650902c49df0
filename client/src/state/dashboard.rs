//! Company dashboard state and the section/error/loading resolver.
//!
//! DESIGN
//! ======
//! The page stores the raw fetch outcome (`loading`, `error`, `data`) plus the
//! selected [`Section`]. [`DashboardState::resolve`] turns that into exactly
//! one [`DashboardView`]: a spinner while loading, otherwise the selected
//! section. A fetch error never blocks navigation; sections render against
//! empty-shaped data and carry an advisory instead.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{Booking, BookingStatus, Driver, Vehicle};

/// One tab of the company dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Overview,
    Vehicles,
    Drivers,
    Bookings,
}

impl Section {
    pub const ALL: [Section; 4] = [Self::Overview, Self::Vehicles, Self::Drivers, Self::Bookings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Vehicles => "Vehicles",
            Self::Drivers => "Drivers",
            Self::Bookings => "Bookings",
        }
    }

    /// Banner shown in this section when the dashboard fetch failed.
    pub fn advisory(self) -> &'static str {
        match self {
            Self::Overview => "No dashboard statistics found.",
            Self::Vehicles => "No vehicle data found.",
            Self::Drivers => "No driver data found.",
            Self::Bookings => "No booking data found.",
        }
    }
}

/// Headline counts for the overview section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_vehicles: usize,
    pub total_drivers: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
}

/// Everything the dashboard sections render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
    pub bookings: Vec<Booking>,
}

impl DashboardData {
    /// Zero stats and empty lists; rendered when a fetch failed outright.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble fetched lists and derive the overview counts from them.
    pub fn from_parts(vehicles: Vec<Vehicle>, drivers: Vec<Driver>, bookings: Vec<Booking>) -> Self {
        let stats = DashboardStats {
            total_vehicles: vehicles.len(),
            total_drivers: drivers.len(),
            total_bookings: bookings.len(),
            pending_bookings: bookings.iter().filter(|b| b.status == BookingStatus::Pending).count(),
        };
        Self { stats, vehicles, drivers, bookings }
    }

    fn is_section_empty(&self, section: Section) -> bool {
        match section {
            Section::Overview => self.stats == DashboardStats::default(),
            Section::Vehicles => self.vehicles.is_empty(),
            Section::Drivers => self.drivers.is_empty(),
            Section::Bookings => self.bookings.is_empty(),
        }
    }
}

/// Raw dashboard fetch outcome plus the selected section.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<DashboardData>,
    pub active_section: Section,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self { loading: true, error: None, data: None, active_section: Section::Overview }
    }
}

/// What the dashboard body shows right now.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    Loading,
    Section {
        section: Section,
        data: DashboardData,
        /// Fetch error to show in the `ErrorDisplay` banner.
        error: Option<String>,
        /// Per-section "No ... data found." text.
        advisory: Option<&'static str>,
    },
}

impl DashboardState {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Switch sections. Unconditional, even while a fetch is in flight.
    pub fn select(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the combined fetch outcome.
    pub fn finish_fetch(&mut self, data: Option<DashboardData>, error: Option<String>) {
        self.loading = false;
        self.data = data;
        self.error = error;
    }

    pub fn resolve(&self) -> DashboardView {
        if self.loading {
            return DashboardView::Loading;
        }
        let section = self.active_section;
        let data = self.data.clone().unwrap_or_else(DashboardData::empty);
        let advisory = match &self.error {
            Some(_) if data.is_section_empty(section) => Some(section.advisory()),
            _ => None,
        };
        DashboardView::Section { section, data, error: self.error.clone(), advisory }
    }
}

/// Merge the three list fetches into one dashboard outcome.
///
/// All failed: no data, first error. Some failed: partial data with empty
/// lists for the failures, first error. None failed: full data, no error.
pub fn combine_fetches<E: std::fmt::Display>(
    vehicles: Result<Vec<Vehicle>, E>,
    drivers: Result<Vec<Driver>, E>,
    bookings: Result<Vec<Booking>, E>,
) -> (Option<DashboardData>, Option<String>) {
    let all_failed = vehicles.is_err() && drivers.is_err() && bookings.is_err();
    let mut first_error = None;
    let mut take = |label: &str, err: &E| {
        if first_error.is_none() {
            first_error = Some(format!("Failed to load {label}: {err}"));
        }
    };

    let vehicles = vehicles.unwrap_or_else(|e| {
        take("vehicles", &e);
        Vec::new()
    });
    let drivers = drivers.unwrap_or_else(|e| {
        take("drivers", &e);
        Vec::new()
    });
    let bookings = bookings.unwrap_or_else(|e| {
        take("bookings", &e);
        Vec::new()
    });

    if all_failed {
        return (None, first_error);
    }
    (Some(DashboardData::from_parts(vehicles, drivers, bookings)), first_error)
}
