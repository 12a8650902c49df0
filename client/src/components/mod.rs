//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dashboard sections. Section components
//! take plain data; the dashboard layout decides which one to mount.

pub mod bookings_section;
pub mod drivers_section;
pub mod error_display;
pub mod loading_indicator;
pub mod navbar;
pub mod overview_section;
pub mod sidebar;
pub mod vehicle_card;
pub mod vehicles_section;
