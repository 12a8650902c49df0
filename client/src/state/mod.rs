//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `dashboard`, `booking`, etc.) so pages
//! depend on small focused models. Decision logic lives here as plain
//! methods so it is testable without a browser; pages only wire it to signals.

pub mod auth;
pub mod booking;
pub mod damage;
pub mod dashboard;
pub mod home;
pub mod verification;
