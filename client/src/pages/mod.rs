//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own fetches and form state and delegates rendering
//! details to `components`. Pages never share state except the session
//! context.

pub mod book_now;
pub mod damage_reports;
pub mod dashboard;
pub mod forgot_password;
pub mod home;
pub mod info;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod verification;
