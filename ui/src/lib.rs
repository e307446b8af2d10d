//! Shared UI crate for the eDNA Expeditions sample tracker. The pure
//! filtering/derivation engine lives under `core`; the dashboard state
//! and views consume its outputs as plain data.

pub mod core;
pub mod samples;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
