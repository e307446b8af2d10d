//! Pure engine modules: dataset model, filtering, aggregation, sort
//! order, and URL state. Nothing in here imports Dioxus.

pub mod aggregate;
pub mod dataset;
pub mod filter;
pub mod format;
pub mod platform;
pub mod sort;
pub mod urlstate;
