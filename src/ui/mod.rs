//! Presentational widgets for the portal window.

pub mod results;
pub mod theme;
