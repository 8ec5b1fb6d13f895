//!
//! The statical-stability pipeline.
//!
//! For a (draft, KG) request it derives displacement from the hydrostatic
//! table, interpolates the cross curves, builds the GZ series
//! and digests it into the summary scalars.
//
mod curve_key;
pub mod gz_curve;
pub mod metacentre;
pub mod stability_calculator;
pub mod stability_report;
pub mod summary;
pub mod vessel_state;
pub mod warning;
