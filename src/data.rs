//!
//! Reference data of the vessel: hydrostatic and cross-curve tables,
//! immutable for the process lifetime once constructed.
//
pub mod del_monte;
pub mod hydrostatic_table;
pub mod kn_table;
pub mod vessel_profile;
