//! DSS Engine - Multi-criteria decision analysis
//!
//! This crate implements two decision engines: the analytic hierarchy process
//! (pairwise comparison matrices with consistency checking) and
//! competency-weighted budgeted expert voting, plus project persistence.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
