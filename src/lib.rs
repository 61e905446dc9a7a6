//! Overseas Travel Subsidy Engine
//!
//! This crate computes an employee's annual overseas-travel subsidy from a
//! hire date, a calculation cutoff date, an optional suspension window and an
//! optional project-usage date, producing a year-by-year breakdown and a
//! cumulative total. An HTTP API exposes the calculation to form-based
//! front ends.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
