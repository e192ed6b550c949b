//! Monthly salary calculator.
//!
//! This crate computes the salary, meal compensation and transport cost of an
//! hourly employee over a date range inside one calendar month. Working days
//! are grouped by ISO week and every hour beyond the standard weekly hours is
//! paid at one of two overtime tiers. Results can be rendered as text and
//! exported as a single-row CSV summary.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod models;
pub mod report;
pub mod session;
