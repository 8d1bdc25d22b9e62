//! Shift payroll job for a Notion workspace.
//!
//! This crate reads accepted shifts from a Notion database, writes one
//! payroll row per on-shift employee with the employee's flat rate, and marks
//! each shift handled. It is meant to be run on a schedule by the
//! `shift-payroll` binary.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod notion;
pub mod payroll;
