//! The retention sweep engine.
//!
//! One run computes a single cutoff from the run's start date, walks the
//! configured tables strictly in order, drops every partition whose upper
//! bound falls before the cutoff, and hands the accumulated report to the
//! notifier when anything was dropped.

pub mod cutoff;
pub mod policy;
mod report;
mod runner;

pub use report::DropReport;
pub use runner::run_sweep;
