//! Impact estimation for the contagio epidemic impact estimator.
//!
//! This crate derives a set of deterministic impact metrics from a
//! validated estimation request:
//!
//! - [`Estimator`] - Validated request plus the pure metric functions
//! - [`Scenario`] - Best case / severe case growth assumption
//! - [`ImpactEstimate`] - The seven derived metrics for one scenario
//! - [`EstimationResult`] - Both scenarios packaged with the echoed input
//! - [`estimate`] - One-call entry point

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/contagio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod result;

pub use estimator::{Estimator, Scenario, estimate};
pub use result::{EstimationResult, ImpactEstimate};
