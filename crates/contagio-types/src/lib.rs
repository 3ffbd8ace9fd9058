//! Core types for the contagio epidemic impact estimator.
//!
//! This crate provides the fundamental data structures used throughout
//! contagio:
//!
//! - [`RegionInfo`] - Demographic and economic profile of a region
//! - [`EstimatorInput`] - A complete estimation request
//! - [`PeriodType`] - Unit of the requested time horizon
//! - [`EstimatorError`] - Validation errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/contagio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod input;
mod period;
mod region;

pub use error::{EstimatorError, Result};
pub use input::EstimatorInput;
pub use period::{PeriodType, PeriodTypeParseError};
pub use region::RegionInfo;
