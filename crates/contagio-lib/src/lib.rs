//! Deterministic epidemic impact estimation library.
//!
//! This is a facade crate that re-exports functionality from the contagio
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use contagio_lib::prelude::*;
//!
//! let input = EstimatorInput::new(
//!     RegionInfo::new("Africa", 19.7, 3.0, 0.65),
//!     "days",
//!     30,
//!     674,
//!     66_622_705,
//!     1_380_614,
//! );
//!
//! let result = estimate(&input)?;
//! assert_eq!(result.impact.currently_infected, 6740);
//! assert_eq!(result.severe_impact.currently_infected, 33_700);
//! # Ok::<(), contagio_lib::EstimatorError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/contagio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use contagio_types::*;

// Re-export the estimation pipeline
pub use contagio_estimate::{EstimationResult, Estimator, ImpactEstimate, Scenario, estimate};

/// Prelude module for convenient imports.
///
/// ```
/// use contagio_lib::prelude::*;
/// ```
pub mod prelude {
    pub use contagio_types::{
        EstimatorError, EstimatorInput, PeriodType, RegionInfo, Result,
    };

    pub use contagio_estimate::{
        EstimationResult, Estimator, ImpactEstimate, Scenario, estimate,
    };
}
