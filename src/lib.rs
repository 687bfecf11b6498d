//! Anvil - compression test analysis over .xlsx test records
//!
//! This library locates labeled measurements in a test-machine spreadsheet,
//! derives the engineering stress-strain curve and computes the derived
//! mechanical properties: maximum stress, compression modulus and absorbed
//! energy up to a strain cutoff.
//!
//! # Features
//!
//! - Label-driven extraction from unstructured sheets (values live two rows
//!   beneath their labels)
//! - Stress/strain derivation from force and stroke columns plus specimen
//!   geometry
//! - Best-fit sliding-window modulus, maximum-stress reduction, Simpson
//!   energy integral
//! - Results written back into the workbook, with an embedded stress-strain
//!   chart
//!
//! # Example
//!
//! ```no_run
//! use anvil::core;
//! use std::path::Path;
//!
//! let record = Path::new("specimen_07.xlsx");
//! let (curve, updated) = core::derive_curve(record)?;
//!
//! let max_stress = core::record_max_stress(&updated)?;
//! let modulus = core::record_modulus(&updated, &curve)?;
//! println!("σc = {max_stress} MPa, Ec = {modulus} MPa");
//! # Ok::<(), anvil::AnvilError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{AnvilError, AnvilResult};
pub use types::{CellValue, Curve, Geometry, Grid, LabelIndex, Position};
