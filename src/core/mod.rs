//! The extraction-and-calculation engine.
//!
//! A test record is an unstructured sheet: labeled scalars (specimen
//! geometry), labeled measurement columns (force, stroke) and labeled slots
//! where results belong. The engine locates the labels, extracts the
//! measurements, derives the stress-strain curve and computes the three
//! derived properties, writing each result two rows beneath its label.

pub mod curve;
pub mod energy;
pub mod extract;
pub mod locate;
pub mod max_stress;
pub mod modulus;
pub mod plot;

pub use curve::{derive_curve, derive_into_grid};
pub use energy::{energy_below, energy_label, record_energy};
pub use extract::{read_geometry, scalar_below, series_below};
pub use locate::{find_containing, find_labels};
pub use max_stress::record_max_stress;
pub use modulus::{compression_modulus, record_modulus};
pub use plot::embed_chart;

/// Labels heading the measured inputs. Matched by exact equality.
pub const FORCE_LABEL: &str = "Force";
pub const STROKE_LABEL: &str = "Stroke";
pub const LENGTH_LABEL: &str = "Length, L";
pub const WIDTH_LABEL: &str = "Width, W";
pub const THICKNESS_LABEL: &str = "Thickness, T";

/// Labels marking where results belong.
pub const STRESS_LABEL: &str = "Stress";
pub const STRAIN_LABEL: &str = "Strain";
pub const MAX_STRESS_LABEL: &str = "Maximum Stress, σc";
pub const MODULUS_LABEL: &str = "Comp. Modulus, Ec";

/// Values sit exactly two rows beneath their label, for inputs and results
/// alike.
pub const VALUE_ROW_OFFSET: u32 = 2;

/// Samples per regression window when fitting the compression modulus.
pub const MODULUS_WINDOW: usize = 50;

/// Default strain cutoff for the absorbed-energy integral, in percent.
pub const DEFAULT_STRAIN_THRESHOLD: f64 = 40.0;
