//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`rc_beam`] - Singly reinforced rectangular concrete beam (IS 456)

pub mod rc_beam;

// Re-export commonly used types
pub use rc_beam::{
    calculate, check_layout, BeamDesignResult, BeamInput, BeamSection, LayoutCheckResult,
    SectionState,
};
