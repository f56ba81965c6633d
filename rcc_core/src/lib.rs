//! # rcc_core - Reinforced Concrete Beam Design Engine
//!
//! `rcc_core` computes flexural design quantities for rectangular reinforced
//! concrete beams per IS 456 limit state design: limiting neutral-axis depth,
//! limiting moment, required tension steel and moment of resistance of a bar
//! layout. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Validated**: Inputs are checked at construction, never propagated as NaN
//! - **Consistent**: Derived limits are refreshed whenever their inputs change
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use rcc_core::calculations::rc_beam::{calculate, BeamInput};
//!
//! let input = BeamInput::new(20.0, 415.0).with_width(250.0).with_moment(120.0);
//! let result = calculate(&input).unwrap();
//!
//! println!("Ast = {} mm², Mu_lim = {} kN·m", result.ast_required_mm2, result.mu_lim_knm);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam section design
//! - [`equations`] - Closed-form flexure formulas
//! - [`materials`] - Concrete/steel grades and bar layouts
//! - [`form`] - Text form parsing for front ends
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod form;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{BeamDesignResult, BeamInput, BeamSection, LayoutCheckResult};
pub use errors::{CalcError, CalcResult};
pub use form::DesignForm;
pub use materials::BarLayout;
