//! # Structural Engineering Equations
//!
//! The closed-form flexure formulas used by the beam designer. Keeping them as
//! free functions on plain `f64` values makes each one easy to check against
//! the code clause it comes from.
//!
//! ## Modules
//!
//! - [`flexure`] - Singly reinforced rectangular section (IS 456 Annex G)
//!
//! ## Sign Conventions
//!
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Neutral-axis depth**: Measured down from the compression face
//!
//! ## References
//!
//! - IS 456:2000: Plain and Reinforced Concrete - Code of Practice
//! - SP 16: Design Aids for Reinforced Concrete to IS 456

pub mod flexure;

pub use flexure::{
    bar_area,
    limiting_moment,
    limiting_neutral_axis_depth,
    moment_coefficient,
    neutral_axis_depth,
    required_steel_ratio,
    round_to,
    steel_ratio_discriminant,
    under_reinforced_moment,
};
