//! # Design Form
//!
//! Raw text fields as typed by the user in a front end, and their conversion
//! into a [`BeamInput`]. Parsing happens before the core is invoked so a typo
//! is reported as a field error rather than a calculation failure.
//!
//! Strength fields also accept grade names, so `M25` and `Fe500` work in
//! place of `25` and `500`.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::form::DesignForm;
//!
//! let mut form = DesignForm::default();
//! form.fck = "M25".to_string();
//! let input = form.parse().unwrap();
//! assert_eq!(input.fck_mpa, 25.0);
//!
//! form.width = "abc".to_string();
//! assert!(form.parse().is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::rc_beam::BeamInput;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarLayout, ConcreteGrade, SteelGrade};

/// Message shown for any non-numeric field
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter valid numbers.";

/// The five numeric fields of the design form, as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignForm {
    /// Concrete grade fck (MPa) or grade name
    pub fck: String,
    /// Steel grade fy (MPa) or grade name
    pub fy: String,
    /// Width of beam (mm)
    pub width: String,
    /// Overall depth of beam (mm)
    pub depth: String,
    /// Design moment (kN·m)
    pub moment: String,
}

impl Default for DesignForm {
    fn default() -> Self {
        Self {
            fck: "20".to_string(),
            fy: "415".to_string(),
            width: "250".to_string(),
            depth: "500".to_string(),
            moment: "120".to_string(),
        }
    }
}

impl DesignForm {
    /// Parse every field; the first non-numeric one is reported.
    ///
    /// Cover is not a form field and takes its default.
    pub fn parse(&self) -> CalcResult<BeamInput> {
        let fck = parse_strength("fck_mpa", &self.fck, |s| {
            ConcreteGrade::from_str_flexible(s).map(|g| g.fck_mpa())
        })?;
        let fy = parse_strength("fy_mpa", &self.fy, |s| {
            SteelGrade::from_str_flexible(s).map(|g| g.fy_mpa())
        })?;

        Ok(BeamInput::new(fck, fy)
            .with_width(parse_number("width_mm", &self.width)?)
            .with_depth(parse_number("depth_mm", &self.depth)?)
            .with_moment(parse_number("design_moment_knm", &self.moment)?))
    }
}

/// Parse a bar count and diameter entered as text.
pub fn parse_bar_layout(count: &str, dia: &str) -> CalcResult<BarLayout> {
    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|_| CalcError::invalid_input("count", count, INVALID_NUMBER_MESSAGE))?;
    let dia_mm = parse_number("dia_mm", dia)?;
    let layout = BarLayout::new(count, dia_mm);
    layout.validate()?;
    Ok(layout)
}

/// Parse a finite f64 from trimmed text
pub fn parse_number(field: &str, text: &str) -> CalcResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::invalid_input(field, text, INVALID_NUMBER_MESSAGE)),
    }
}

fn parse_strength(
    field: &str,
    text: &str,
    grade_lookup: impl Fn(&str) -> CalcResult<f64>,
) -> CalcResult<f64> {
    parse_number(field, text).or_else(|err| grade_lookup(text).map_err(|_| err))
}
