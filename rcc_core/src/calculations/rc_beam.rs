//! # Singly Reinforced Rectangular Beam Design
//!
//! Flexural design of a rectangular reinforced-concrete beam per IS 456 limit
//! state method: limiting neutral-axis depth, limiting moment, required
//! tension steel and moment of resistance of a chosen bar layout.
//!
//! ## Assumptions
//!
//! - Rectangular section, tension steel only (singly reinforced)
//! - Es = 200 000 MPa
//! - Effective cover measured to the centroid of the tension steel
//! - Over-reinforced sections are rejected, not designed
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::calculations::rc_beam::{BeamInput, BeamSection};
//! use rcc_core::materials::BarLayout;
//!
//! let input = BeamInput::new(20.0, 415.0)
//!     .with_width(250.0)
//!     .with_depth(500.0)
//!     .with_moment(120.0);
//!
//! let mut beam = BeamSection::new(input).unwrap();
//! assert_eq!(beam.mu_lim_knm(), 155.8);
//!
//! let ast = beam.calculate_ast_required().unwrap();
//! assert_eq!(ast, 816.15);
//!
//! let mor = beam.calculate_moment_of_resistance(BarLayout::default()).unwrap();
//! assert_eq!(mor, 92.54);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::flexure::{
    limiting_moment, limiting_neutral_axis_depth, moment_coefficient, neutral_axis_depth,
    required_steel_ratio, round_to, steel_ratio_discriminant, under_reinforced_moment,
};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarLayout, ConcreteGrade, SteelGrade, STEEL_MODULUS_MPA};

/// Default section width (mm)
pub const DEFAULT_WIDTH_MM: f64 = 300.0;
/// Default overall depth (mm)
pub const DEFAULT_DEPTH_MM: f64 = 500.0;
/// Default effective cover (mm)
pub const DEFAULT_COVER_MM: f64 = 25.0;
/// Default design moment (kN·m)
pub const DEFAULT_MOMENT_KNM: f64 = 100.0;

/// Input parameters for a rectangular RC beam section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "fck_mpa": 20.0,
///   "fy_mpa": 415.0,
///   "width_mm": 250.0,
///   "depth_mm": 500.0,
///   "cover_mm": 25.0,
///   "design_moment_knm": 120.0
/// }
/// ```
///
/// Only `fck_mpa` and `fy_mpa` are required in JSON; the rest fall back to
/// the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default = "default_label")]
    pub label: String,

    /// Characteristic compressive strength of concrete (MPa)
    pub fck_mpa: f64,

    /// Yield strength of tension steel (MPa)
    pub fy_mpa: f64,

    /// Section width b (mm)
    #[serde(default = "default_width")]
    pub width_mm: f64,

    /// Overall depth h (mm)
    #[serde(default = "default_depth")]
    pub depth_mm: f64,

    /// Effective cover to the centroid of tension steel (mm)
    #[serde(default = "default_cover")]
    pub cover_mm: f64,

    /// Factored design moment Mu (kN·m)
    #[serde(default = "default_moment")]
    pub design_moment_knm: f64,
}

fn default_label() -> String {
    "B-1".to_string()
}

fn default_width() -> f64 {
    DEFAULT_WIDTH_MM
}

fn default_depth() -> f64 {
    DEFAULT_DEPTH_MM
}

fn default_cover() -> f64 {
    DEFAULT_COVER_MM
}

fn default_moment() -> f64 {
    DEFAULT_MOMENT_KNM
}

impl BeamInput {
    /// New input with default width, depth, cover and design moment.
    pub fn new(fck_mpa: f64, fy_mpa: f64) -> Self {
        Self {
            label: default_label(),
            fck_mpa,
            fy_mpa,
            width_mm: DEFAULT_WIDTH_MM,
            depth_mm: DEFAULT_DEPTH_MM,
            cover_mm: DEFAULT_COVER_MM,
            design_moment_knm: DEFAULT_MOMENT_KNM,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_width(mut self, width_mm: f64) -> Self {
        self.width_mm = width_mm;
        self
    }

    pub fn with_depth(mut self, depth_mm: f64) -> Self {
        self.depth_mm = depth_mm;
        self
    }

    pub fn with_cover(mut self, cover_mm: f64) -> Self {
        self.cover_mm = cover_mm;
        self
    }

    pub fn with_moment(mut self, design_moment_knm: f64) -> Self {
        self.design_moment_knm = design_moment_knm;
        self
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        positive("fck_mpa", self.fck_mpa, "Concrete strength must be positive")?;
        positive("fy_mpa", self.fy_mpa, "Steel yield strength must be positive")?;
        positive("width_mm", self.width_mm, "Width must be positive")?;
        positive("depth_mm", self.depth_mm, "Depth must be positive")?;
        validate_cover(self.cover_mm, self.depth_mm)?;
        if !self.design_moment_knm.is_finite() || self.design_moment_knm < 0.0 {
            return Err(CalcError::invalid_input(
                "design_moment_knm",
                self.design_moment_knm.to_string(),
                "Design moment must be zero or positive",
            ));
        }
        Ok(())
    }

    /// Effective depth d = h − cover
    pub fn effective_depth_mm(&self) -> f64 {
        self.depth_mm - self.cover_mm
    }
}

fn positive(field: &str, value: f64, reason: &str) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), reason));
    }
    Ok(())
}

fn validate_cover(cover_mm: f64, depth_mm: f64) -> CalcResult<()> {
    positive("cover_mm", cover_mm, "Cover must be positive")?;
    if cover_mm >= depth_mm {
        return Err(CalcError::invalid_input(
            "cover_mm",
            cover_mm.to_string(),
            format!("Cover must be less than overall depth ({} mm)", depth_mm),
        ));
    }
    Ok(())
}

/// Reinforcement state of a section, from xu against xu_lim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionState {
    UnderReinforced,
    Balanced,
    OverReinforced,
}

impl SectionState {
    pub fn classify(xu_mm: f64, xu_lim_mm: f64) -> Self {
        if xu_mm < xu_lim_mm {
            SectionState::UnderReinforced
        } else if xu_mm == xu_lim_mm {
            SectionState::Balanced
        } else {
            SectionState::OverReinforced
        }
    }

    /// Only an under-reinforced section has a moment of resistance here
    pub fn is_under_reinforced(&self) -> bool {
        matches!(self, SectionState::UnderReinforced)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SectionState::UnderReinforced => "Under-reinforced",
            SectionState::Balanced => "Balanced",
            SectionState::OverReinforced => "Over-reinforced",
        }
    }
}

impl std::fmt::Display for SectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A validated beam section with its derived design limits.
///
/// Derived values (`d`, `xu_lim`, `Mu_lim`) are computed at construction and
/// refreshed by [`BeamSection::set_cover`], so they always match the inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamSection {
    input: BeamInput,
    effective_depth_mm: f64,
    es_mpa: f64,
    xu_lim_mm: f64,
    mu_lim_knm: f64,
    /// Last required steel area from `calculate_ast_required` (unrounded)
    ast_mm2: Option<f64>,
}

impl BeamSection {
    /// Validate the input and derive the section limits.
    ///
    /// A section whose `Mu_lim` rounds to zero is rejected, since every ratio
    /// against it would be undefined.
    pub fn new(input: BeamInput) -> CalcResult<Self> {
        input.validate()?;

        let mut section = Self {
            effective_depth_mm: input.effective_depth_mm(),
            input,
            es_mpa: STEEL_MODULUS_MPA,
            xu_lim_mm: 0.0,
            mu_lim_knm: 0.0,
            ast_mm2: None,
        };
        section.refresh_limits();

        if section.mu_lim_knm <= 0.0 {
            return Err(CalcError::invalid_input(
                "depth_mm",
                section.input.depth_mm.to_string(),
                format!(
                    "Section too small: {} x {} mm gives Mu_lim = 0 kN·m",
                    section.input.width_mm, section.input.depth_mm
                ),
            ));
        }

        debug!(
            label = %section.input.label,
            d_mm = section.effective_depth_mm,
            xu_lim_mm = section.xu_lim_mm,
            mu_lim_knm = section.mu_lim_knm,
            "beam section derived"
        );
        Ok(section)
    }

    fn refresh_limits(&mut self) {
        self.xu_lim_mm = self.calculate_xu_lim();
        self.mu_lim_knm = self.calculate_mu_lim();
    }

    /// Replace the effective cover.
    ///
    /// Recomputes `d`, `xu_lim` and `Mu_lim` and clears the cached steel area.
    /// A cover rejected by [`BeamSection::new`] leaves the section untouched.
    pub fn set_cover(&mut self, cover_mm: f64) -> CalcResult<()> {
        *self = BeamSection::new(self.input.clone().with_cover(cover_mm))?;

        debug!(
            cover_mm,
            d_mm = self.effective_depth_mm,
            mu_lim_knm = self.mu_lim_knm,
            "cover updated"
        );
        Ok(())
    }

    /// Limiting neutral-axis depth for the current effective depth (mm)
    pub fn calculate_xu_lim(&self) -> f64 {
        limiting_neutral_axis_depth(self.effective_depth_mm, self.input.fy_mpa, self.es_mpa)
    }

    /// Limiting moment capacity from the stored `xu_lim` (kN·m, 2 dp)
    pub fn calculate_mu_lim(&self) -> f64 {
        let mu_lim = limiting_moment(
            self.input.fck_mpa,
            self.input.width_mm,
            self.effective_depth_mm,
            self.xu_lim_mm,
        );
        round_to(mu_lim, 2)
    }

    /// Neutral-axis depth and reinforcement state for a bar layout.
    pub fn classify_layout(&self, layout: BarLayout) -> CalcResult<(f64, SectionState)> {
        layout.validate()?;
        let xu = neutral_axis_depth(
            self.input.fy_mpa,
            layout.area_mm2(),
            self.input.fck_mpa,
            self.input.width_mm,
        );
        Ok((xu, SectionState::classify(xu, self.xu_lim_mm)))
    }

    /// Moment of resistance of the section reinforced with `layout` (kN·m, 2 dp).
    ///
    /// Fails with `OverReinforced` when `xu >= xu_lim`, and with `InvalidInput`
    /// when the layout is too light to give a non-zero moment at 2 dp.
    pub fn calculate_moment_of_resistance(&self, layout: BarLayout) -> CalcResult<f64> {
        let (xu, state) = self.classify_layout(layout)?;
        self.ensure_under_reinforced(layout, xu, state)?;

        let mor = round_to(
            under_reinforced_moment(
                self.input.fy_mpa,
                layout.area_mm2(),
                self.input.width_mm,
                self.effective_depth_mm,
                self.input.fck_mpa,
            ),
            2,
        );
        if mor <= 0.0 {
            return Err(CalcError::invalid_input(
                "dia_mm",
                layout.designation(),
                "Bar layout too small: moment of resistance is 0 kN·m",
            ));
        }
        Ok(mor)
    }

    fn ensure_under_reinforced(&self, layout: BarLayout, xu: f64, state: SectionState) -> CalcResult<()> {
        if !state.is_under_reinforced() {
            warn!(
                layout = %layout.designation(),
                xu_mm = xu,
                xu_lim_mm = self.xu_lim_mm,
                "bar layout is not under-reinforced"
            );
            return Err(CalcError::over_reinforced(
                "Moment of resistance",
                format!(
                    "{} gives xu = {:.1} mm >= xu_lim = {:.1} mm; over-reinforced section not implemented",
                    layout.designation(),
                    xu,
                    self.xu_lim_mm
                ),
            ));
        }
        Ok(())
    }

    fn ast_required_unrounded(&self) -> CalcResult<f64> {
        let mu = self.input.design_moment_knm;
        if mu > self.mu_lim_knm {
            warn!(mu_knm = mu, mu_lim_knm = self.mu_lim_knm, "design moment exceeds limiting moment");
            return Err(CalcError::over_reinforced(
                "Required steel area",
                format!(
                    "Mu = {} kN·m exceeds Mu_lim = {} kN·m; over-reinforced section not implemented, increase the section depth",
                    mu, self.mu_lim_knm
                ),
            ));
        }

        let b = self.input.width_mm;
        let d = self.effective_depth_mm;
        let alpha = moment_coefficient(mu, b, d);
        let p = required_steel_ratio(alpha, self.input.fck_mpa, self.input.fy_mpa).ok_or_else(|| {
            CalcError::over_reinforced(
                "Required steel area",
                format!(
                    "no real steel ratio: 1 - 4.598·Mu/(b·d²·fck) = {:.4} < 0",
                    steel_ratio_discriminant(alpha, self.input.fck_mpa)
                ),
            )
        })?;

        Ok(p * b * d)
    }

    /// Required tension steel area for the design moment (mm², 2 dp).
    ///
    /// Pure; see [`BeamSection::calculate_ast_required`] for the caching form.
    pub fn required_steel_area(&self) -> CalcResult<f64> {
        self.ast_required_unrounded().map(|ast| round_to(ast, 2))
    }

    /// Required tension steel area, cached into [`BeamSection::ast_mm2`].
    pub fn calculate_ast_required(&mut self) -> CalcResult<f64> {
        let ast = self.ast_required_unrounded()?;
        self.ast_mm2 = Some(ast);
        debug!(ast_mm2 = ast, "required steel area");
        Ok(round_to(ast, 2))
    }

    pub fn cover_mm(&self) -> f64 {
        self.input.cover_mm
    }

    pub fn effective_depth_mm(&self) -> f64 {
        self.effective_depth_mm
    }

    pub fn es_mpa(&self) -> f64 {
        self.es_mpa
    }

    pub fn xu_lim_mm(&self) -> f64 {
        self.xu_lim_mm
    }

    pub fn mu_lim_knm(&self) -> f64 {
        self.mu_lim_knm
    }

    /// Last cached required steel area, `None` until computed
    pub fn ast_mm2(&self) -> Option<f64> {
        self.ast_mm2
    }
}

/// Design summary for a beam section.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "effective_depth_mm": 475.0,
///   "xu_lim_mm": 227.58,
///   "mu_lim_knm": 155.8,
///   "design_moment_knm": 120.0,
///   "ast_required_mm2": 816.15,
///   "steel_ratio_percent": 0.69,
///   "moment_utilization": 0.77,
///   "concrete_grade": "M20",
///   "steel_grade": "Fe415"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDesignResult {
    pub label: String,
    /// d = h − cover (mm)
    pub effective_depth_mm: f64,
    /// Limiting neutral-axis depth (mm)
    pub xu_lim_mm: f64,
    /// Limiting moment capacity (kN·m)
    pub mu_lim_knm: f64,
    /// Design moment Mu (kN·m)
    pub design_moment_knm: f64,
    /// Required tension steel (mm²)
    pub ast_required_mm2: f64,
    /// 100·Ast/(b·d)
    pub steel_ratio_percent: f64,
    /// Mu / Mu_lim
    pub moment_utilization: f64,
    /// Standard grade matching fck, if any
    pub concrete_grade: Option<ConcreteGrade>,
    /// Standard grade matching fy, if any
    pub steel_grade: Option<SteelGrade>,
}

/// Design a singly reinforced section for its design moment.
///
/// # Example
///
/// ```rust
/// use rcc_core::calculations::rc_beam::{calculate, BeamInput};
///
/// let input = BeamInput::new(20.0, 415.0).with_width(250.0).with_moment(120.0);
/// let result = calculate(&input).unwrap();
/// assert_eq!(result.ast_required_mm2, 816.15);
/// ```
pub fn calculate(input: &BeamInput) -> CalcResult<BeamDesignResult> {
    let mut section = BeamSection::new(input.clone())?;
    let ast = section.calculate_ast_required()?;
    let b = input.width_mm;
    let d = section.effective_depth_mm();

    Ok(BeamDesignResult {
        label: input.label.clone(),
        effective_depth_mm: d,
        xu_lim_mm: round_to(section.xu_lim_mm(), 2),
        mu_lim_knm: section.mu_lim_knm(),
        design_moment_knm: input.design_moment_knm,
        ast_required_mm2: ast,
        steel_ratio_percent: round_to(100.0 * ast / (b * d), 2),
        moment_utilization: round_to(input.design_moment_knm / section.mu_lim_knm(), 2),
        concrete_grade: ConcreteGrade::from_fck(input.fck_mpa),
        steel_grade: SteelGrade::from_fy(input.fy_mpa),
    })
}

/// Capacity check of a bar layout against the design moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutCheckResult {
    pub layout: BarLayout,
    /// Provided steel area (mm²)
    pub ast_provided_mm2: f64,
    /// Neutral-axis depth for the provided steel (mm)
    pub xu_mm: f64,
    pub xu_lim_mm: f64,
    /// Moment of resistance (kN·m)
    pub moment_of_resistance_knm: f64,
    pub design_moment_knm: f64,
    /// Mu / MoR
    pub utilization: f64,
}

impl LayoutCheckResult {
    /// MoR is at least the design moment
    pub fn adequate(&self) -> bool {
        self.moment_of_resistance_knm >= self.design_moment_knm
    }
}

/// Check a bar layout: moment of resistance against the design moment.
pub fn check_layout(input: &BeamInput, layout: BarLayout) -> CalcResult<LayoutCheckResult> {
    let section = BeamSection::new(input.clone())?;
    let mor = section.calculate_moment_of_resistance(layout)?;
    let (xu, _) = section.classify_layout(layout)?;

    Ok(LayoutCheckResult {
        layout,
        ast_provided_mm2: round_to(layout.area_mm2(), 2),
        xu_mm: round_to(xu, 2),
        xu_lim_mm: round_to(section.xu_lim_mm(), 2),
        moment_of_resistance_knm: mor,
        design_moment_knm: input.design_moment_knm,
        utilization: round_to(input.design_moment_knm / mor, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// fck=20, fy=415, b=250, h=500, Mu=120 (d = 475)
    fn test_input() -> BeamInput {
        BeamInput::new(20.0, 415.0)
            .with_width(250.0)
            .with_depth(500.0)
            .with_moment(120.0)
    }

    fn test_beam() -> BeamSection {
        BeamSection::new(test_input()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let input = BeamInput::new(20.0, 415.0);
        assert_eq!(input.width_mm, 300.0);
        assert_eq!(input.depth_mm, 500.0);
        assert_eq!(input.cover_mm, 25.0);
        assert_eq!(input.design_moment_knm, 100.0);

        let beam = BeamSection::new(input).unwrap();
        assert_eq!(beam.effective_depth_mm(), 475.0);
        assert_eq!(beam.es_mpa(), 200_000.0);
        assert!(beam.ast_mm2().is_none());
    }

    #[test]
    fn test_derived_limits() {
        let beam = test_beam();
        assert!((beam.xu_lim_mm() - 227.576).abs() < 0.001);
        assert_eq!(beam.mu_lim_knm(), 155.8);
        assert_eq!(beam.calculate_mu_lim(), beam.mu_lim_knm());
    }

    #[test]
    fn test_ast_required() {
        let mut beam = test_beam();
        let ast = beam.calculate_ast_required().unwrap();
        assert_eq!(ast, 816.15);
        let cached = beam.ast_mm2().unwrap();
        assert!((cached - 816.152).abs() < 0.001);
    }

    #[test]
    fn test_required_steel_area_is_pure() {
        let beam = test_beam();
        let first = beam.required_steel_area().unwrap();
        let second = beam.required_steel_area().unwrap();
        assert_eq!(first, second);
        assert!(beam.ast_mm2().is_none());
    }

    #[test]
    fn test_over_reinforced_design_moment() {
        let mut beam = BeamSection::new(test_input().with_moment(160.0)).unwrap();
        let err = beam.calculate_ast_required().unwrap_err();
        assert_eq!(err.error_code(), "OVER_REINFORCED");
        assert!(beam.ast_mm2().is_none());
    }

    #[test]
    fn test_moment_equal_to_limit_is_accepted() {
        let beam = test_beam();
        let at_limit = BeamSection::new(test_input().with_moment(beam.mu_lim_knm())).unwrap();
        let ast = at_limit.required_steel_area().unwrap();
        assert!(ast > 816.15);

        let above = BeamSection::new(test_input().with_moment(beam.mu_lim_knm() + 0.01)).unwrap();
        assert!(above.required_steel_area().is_err());
    }

    #[test]
    fn test_zero_moment() {
        let beam = BeamSection::new(test_input().with_moment(0.0)).unwrap();
        assert_eq!(beam.required_steel_area().unwrap(), 0.0);
    }

    #[test]
    fn test_moment_of_resistance_under_reinforced() {
        let beam = test_beam();
        let mor = beam.calculate_moment_of_resistance(BarLayout::default()).unwrap();
        assert_eq!(mor, 92.54);

        let (xu, state) = beam.classify_layout(BarLayout::default()).unwrap();
        assert!((xu - 120.989).abs() < 0.001);
        assert_eq!(state, SectionState::UnderReinforced);
    }

    #[test]
    fn test_moment_of_resistance_over_reinforced() {
        // 4-20Ø on b = 250: xu = 252.1 mm > xu_lim = 227.6 mm
        let beam = test_beam();
        let layout = BarLayout::new(4, 20.0);
        assert_eq!(beam.classify_layout(layout).unwrap().1, SectionState::OverReinforced);

        let err = beam.calculate_moment_of_resistance(layout).unwrap_err();
        assert!(matches!(err, CalcError::OverReinforced { .. }));
    }

    #[test]
    fn test_moment_of_resistance_invalid_layout() {
        let beam = test_beam();
        let err = beam.calculate_moment_of_resistance(BarLayout::new(0, 16.0)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "count"));
    }

    #[test]
    fn test_set_cover_refreshes_limits() {
        let mut beam = test_beam();
        beam.calculate_ast_required().unwrap();

        beam.set_cover(50.0).unwrap();
        assert_eq!(beam.cover_mm(), 50.0);
        assert_eq!(beam.effective_depth_mm(), 450.0);
        assert!((beam.xu_lim_mm() - 215.598).abs() < 0.001);
        assert_eq!(beam.mu_lim_knm(), 139.83);
        assert!(beam.ast_mm2().is_none());

        // Same as constructing with that cover directly
        let fresh = BeamSection::new(test_input().with_cover(50.0)).unwrap();
        assert_eq!(beam, fresh);
        assert_eq!(beam.calculate_ast_required().unwrap(), 882.18);
    }

    #[test]
    fn test_set_cover_rejects_invalid() {
        let mut beam = test_beam();
        let before = beam.clone();
        assert!(beam.set_cover(500.0).is_err());
        assert!(beam.set_cover(0.0).is_err());
        assert!(beam.set_cover(-10.0).is_err());
        assert_eq!(beam, before);
    }

    #[test]
    fn test_set_cover_rejects_zero_capacity() {
        let mut beam = test_beam();
        let before = beam.clone();
        let err = beam.set_cover(499.9).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "depth_mm"));
        assert_eq!(beam, before);
    }

    #[test]
    fn test_balanced_state() {
        assert_eq!(SectionState::classify(227.5, 227.5), SectionState::Balanced);
        assert_eq!(SectionState::classify(227.4, 227.5), SectionState::UnderReinforced);
        assert_eq!(SectionState::classify(227.6, 227.5), SectionState::OverReinforced);
        assert!(SectionState::UnderReinforced.is_under_reinforced());
        assert!(!SectionState::Balanced.is_under_reinforced());
        assert!(!SectionState::OverReinforced.is_under_reinforced());
    }

    #[test]
    fn test_balanced_layout_has_no_moment_of_resistance() {
        let beam = test_beam();
        let layout = BarLayout::default();
        let xu_lim = beam.xu_lim_mm();

        let err = beam
            .ensure_under_reinforced(layout, xu_lim, SectionState::classify(xu_lim, xu_lim))
            .unwrap_err();
        assert_eq!(err.error_code(), "OVER_REINFORCED");
        assert!(beam
            .ensure_under_reinforced(layout, 120.99, SectionState::UnderReinforced)
            .is_ok());
    }

    #[test]
    fn test_zero_capacity_section_is_rejected() {
        // b = 1, h = 30: Mu_lim rounds to 0.00 kN·m
        let tiny = BeamInput::new(20.0, 415.0).with_width(1.0).with_depth(30.0).with_moment(0.0);
        let err = calculate(&tiny).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "depth_mm"));
        assert!(check_layout(&tiny, BarLayout::default()).is_err());
    }

    #[test]
    fn test_zero_capacity_layout_is_rejected() {
        let err = check_layout(&test_input().with_moment(50.0), BarLayout::new(1, 0.1)).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "dia_mm"));
    }

    #[test]
    fn test_ratios_are_finite() {
        let result = calculate(&test_input().with_moment(0.0)).unwrap();
        assert_eq!(result.moment_utilization, 0.0);
        assert!(result.steel_ratio_percent.is_finite());

        let light = check_layout(&test_input().with_moment(1.0), BarLayout::new(1, 6.0)).unwrap();
        assert!(light.utilization.is_finite());
        let json = serde_json::to_string(&light).unwrap();
        let roundtrip: LayoutCheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(light, roundtrip);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(BeamSection::new(BeamInput::new(0.0, 415.0)).is_err());
        assert!(BeamSection::new(BeamInput::new(20.0, -415.0)).is_err());
        assert!(BeamSection::new(BeamInput::new(20.0, 415.0).with_width(0.0)).is_err());
        assert!(BeamSection::new(BeamInput::new(20.0, 415.0).with_depth(f64::NAN)).is_err());
        assert!(BeamSection::new(BeamInput::new(20.0, 415.0).with_depth(20.0)).is_err());
        assert!(BeamSection::new(BeamInput::new(20.0, 415.0).with_moment(-1.0)).is_err());
    }

    #[test]
    fn test_calculate_summary() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.effective_depth_mm, 475.0);
        assert_eq!(result.xu_lim_mm, 227.58);
        assert_eq!(result.mu_lim_knm, 155.8);
        assert_eq!(result.ast_required_mm2, 816.15);
        assert_eq!(result.steel_ratio_percent, 0.69);
        assert_eq!(result.moment_utilization, 0.77);
        assert_eq!(result.concrete_grade, Some(ConcreteGrade::M20));
        assert_eq!(result.steel_grade, Some(SteelGrade::Fe415));
    }

    #[test]
    fn test_check_layout() {
        let input = test_input().with_moment(80.0);
        let result = check_layout(&input, BarLayout::default()).unwrap();
        assert_eq!(result.ast_provided_mm2, 603.19);
        assert_eq!(result.xu_mm, 120.99);
        assert_eq!(result.moment_of_resistance_knm, 92.54);
        assert!(result.adequate());

        let short = check_layout(&test_input(), BarLayout::default()).unwrap();
        assert!(!short.adequate());
        assert!(short.utilization > 1.0);
    }

    #[test]
    fn test_input_json_defaults() {
        let json = r#"{ "fck_mpa": 25.0, "fy_mpa": 500.0 }"#;
        let input: BeamInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.label, "B-1");
        assert_eq!(input, BeamInput::new(25.0, 500.0));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&test_input()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("ast_required_mm2"));
        assert!(json.contains("\"M20\""));

        let roundtrip: BeamDesignResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }

    proptest! {
        #[test]
        fn prop_ast_increases_with_moment(mu in 1.0f64..150.0, step in 1.0f64..5.0) {
            let low = BeamSection::new(test_input().with_moment(mu)).unwrap();
            let high = BeamSection::new(test_input().with_moment(mu + step)).unwrap();
            let ast_low = low.required_steel_area().unwrap();
            let ast_high = high.required_steel_area().unwrap();
            prop_assert!(ast_high > ast_low, "Ast({}) = {} vs Ast({}) = {}", mu + step, ast_high, mu, ast_low);
        }
    }
}
