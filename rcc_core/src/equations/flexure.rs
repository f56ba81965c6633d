//! # Singly Reinforced Rectangular Section Formulas
//!
//! Limit-state flexure formulas for a rectangular section with tension steel
//! only, per IS 456:2000 Annex G. All lengths in mm, stresses in MPa, areas
//! in mm², moments in kN·m unless stated otherwise.
//!
//! ## Notation
//!
//! - `fck` = Characteristic compressive strength of concrete
//! - `fy` = Yield strength of reinforcement
//! - `Es` = Modulus of elasticity of steel
//! - `b` = Width of section
//! - `d` = Effective depth (compression face to tension steel centroid)
//! - `xu` = Neutral-axis depth
//! - `xu_lim` = Limiting neutral-axis depth
//! - `Ast` = Area of tension steel
//!
//! ## Stress Block
//!
//! ```text
//!     ┌─────────┐ ─┬─  0.36·fck·b·xu  (compression resultant)
//!     │▓▓▓▓▓▓▓▓▓│  │ 0.416·xu to resultant
//!     │─ ─ ─ ─ ─│ ─┴─ neutral axis at xu
//!   d │         │
//!     │  ● ● ●  │ ──── 0.87·fy·Ast  (tension resultant)
//!     └─────────┘
//!          b
//! ```
//!
//! ## References
//!
//! - IS 456:2000 Clause 38.1 and Annex G-1.1
//! - SP 16: Design Aids for Reinforced Concrete to IS 456

use std::f64::consts::PI;

use crate::units::{KnM, NMm};

/// Ultimate compressive strain in concrete in bending (IS 456 Cl. 38.1 e)
pub const CONCRETE_ULTIMATE_STRAIN: f64 = 0.0035;

/// Partial safety factor applied to steel yield: design stress = 0.87·fy
pub const STEEL_DESIGN_FACTOR: f64 = 0.87;

/// Average compressive stress of the stress block as a fraction of fck·b·xu
pub const STRESS_BLOCK_FACTOR: f64 = 0.36;

/// Depth of the compression resultant below the top fibre, as a fraction of xu
pub const STRESS_BLOCK_CENTROID: f64 = 0.416;

/// Coefficient of the required steel ratio formula (4/0.87, from solving the MoR equation for Ast)
pub const STEEL_RATIO_COEFFICIENT: f64 = 4.598;

/// Limiting neutral-axis depth for a balanced section.
///
/// # Formula
/// xu_lim = 0.0035·d / (0.0055 + 0.87·fy/Es)
///
/// # Example
/// ```rust
/// use rcc_core::equations::flexure::limiting_neutral_axis_depth;
///
/// let xu_lim = limiting_neutral_axis_depth(475.0, 415.0, 200_000.0);
/// assert!((xu_lim - 227.576).abs() < 0.001);
/// ```
#[inline]
pub fn limiting_neutral_axis_depth(d: f64, fy: f64, es: f64) -> f64 {
    (CONCRETE_ULTIMATE_STRAIN * d) / (0.0055 + STEEL_DESIGN_FACTOR * fy / es)
}

/// Limiting moment of resistance of a singly reinforced section (kN·m, unrounded).
///
/// # Formula
/// Mu_lim = 0.36·fck·b·xu_lim·(d − 0.416·xu_lim)
#[inline]
pub fn limiting_moment(fck: f64, b: f64, d: f64, xu_lim: f64) -> f64 {
    let nmm = STRESS_BLOCK_FACTOR * fck * b * xu_lim * (d - STRESS_BLOCK_CENTROID * xu_lim);
    KnM::from(NMm(nmm)).value()
}

/// Cross-sectional area of `n` round bars of diameter `dia` (mm²)
///
/// # Formula
/// Ast = n·π·dia²/4
#[inline]
pub fn bar_area(n: u32, dia: f64) -> f64 {
    f64::from(n) * PI * dia.powi(2) / 4.0
}

/// Actual neutral-axis depth from force equilibrium 0.87·fy·Ast = 0.36·fck·b·xu
#[inline]
pub fn neutral_axis_depth(fy: f64, ast: f64, fck: f64, b: f64) -> f64 {
    STEEL_DESIGN_FACTOR * fy * ast / (STRESS_BLOCK_FACTOR * fck * b)
}

/// Moment of resistance of an under-reinforced section (kN·m, unrounded).
///
/// Only valid when `xu < xu_lim`; callers check that first.
///
/// # Formula
/// MoR = 0.87·fy·Ast·d·(1 − Ast·fy/(b·d·fck))
#[inline]
pub fn under_reinforced_moment(fy: f64, ast: f64, b: f64, d: f64, fck: f64) -> f64 {
    let nmm = STEEL_DESIGN_FACTOR * fy * ast * d * (1.0 - ast * fy / (b * d * fck));
    KnM::from(NMm(nmm)).value()
}

/// Moment coefficient alpha = Mu/(b·d²) in N/mm², with Mu in kN·m
#[inline]
pub fn moment_coefficient(mu_knm: f64, b: f64, d: f64) -> f64 {
    NMm::from(KnM(mu_knm)).value() / (b * d.powi(2))
}

/// Term under the square root of the steel ratio formula: 1 − 4.598·alpha/fck
#[inline]
pub fn steel_ratio_discriminant(alpha: f64, fck: f64) -> f64 {
    1.0 - STEEL_RATIO_COEFFICIENT * alpha / fck
}

/// Required tension steel ratio p = Ast/(b·d) for moment coefficient `alpha`.
///
/// Returns `None` when the discriminant is negative, i.e. the moment cannot
/// be carried by tension steel alone.
///
/// # Formula
/// p = (1 − √(1 − 4.598·alpha/fck))·fck/(2·fy)
pub fn required_steel_ratio(alpha: f64, fck: f64, fy: f64) -> Option<f64> {
    let disc = steel_ratio_discriminant(alpha, fck);
    if disc < 0.0 {
        return None;
    }
    Some((1.0 - disc.sqrt()) * fck / (2.0 * fy))
}

/// Round to `places` decimal places, half away from zero
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.01;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_limiting_neutral_axis_depth() {
        // 0.0035 * 475 / (0.0055 + 0.87 * 415 / 200000) = 227.576
        let xu_lim = limiting_neutral_axis_depth(475.0, 415.0, 200_000.0);
        assert!(approx_eq(xu_lim, 227.576), "xu_lim = {}", xu_lim);
    }

    #[test]
    fn test_xu_lim_ratio_matches_code_table() {
        // IS 456 Cl. 38.1 note: xu_max/d = 0.53, 0.48, 0.46 for Fe250/415/500
        let d = 1000.0;
        assert!((limiting_neutral_axis_depth(d, 250.0, 200_000.0) / d - 0.53).abs() < 0.005);
        assert!((limiting_neutral_axis_depth(d, 415.0, 200_000.0) / d - 0.48).abs() < 0.005);
        assert!((limiting_neutral_axis_depth(d, 500.0, 200_000.0) / d - 0.46).abs() < 0.005);
    }

    #[test]
    fn test_limiting_moment() {
        let xu_lim = limiting_neutral_axis_depth(475.0, 415.0, 200_000.0);
        let mu_lim = limiting_moment(20.0, 250.0, 475.0, xu_lim);
        assert!(approx_eq(mu_lim, 155.797), "Mu_lim = {}", mu_lim);
    }

    #[test]
    fn test_bar_area() {
        // 3 bars of 16 mm: 3 * pi * 256 / 4 = 603.19
        assert!(approx_eq(bar_area(3, 16.0), 603.186));
        assert_eq!(bar_area(0, 16.0), 0.0);
    }

    #[test]
    fn test_neutral_axis_depth() {
        let xu = neutral_axis_depth(415.0, bar_area(3, 16.0), 20.0, 250.0);
        assert!(approx_eq(xu, 120.989), "xu = {}", xu);
    }

    #[test]
    fn test_under_reinforced_moment() {
        let mor = under_reinforced_moment(415.0, bar_area(3, 16.0), 250.0, 475.0, 20.0);
        assert!((round_to(mor, 2) - 92.54).abs() < 1e-9, "MoR = {}", mor);
    }

    #[test]
    fn test_moment_coefficient() {
        // 120e6 / (250 * 475^2) = 2.1274
        let alpha = moment_coefficient(120.0, 250.0, 475.0);
        assert!(approx_eq(alpha, 2.1274), "alpha = {}", alpha);
    }

    #[test]
    fn test_required_steel_ratio() {
        let alpha = moment_coefficient(120.0, 250.0, 475.0);
        let p = required_steel_ratio(alpha, 20.0, 415.0).unwrap();
        let ast = p * 250.0 * 475.0;
        assert!(approx_eq(ast, 816.152), "Ast = {}", ast);
    }

    #[test]
    fn test_required_steel_ratio_negative_discriminant() {
        // alpha large enough that 4.598 * alpha / fck > 1
        assert!(required_steel_ratio(5.0, 20.0, 415.0).is_none());
    }

    #[test]
    fn test_zero_moment_needs_no_steel() {
        assert_eq!(required_steel_ratio(0.0, 20.0, 415.0), Some(0.0));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(155.79653, 2), 155.8);
        assert_eq!(round_to(816.1519, 2), 816.15);
        assert_eq!(round_to(-1.005_1, 2), -1.01);
    }
}
