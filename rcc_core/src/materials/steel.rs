//! Reinforcing Steel (IS 1786 grades) and Bar Layouts
//!
//! Grades of high-strength deformed bars plus mild steel Fe250. The number
//! after `Fe` is the characteristic yield strength fy (MPa).

use serde::{Deserialize, Serialize};

use crate::equations::flexure::bar_area;
use crate::errors::{CalcError, CalcResult};

/// Modulus of elasticity of steel Es (IS 456 Cl. 5.6.3)
pub const STEEL_MODULUS_MPA: f64 = 200_000.0;

/// Reinforcing steel grade designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    Fe250,
    Fe415,
    Fe500,
    Fe550,
}

impl SteelGrade {
    /// All steel grades for UI selection
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::Fe250,
        SteelGrade::Fe415,
        SteelGrade::Fe500,
        SteelGrade::Fe550,
    ];

    /// Characteristic yield strength fy (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::Fe250 => 250.0,
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
            SteelGrade::Fe550 => 550.0,
        }
    }

    /// Find the standard grade with exactly this fy, if any
    pub fn from_fy(fy_mpa: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.fy_mpa() == fy_mpa)
    }

    /// Parse from common string representations ("Fe415", "FE 415", "fe-415")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|g| g.display_name().to_uppercase() == normalized)
            .ok_or_else(|| CalcError::invalid_input("steel_grade", s, "Unknown steel grade"))
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Fe250 => "Fe250",
            SteelGrade::Fe415 => "Fe415",
            SteelGrade::Fe500 => "Fe500",
            SteelGrade::Fe550 => "Fe550",
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A group of equal-diameter tension bars in one layer.
///
/// ## JSON Example
///
/// ```json
/// { "count": 3, "dia_mm": 16.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    /// Number of bars
    pub count: u32,
    /// Bar diameter in mm
    pub dia_mm: f64,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            count: 3,
            dia_mm: 16.0,
        }
    }
}

impl BarLayout {
    pub fn new(count: u32, dia_mm: f64) -> Self {
        Self { count, dia_mm }
    }

    /// Validate bar count and diameter.
    pub fn validate(&self) -> CalcResult<()> {
        if self.count == 0 {
            return Err(CalcError::invalid_input(
                "count",
                self.count.to_string(),
                "Number of bars must be at least 1",
            ));
        }
        if !self.dia_mm.is_finite() || self.dia_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "dia_mm",
                self.dia_mm.to_string(),
                "Bar diameter must be positive",
            ));
        }
        Ok(())
    }

    /// Total steel area n·π·dia²/4 (mm²)
    pub fn area_mm2(&self) -> f64 {
        bar_area(self.count, self.dia_mm)
    }

    /// Drawing notation, e.g. "3-16Ø"
    pub fn designation(&self) -> String {
        format!("{}-{}Ø", self.count, self.dia_mm)
    }
}
