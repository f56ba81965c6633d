//! Concrete Grades (IS 456:2000 Table 2)
//!
//! Standard grades of ordinary and standard concrete. The number after `M` is
//! the characteristic compressive strength of 150 mm cubes at 28 days (MPa).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete grade designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    M15,
    M20,
    M25,
    M30,
    M35,
    M40,
}

impl ConcreteGrade {
    /// All concrete grades for UI selection
    pub const ALL: [ConcreteGrade; 6] = [
        ConcreteGrade::M15,
        ConcreteGrade::M20,
        ConcreteGrade::M25,
        ConcreteGrade::M30,
        ConcreteGrade::M35,
        ConcreteGrade::M40,
    ];

    /// Characteristic compressive strength fck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::M15 => 15.0,
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
            ConcreteGrade::M35 => 35.0,
            ConcreteGrade::M40 => 40.0,
        }
    }

    /// Find the standard grade with exactly this fck, if any
    pub fn from_fck(fck_mpa: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.fck_mpa() == fck_mpa)
    }

    /// Parse from common string representations ("M20", "m 20", "M-20")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase().replace([' ', '-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|g| g.display_name() == normalized)
            .ok_or_else(|| CalcError::invalid_input("concrete_grade", s, "Unknown concrete grade"))
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ConcreteGrade::M15 => "M15",
            ConcreteGrade::M20 => "M20",
            ConcreteGrade::M25 => "M25",
            ConcreteGrade::M30 => "M30",
            ConcreteGrade::M35 => "M35",
            ConcreteGrade::M40 => "M40",
        }
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fck_values() {
        assert_eq!(ConcreteGrade::M20.fck_mpa(), 20.0);
        assert_eq!(ConcreteGrade::M40.fck_mpa(), 40.0);
    }

    #[test]
    fn test_from_fck() {
        assert_eq!(ConcreteGrade::from_fck(25.0), Some(ConcreteGrade::M25));
        assert_eq!(ConcreteGrade::from_fck(22.5), None);
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(ConcreteGrade::from_str_flexible("m20").unwrap(), ConcreteGrade::M20);
        assert_eq!(ConcreteGrade::from_str_flexible(" M-30 ").unwrap(), ConcreteGrade::M30);
        assert!(ConcreteGrade::from_str_flexible("M99").is_err());
    }
}
