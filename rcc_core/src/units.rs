//! # Unit Types
//!
//! Type-safe wrappers for the moment units used in IS 456 flexural design.
//! Each wrapper is a plain `f64` newtype that serializes as a bare number.
//!
//! Section inputs are always mm, MPa and kN·m and are never converted. The
//! wrappers only make the N·mm to kN·m step inside the moment formulas
//! explicit.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::units::{KnM, NMm};
//!
//! let moment: KnM = NMm(120.0e6).into();
//! assert!((moment.0 - 120.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// N·mm per kN·m
const NMM_PER_KNM: f64 = 1.0e6;

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / NMM_PER_KNM)
    }
}

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * NMM_PER_KNM)
    }
}

macro_rules! impl_value {
    ($type:ty) => {
        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_value!(NMm);
impl_value!(KnM);
