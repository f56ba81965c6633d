//! # Materials Database
//!
//! Concrete and reinforcing steel grades for limit-state design, plus bar
//! layouts for tension reinforcement.
//!
//! ## Example
//!
//! ```rust
//! use rcc_core::materials::{BarLayout, ConcreteGrade, SteelGrade};
//!
//! let fck = ConcreteGrade::M20.fck_mpa();
//! let fy = SteelGrade::Fe415.fy_mpa();
//! let steel = BarLayout::new(4, 20.0).area_mm2();
//! println!("fck = {} MPa, fy = {} MPa, Ast = {:.0} mm²", fck, fy, steel);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::ConcreteGrade;
pub use steel::{BarLayout, SteelGrade, STEEL_MODULUS_MPA};
