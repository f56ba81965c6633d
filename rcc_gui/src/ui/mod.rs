//! UI module for the RCC beam GUI
//!
//! # Panel Structure
//! - `toolbar` - Title header
//! - `input_panel` - Left: the five form fields and the Calculate button
//! - `results_panel` - Right: design outputs or the error message
//! - `status_bar` - Bottom status message

pub mod input_panel;
pub mod results_panel;
pub mod status_bar;
pub mod toolbar;
