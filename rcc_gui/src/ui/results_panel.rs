//! Results Panel (Right)
//!
//! Shows the required steel area and limiting moment after a successful
//! calculation, or the error message when the form or the core rejected it.

use iced::widget::{column, container, text, Column, Space};
use iced::{Element, Length};

use rcc_core::calculations::rc_beam::BeamDesignResult;
use rcc_core::errors::CalcError;

use crate::Message;

/// Render the results panel for the last calculation outcome
pub fn view_results_panel(
    outcome: Option<&Result<BeamDesignResult, CalcError>>,
) -> Element<'_, Message> {
    let content: Column<'_, Message> = match outcome {
        None => column![
            text("Enter the section and press Calculate").size(12).color([0.5, 0.5, 0.5])
        ],
        Some(Ok(result)) => view_result(result),
        Some(Err(error)) => view_error(error),
    };

    container(content.padding(8))
        .width(Length::FillPortion(45))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_result(result: &BeamDesignResult) -> Column<'_, Message> {
    column![
        text("Results").size(14),
        Space::new().height(8),
        text(format!("Required Area of Steel (mm²): {}", result.ast_required_mm2)).size(13),
        text(format!("Design Moment Limit (kN·m): {}", result.mu_lim_knm)).size(13),
        Space::new().height(8),
        text(format!("d = {:.0} mm, xu,lim = {:.2} mm", result.effective_depth_mm, result.xu_lim_mm))
            .size(10)
            .color([0.5, 0.5, 0.5]),
        text(format!(
            "pt = {:.2}%, Mu/Mu,lim = {:.2}",
            result.steel_ratio_percent, result.moment_utilization
        ))
        .size(10)
        .color([0.5, 0.5, 0.5]),
    ]
    .spacing(4)
}

fn view_error(error: &CalcError) -> Column<'_, Message> {
    let title = match error {
        CalcError::InvalidInput { .. } => "Invalid Input",
        CalcError::OverReinforced { .. } => "Not Implemented",
    };

    column![
        text(title).size(14),
        Space::new().height(8),
        text(error.to_string()).size(12).color([0.8, 0.2, 0.2]),
    ]
}
