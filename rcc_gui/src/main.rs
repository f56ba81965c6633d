//! # RCC Beam GUI Application
//!
//! Desktop form for singly reinforced beam design, built with Iced.
//! Five numeric inputs, one Calculate action, and a results panel showing
//! the required steel area and the limiting moment.

mod ui;

use iced::widget::{column, row, rule};
use iced::{Element, Length};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rcc_core::calculations::rc_beam::{calculate, BeamDesignResult};
use rcc_core::errors::CalcError;
use rcc_core::form::DesignForm;

/// Form field edits and actions
#[derive(Debug, Clone)]
pub enum Message {
    FckChanged(String),
    FyChanged(String),
    WidthChanged(String),
    DepthChanged(String),
    MomentChanged(String),
    Calculate,
}

/// Application state
pub struct App {
    pub form: DesignForm,
    /// Outcome of the last Calculate press
    pub outcome: Option<Result<BeamDesignResult, CalcError>>,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: DesignForm::default(),
            outcome: None,
            status: "Ready".to_string(),
        }
    }
}

impl App {
    fn update(&mut self, message: Message) {
        match message {
            Message::FckChanged(value) => self.form.fck = value,
            Message::FyChanged(value) => self.form.fy = value,
            Message::WidthChanged(value) => self.form.width = value,
            Message::DepthChanged(value) => self.form.depth = value,
            Message::MomentChanged(value) => self.form.moment = value,
            Message::Calculate => self.calculate(),
        }
    }

    /// Parse the form and run the design; every failure becomes a message.
    fn calculate(&mut self) {
        let outcome = self.form.parse().and_then(|input| calculate(&input));

        self.status = match &outcome {
            Ok(result) => {
                tracing::info!(
                    ast_mm2 = result.ast_required_mm2,
                    mu_lim_knm = result.mu_lim_knm,
                    "design calculated"
                );
                if let Ok(json) = serde_json::to_string(result) {
                    tracing::debug!(%json, "design result");
                }
                "Calculated".to_string()
            }
            Err(e) => {
                tracing::warn!(code = e.error_code(), error = %e, "design rejected");
                format!("Error: {}", e.error_code())
            }
        };
        self.outcome = Some(outcome);
    }

    fn view(&self) -> Element<'_, Message> {
        column![
            ui::toolbar::view_header(),
            rule::horizontal(1),
            row![
                ui::input_panel::view_input_panel(&self.form),
                ui::results_panel::view_results_panel(self.outcome.as_ref()),
            ]
            .spacing(8)
            .height(Length::Fill),
            rule::horizontal(1),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .spacing(6)
        .padding(10)
        .into()
    }
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rcc_core=info,rcc_gui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting RCC Beam Design App");

    iced::application(App::default, App::update, App::view)
        .title("RCC Beam Design App")
        .window_size((720.0, 360.0))
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_with_default_form() {
        let mut app = App::default();
        app.update(Message::Calculate);
        let result = app.outcome.unwrap().unwrap();
        assert_eq!(result.ast_required_mm2, 816.15);
        assert_eq!(result.mu_lim_knm, 155.8);
    }

    #[test]
    fn test_non_numeric_input_is_reported() {
        let mut app = App::default();
        app.update(Message::WidthChanged("wide".to_string()));
        app.update(Message::Calculate);
        assert_eq!(app.status, "Error: INVALID_INPUT");
        assert!(matches!(app.outcome, Some(Err(CalcError::InvalidInput { .. }))));
    }

    #[test]
    fn test_over_reinforced_is_reported() {
        let mut app = App::default();
        app.update(Message::MomentChanged("200".to_string()));
        app.update(Message::Calculate);
        assert_eq!(app.status, "Error: OVER_REINFORCED");
        assert!(matches!(app.outcome, Some(Err(CalcError::OverReinforced { .. }))));
    }
}
