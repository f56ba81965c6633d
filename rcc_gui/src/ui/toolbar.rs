//! Header row

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the application header with title
pub fn view_header() -> Element<'static, Message> {
    row![
        text("RCC Beam Design").size(24),
        Space::new().width(Length::Fill),
        text("IS 456 Limit State").size(12).color([0.5, 0.5, 0.5]),
    ]
    .align_y(Alignment::Center)
    .into()
}
