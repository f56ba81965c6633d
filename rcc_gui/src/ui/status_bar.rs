//! Status Bar (Bottom)

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar(status: &str) -> Element<'_, Message> {
    row![
        text(format!("rcc_gui {}", env!("CARGO_PKG_VERSION"))).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
