//! Input Panel (Left)
//!
//! The five design form fields and the Calculate button. Cover is not a
//! field; the core applies its default.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use rcc_core::form::DesignForm;

use crate::Message;

/// Render the input form
pub fn view_input_panel(form: &DesignForm) -> Element<'_, Message> {
    let fields = column![
        text("Section").size(14),
        Space::new().height(8),
        labeled_input("Concrete Grade (fck) (MPa):", &form.fck, Message::FckChanged),
        labeled_input("Steel Grade (fy) (MPa):", &form.fy, Message::FyChanged),
        labeled_input("Width of Beam (mm):", &form.width, Message::WidthChanged),
        labeled_input("Depth of Beam (mm):", &form.depth, Message::DepthChanged),
        labeled_input("Design Moment (kNm):", &form.moment, Message::MomentChanged),
        Space::new().height(10),
        button(text("Calculate").size(12))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 16]))
            .style(button::primary),
    ]
    .spacing(6);

    container(fields.padding(8))
        .width(Length::FillPortion(55))
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(170.0)),
        text_input("", value)
            .on_input(on_change)
            .on_submit(Message::Calculate)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
