//! Member carousel: a 3-wide window over the fixed roster.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use showcase_core::models::MemberRecord;

use crate::messages::Message;
use crate::model::App;
use crate::theme;

pub fn view(app: &App) -> Element<'static, Message> {
    if app.roster.is_empty() {
        return Space::new().height(0).into();
    }

    // Arrows stay clickable at the boundary; the step itself no-ops
    // there. Dimming only mirrors proximity to the boundary.
    let left = button(
        text("❮")
            .size(28)
            .color(theme::arrow_color(app.carousel.left_dim())),
    )
    .on_press(Message::StepLeft)
    .style(theme::arrow_button)
    .padding(8);

    let right = button(
        text("❯")
            .size(28)
            .color(theme::arrow_color(app.carousel.right_dim())),
    )
    .on_press(Message::StepRight)
    .style(theme::arrow_button)
    .padding(8);

    let mut cards = row![].spacing(16);
    for index in app.carousel.visible_range() {
        cards = cards.push(member_card(&app.roster[index]));
    }

    column![
        text("メンバー作品").size(24),
        row![left, cards, right].spacing(12).align_y(Alignment::Center),
    ]
    .spacing(14)
    .into()
}

fn member_card(member: &MemberRecord) -> Element<'static, Message> {
    let watch_url = format!("https://www.youtube.com/watch?v={}", member.youtube_id);

    container(
        column![
            container(text("▶ YouTube").size(12))
                .style(theme::embed_well)
                .padding(20)
                .width(Length::Fill),
            button(text(member.title.clone()).size(16))
                .on_press(Message::CopyLink(watch_url))
                .style(theme::link_button)
                .padding(0),
            text(member.creator.clone())
                .size(13)
                .color(theme::TEXT_SECONDARY),
            text(member.description.clone())
                .size(12)
                .color(theme::TEXT_SECONDARY),
        ]
        .spacing(6),
    )
    .style(theme::card)
    .padding(14)
    .width(Length::Fixed(250.0))
    .into()
}
