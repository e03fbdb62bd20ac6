//! Dual-lane showcase sections.
//!
//! Each section renders its plan into two parallel lanes; both follow
//! the same shuffled order, each lane with its own fresh card widgets,
//! which is what lets the style layer mirror one lane over the other
//! for the seamless-loop effect.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length};

use showcase_core::cards::{resolve_site_url, Card};
use showcase_core::showcase::ShowcasePlan;

use crate::messages::Message;
use crate::model::App;
use crate::theme;

/// One showcase section: heading plus two parallel lanes.
pub fn section<'a>(app: &App, title: &'a str, plan: &ShowcasePlan) -> Element<'a, Message> {
    if plan.is_empty() {
        // Feed not resolved (or failed): the section stays empty.
        return Space::new().height(0).into();
    }

    column![
        text(title).size(24).color(theme::TEXT_PRIMARY),
        lane(app, plan),
        lane(app, plan),
    ]
    .spacing(14)
    .into()
}

fn lane(app: &App, plan: &ShowcasePlan) -> Element<'static, Message> {
    let mut cards = row![].spacing(15);
    for card in plan.lane_cards(&app.settings.site) {
        cards = cards.push(card_view(app, card));
    }

    scrollable(cards)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .width(Length::Fill)
        .into()
}

fn card_view(app: &App, card: Card) -> Element<'static, Message> {
    let mut content = column![super::embed_stand_in(app, &card.embed_html)].spacing(8);

    if let Some(link) = card.title {
        let url = resolve_site_url(&app.settings.site, &link.url);
        content = content.push(
            button(text(link.label).size(16))
                .on_press(Message::CopyLink(url))
                .style(theme::link_button)
                .padding(0),
        );
    }
    if let Some(link) = card.author {
        content = content.push(
            button(text(link.label).size(13))
                .on_press(Message::CopyLink(link.url))
                .style(theme::link_button)
                .padding(0),
        );
    }

    container(content)
        .style(theme::card)
        .padding(12)
        .width(Length::Fixed(280.0))
        .into()
}
