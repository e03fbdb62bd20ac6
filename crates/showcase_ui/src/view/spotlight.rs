//! Featured-work spotlight.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use showcase_core::cards::resolve_site_url;

use crate::messages::Message;
use crate::model::App;
use crate::theme;

pub fn view(app: &App) -> Element<'static, Message> {
    let Some(pick) = &app.featured else {
        // Failed or empty feed: the spotlight region stays empty.
        return Space::new().height(0).into();
    };

    let work_url = resolve_site_url(&app.settings.site, &pick.work_url);

    let mut info = column![
        button(text(pick.title.clone()).size(26))
            .on_press(Message::CopyLink(work_url))
            .style(theme::link_button)
            .padding(0),
        row![
            text("制作: ").size(14).color(theme::TEXT_SECONDARY),
            button(text(pick.author_name.clone()).size(14))
                .on_press(Message::CopyLink(pick.author_url.clone()))
                .style(theme::link_button)
                .padding(0),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(8);

    // Only rendered when the record actually carries a description.
    if let Some(description) = &pick.description {
        info = info.push(
            text(description.clone())
                .size(14)
                .color(theme::TEXT_SECONDARY),
        );
    }

    info = info.push(
        button(text("別の作品を見る").size(14))
            .on_press(Message::ReloadFeatured)
            .style(theme::reload_button)
            .padding([8, 16]),
    );

    let body = row![
        container(super::embed_stand_in(app, &pick.embed_html)).width(Length::Fixed(480.0)),
        info,
    ]
    .spacing(24)
    .align_y(Alignment::Start);

    column![
        text("注目作品").size(24),
        text("メンバーの作品をランダムにピックアップしてご紹介します。")
            .size(13)
            .color(theme::TEXT_SECONDARY),
        container(body).style(theme::card).padding(20),
    ]
    .spacing(12)
    .into()
}
