//! Root-level view composition.

mod lanes;
mod members;
mod spotlight;

use iced::widget::{button, column, container, scrollable, text};
use iced::{Element, Length};

use showcase_core::cards::resolve_site_url;
use showcase_core::embed::EmbedSource;

use crate::messages::Message;
use crate::model::App;
use crate::theme;

pub fn view(app: &App) -> Element<'_, Message> {
    let content = column![
        text("東京大学ボカロP同好会 作品ショーケース").size(30),
        spotlight::view(app),
        lanes::section(app, "作品ショーケース", &app.rich_plan),
        lanes::section(app, "ピックアップ", &app.compact_plan),
        members::view(app),
    ]
    .spacing(36)
    .padding(28);

    container(scrollable(content))
        .style(theme::page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The desktop stand-in for a trusted embed fragment.
///
/// The fragment itself is never interpreted beyond source extraction;
/// once the embed host is ready, the stand-in exposes the source URL as
/// a copyable link.
pub(crate) fn embed_stand_in(app: &App, fragment: &str) -> Element<'static, Message> {
    let source = EmbedSource::classify(fragment);
    let label = match &source {
        EmbedSource::Frame(_) => "▶ 動画プレイヤー",
        EmbedSource::Image(_) => "カバー画像",
        EmbedSource::Audio(_) => "♪ オーディオ",
        EmbedSource::Unknown => "埋め込みコンテンツ",
    };

    let mut content = column![text(label).size(14)].spacing(4);
    if app.embeds_active() {
        if let Some(url) = source.url() {
            let resolved = resolve_site_url(&app.settings.site, url);
            content = content.push(
                button(text(resolved.clone()).size(11).color(theme::TEXT_SECONDARY))
                    .on_press(Message::CopyLink(resolved))
                    .style(theme::link_button)
                    .padding(0),
            );
        }
    }

    container(content)
        .style(theme::embed_well)
        .padding(14)
        .width(Length::Fill)
        .into()
}
