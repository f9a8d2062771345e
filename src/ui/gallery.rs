// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: artwork frame, caption box and Previous/Next buttons.
//!
//! The view is a pure function of the current artwork. Button presses are
//! reported as [`Message`]s and applied to the controller by [`update`].

use crate::catalog::LabelKey;
use crate::domain::gallery::{Artwork, GalleryController};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::svg::{self, Svg};
use iced::{
    alignment::{Horizontal, Vertical},
    font,
    widget::{button, Column, Container, Row, Scrollable, Text},
    ContentFit, Element, Font, Length, Padding,
};

const LOCATION_FONT: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

const YEAR_FONT: Font = Font {
    style: font::Style::Italic,
    ..Font::DEFAULT
};

/// Artwork as displayed: a resolved SVG handle (if the asset loaded) and
/// label keys translated at render time.
pub type ScreenArtwork = Artwork<Option<svg::Handle>, LabelKey>;

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artwork: &'a ScreenArtwork,
    pub colors: &'a ColorScheme,
    /// i18n key of a startup warning shown above the artwork.
    pub notice: Option<&'a str>,
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

/// Applies a navigation message to the controller.
pub fn update<I, L>(message: Message, controller: &mut GalleryController<I, L>) {
    match message {
        Message::Previous => controller.previous(),
        Message::Next => controller.next(),
    }
    tracing::debug!(
        ?message,
        index = controller.current_index(),
        len = controller.len(),
        "gallery navigation"
    );
}

/// Render the gallery screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new();
    if let Some(key) = ctx.notice {
        content = content.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        );
    }

    let content = content
        .push(artwork_frame(&ctx))
        .push(caption(&ctx))
        .push(navigation_buttons(ctx.i18n))
        .spacing(spacing::XL)
        .padding(Padding {
            top: spacing::XXL,
            right: spacing::LG,
            bottom: spacing::LG,
            left: spacing::LG,
        })
        .align_x(Horizontal::Center);

    let scrollable = Scrollable::new(Container::new(content).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .style(styles::container::screen(ctx.colors.surface_primary))
        .into()
}

fn artwork_frame<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let image: Element<'a, Message> = match &ctx.artwork.image {
        Some(handle) => Svg::new(handle.clone())
            .width(Length::Fixed(sizing::ARTWORK_IMAGE_WIDTH))
            .height(Length::Fixed(sizing::ARTWORK_IMAGE_HEIGHT))
            .content_fit(ContentFit::Fill)
            .into(),
        None => Text::new(ctx.i18n.tr("image-unavailable"))
            .size(typography::BODY)
            .color(ctx.colors.text_secondary)
            .into(),
    };

    Container::new(image)
        .width(Length::Fixed(sizing::ARTWORK_FRAME_WIDTH))
        .height(Length::Fixed(sizing::ARTWORK_FRAME_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::artwork_frame(ctx.colors.frame_background))
        .into()
}

fn caption<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let artwork = ctx.artwork;

    let title = Text::new(ctx.i18n.tr(artwork.title.as_str()))
        .size(typography::TITLE_MD)
        .font(Font::MONOSPACE)
        .color(ctx.colors.text_secondary);

    let details = Row::new()
        .push(
            Text::new(ctx.i18n.tr(artwork.location.as_str()))
                .size(typography::BODY)
                .font(LOCATION_FONT)
                .color(ctx.colors.text_primary),
        )
        .push(
            Text::new(ctx.i18n.tr(artwork.year.as_str()))
                .size(typography::BODY)
                .font(YEAR_FONT)
                .color(ctx.colors.text_secondary),
        )
        .spacing(spacing::XXS);

    let column = Column::new().push(title).push(details).spacing(spacing::XXS);

    Container::new(column)
        .width(Length::Fixed(sizing::CAPTION_WIDTH))
        .height(Length::Fixed(sizing::CAPTION_HEIGHT))
        .padding(Padding {
            top: 0.0,
            right: spacing::MD,
            bottom: 0.0,
            left: spacing::LG,
        })
        .align_y(Vertical::Center)
        .style(styles::container::caption(ctx.colors.caption_background))
        .into()
}

fn navigation_buttons(i18n: &I18n) -> Element<'_, Message> {
    let nav_button = |label: String, message: Message| {
        button(Container::new(Text::new(label).size(typography::BODY)).center_x(Length::Fill))
            .on_press(message)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding(spacing::XS)
            .style(styles::button::navigation)
    };

    Row::new()
        .push(nav_button(i18n.tr("button-previous"), Message::Previous))
        .push(nav_button(i18n.tr("button-next"), Message::Next))
        .spacing(spacing::XXL)
        .width(Length::Fixed(sizing::CAPTION_WIDTH))
        .into()
}
