// SPDX-License-Identifier: MPL-2.0
//! One image card of the gallery.
//!
//! Cards are stateless: the image bytes live in the application's image map,
//! keyed by url, and a card only renders whatever slot it is handed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Container, Text},
    ContentFit, Element, Length,
};

/// Download outcome of one item's image.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loaded(Handle),
    /// The download failed; the card shows a broken-image caption.
    Failed,
}

impl ImageSlot {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        ImageSlot::Loaded(Handle::from_bytes(bytes))
    }
}

/// Renders one card of fixed `height`. `slot` is `None` while the image is
/// still downloading.
pub fn view<'a, Message: 'a>(
    slot: Option<&'a ImageSlot>,
    height: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slot {
        Some(ImageSlot::Loaded(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Failed) => caption(i18n.tr("card-image-broken")),
        None => caption(i18n.tr("card-image-loading")),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(spacing::XXS)
        .clip(true)
        .style(styles::container::card)
        .into()
}

fn caption<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
