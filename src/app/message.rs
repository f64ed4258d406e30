// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::FetchError;
use crate::gallery::{Item, RequestId};
use crate::ui::gallery;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction on the gallery screen.
    Gallery(gallery::Message),
    /// Keyboard shortcut recognized by the event subscription.
    Shortcut(Shortcut),
    /// A search request finished.
    PageFetched {
        request: RequestId,
        result: Result<Vec<Item>, FetchError>,
    },
    /// One image download finished.
    ImageFetched {
        epoch: RequestId,
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    /// An image requested by a load round was already in memory.
    ImageCached { epoch: RequestId },
    /// The window's inner height changed.
    WindowResized { height: f32 },
}

/// Keyboard shortcuts of the gallery window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    PreviousPage,
    NextPage,
    ShowGrid,
    ShowList,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CAT_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
