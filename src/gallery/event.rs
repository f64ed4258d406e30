// SPDX-License-Identifier: MPL-2.0
//! Inputs and outputs of the gallery transition function.

use super::item::Item;
use super::newtypes::{Page, RequestId};
use super::state::View;
use crate::error::FetchError;

/// Everything that can happen to the gallery.
#[derive(Debug, Clone)]
pub enum Event {
    /// The gallery was shown for the first time.
    Mounted,
    /// A view tab was clicked (also when it is already the active view).
    ViewSelected(View),
    /// The Grid "Previous" control was clicked.
    PreviousPage,
    /// The Grid "Next" control was clicked.
    NextPage,
    /// The List view was scrolled.
    Scrolled(ScrollPosition),
    /// An issued fetch finished, successfully or not.
    FetchCompleted {
        request: RequestId,
        result: Result<Vec<Item>, FetchError>,
    },
    /// One rendered item finished loading its image (success or failure).
    ImageLoaded { epoch: RequestId },
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue one search request.
    Fetch(FetchRequest),
    /// Load the image of every listed item and report each completion as
    /// [`Event::ImageLoaded`] tagged with `epoch`.
    LoadImages { epoch: RequestId, urls: Vec<String> },
}

/// How a fetched page is merged into the item sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Replace the sequence (view switch, Grid pagination).
    Replace,
    /// Append to the sequence (List infinite scroll).
    Append,
}

/// One search request issued by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub page: Page,
    pub mode: FetchMode,
}

/// Geometry of the scrolled List view, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    /// Vertical offset of the top of the viewport inside the content.
    pub offset_y: f32,
    /// Height of the visible area.
    pub viewport_height: f32,
    /// Total height of the scrolled content.
    pub content_height: f32,
}

impl ScrollPosition {
    /// Remaining distance between the bottom of the viewport and the end of
    /// the content. Zero or negative once the end is visible.
    #[must_use]
    pub fn distance_to_bottom(&self) -> f32 {
        self.content_height - (self.offset_y + self.viewport_height)
    }

    /// Returns whether the viewport is within `threshold` pixels of the end.
    #[must_use]
    pub fn is_near_bottom(&self, threshold: f32) -> bool {
        self.distance_to_bottom() <= threshold
    }
}
