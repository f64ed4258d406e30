// SPDX-License-Identifier: MPL-2.0
//! Gallery controller core.
//!
//! This module holds the whole view/pagination/scroll state machine of the
//! gallery as plain data with no Iced or network types:
//!
//! - [`GalleryState`]: the single state record, replaced wholesale by
//!   [`GalleryState::apply`] on every transition
//! - [`Event`]: everything that can happen to the gallery (view switch,
//!   pagination, scroll, fetch completion, image load completion)
//! - [`Effect`]: side effects the caller must run (issue a fetch, load images)
//!
//! The application shell owns one `GalleryState`, feeds it events, and turns
//! the returned effects into asynchronous tasks. Tests drive the same function
//! directly.

mod event;
mod item;
mod newtypes;
mod state;

pub use event::{Effect, Event, FetchMode, FetchRequest, ScrollPosition};
pub use item::Item;
pub use newtypes::{Page, RequestId};
pub use state::{GalleryState, View, DEFAULT_SCROLL_THRESHOLD_PX};
