// SPDX-License-Identifier: MPL-2.0
//! `cat_gallery` is a desktop cat picture gallery built with the Iced GUI framework.
//!
//! Images come from a public search API and are shown either as a paginated
//! grid or as an infinitely scrolling list. The view/pagination/scroll logic
//! lives in [`gallery`] as a pure state machine; [`app`] runs it inside the
//! Iced event loop and [`api`] talks to the network.

#![doc(html_root_url = "https://docs.rs/cat_gallery/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
