// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the public cat image API.
//!
//! [`CatApiClient`] issues the image search request used by the gallery and
//! downloads the image bytes rendered by the cards. It is cheap to clone and
//! is moved into each asynchronous task.

mod client;

pub use client::{parse_items, CatApiClient, Endpoint, USER_AGENT};
