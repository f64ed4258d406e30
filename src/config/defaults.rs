// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Image search endpoint, page size and request timeout
//! - **Gallery**: Scroll trigger distance and grid layout

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the public image API (without trailing slash).
pub const DEFAULT_API_BASE_URL: &str = "https://api.thecatapi.com/v1";

/// Number of images requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Minimum page size accepted by the endpoint.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Maximum page size accepted by the endpoint.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Request timeout in seconds, applied to searches and image downloads.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Distance from the bottom of the List view (pixels) that triggers loading
/// the next page.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = crate::gallery::DEFAULT_SCROLL_THRESHOLD_PX;

/// Maximum scroll trigger distance (pixels).
pub const MAX_SCROLL_THRESHOLD_PX: f32 = 500.0;

/// Number of cards per row in Grid view.
pub const DEFAULT_GRID_COLUMNS: u32 = 3;

/// Minimum number of cards per row.
pub const MIN_GRID_COLUMNS: u32 = 1;

/// Maximum number of cards per row.
pub const MAX_GRID_COLUMNS: u32 = 6;
