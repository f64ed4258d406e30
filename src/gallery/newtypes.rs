// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! Type-safe wrappers for page numbers and request identifiers so that a page
//! can never be zero and request ids cannot be confused with counters.

use std::fmt;

// =============================================================================
// Page
// =============================================================================

/// 1-based page number of the image search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(u32);

impl Page {
    /// The first page. Every view session starts here.
    pub const FIRST: Page = Page(1);

    /// Returns the raw page number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether this is the first page.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// The following page.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The preceding page, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        (self.0 > 1).then(|| Self(self.0 - 1))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RequestId
// =============================================================================

/// Identifier of one issued fetch.
///
/// Ids increase strictly within a gallery session. A completion is accepted
/// only if its id matches the request the gallery is currently waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
