//! Page Source Seam
//!
//! Abstract interface for whatever serves product pages.
//! The HTTP catalog client implements it; tests use scripted fakes.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::product::ProductPage;

/// Offset pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip from the start of the result set
    pub skip: usize,
}

/// Serves one page per call.
///
/// Futures are not `Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait PageSource {
    async fn fetch_page(&self, request: PageRequest) -> Result<ProductPage, FetchError>;
}
