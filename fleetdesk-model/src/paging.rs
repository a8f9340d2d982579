use std::{fmt, num::NonZeroUsize};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Rows per page. Never zero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Sizes offered by the page-size selector.
    pub const OPTIONS: [usize; 5] = [10, 20, 50, 100, 200];

    pub const DEFAULT: PageSize = PageSize(NonZeroUsize::new(10).unwrap());

    pub fn new(size: usize) -> Result<Self, ModelError> {
        NonZeroUsize::new(size)
            .map(PageSize)
            .ok_or(ModelError::InvalidPageSize(size))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Whether this size is one of the selector options.
    pub fn is_standard(self) -> bool {
        Self::OPTIONS.contains(&self.get())
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ModelError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-based page cursor plus page size.
///
/// The pager never clamps `current_page`; whoever owns this state resets it
/// when the upstream row set changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: usize,
    pub page_size: PageSize,
}

impl PaginationState {
    pub fn new(page_size: PageSize) -> Self {
        PaginationState {
            current_page: 1,
            page_size,
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}
