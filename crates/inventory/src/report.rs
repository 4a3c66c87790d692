//! What happened while loading the backing file.

use amazonia_core::ProductId;

use crate::record::RecordError;

/// How the backing file itself was read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadOutcome {
    /// The file was read; individual lines may still have been skipped.
    #[default]
    Loaded,
    /// No file yet. It is created by the first save.
    Missing,
    /// The file exists but could not be read; the session starts empty.
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Malformed(RecordError),
    DuplicateId(ProductId),
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkipReason::Malformed(err) => core::fmt::Display::fmt(err, f),
            SkipReason::DuplicateId(id) => write!(f, "duplicate id {id}"),
        }
    }
}

/// A line left out of the in-memory inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based.
    pub line_number: usize,
    pub content: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

impl LoadReport {
    pub(crate) fn missing() -> Self {
        Self {
            outcome: LoadOutcome::Missing,
            ..Self::default()
        }
    }

    pub(crate) fn unreadable(message: impl Into<String>) -> Self {
        Self {
            outcome: LoadOutcome::Unreadable(message.into()),
            ..Self::default()
        }
    }

    /// True when every stored line made it into memory.
    pub fn is_clean(&self) -> bool {
        !matches!(self.outcome, LoadOutcome::Unreadable(_)) && self.skipped.is_empty()
    }
}
