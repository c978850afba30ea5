//! Presentation callbacks and the final fan-out report.
//!
//! The fan-out core does not own page layout. It tells a [`SectionSink`]
//! about each source as that source settles; the sink decides how to show it.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::orchestrator::settle::Outcome;
use crate::types::{SourceKind, SourcePayload};

/// Receives per-source results as they settle.
///
/// For one fan-out, `begin` is called once before any request, then exactly
/// one of `render_results` / `render_error` per configured source in
/// completion order, then `finish` once with the ordered report.
pub trait SectionSink {
    /// Called before any request is issued. Useful for loading states.
    fn begin(&mut self, _query: &str, _sources: &[SourceKind]) {}

    /// A source succeeded. `payload` may be empty.
    fn render_results(&mut self, kind: SourceKind, payload: &SourcePayload);

    /// A source failed. Only that source's region should show the error.
    fn render_error(&mut self, kind: SourceKind, error: &SearchError);

    /// Called once after every source has settled.
    fn finish(&mut self, _report: &FanOutReport) {}
}

/// A sink that ignores every callback.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl SectionSink for DiscardSink {
    fn render_results(&mut self, _kind: SourceKind, _payload: &SourcePayload) {}

    fn render_error(&mut self, _kind: SourceKind, _error: &SearchError) {}
}

/// The settled outcome of one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionOutcome {
    /// Which source this is.
    pub kind: SourceKind,
    /// Its result set or failure.
    pub outcome: Outcome<SourcePayload>,
}

/// Every source's outcome for one query, in configured source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanOutReport {
    /// The trimmed query that was sent.
    pub query: String,
    /// One entry per configured source.
    pub sections: Vec<SectionOutcome>,
}

impl FanOutReport {
    /// Look up one source's outcome.
    pub fn get(&self, kind: SourceKind) -> Option<&Outcome<SourcePayload>> {
        self.sections
            .iter()
            .find(|section| section.kind == kind)
            .map(|section| &section.outcome)
    }

    /// Number of sources that succeeded.
    pub fn succeeded(&self) -> usize {
        self.sections
            .iter()
            .filter(|section| section.outcome.is_success())
            .count()
    }

    /// Number of sources that failed.
    pub fn failed(&self) -> usize {
        self.sections.len() - self.succeeded()
    }
}
