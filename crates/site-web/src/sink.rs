//! Browser-side submission sink

use leptos::logging::log;
use site_core::{ContactSubmission, Result, SubmissionSink};

/// Writes submissions to the browser console. The site has no backend
/// endpoint for contact requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn deliver(&self, submission: &ContactSubmission) -> Result<()> {
        log!("Form submitted: {}", submission.to_json()?);
        Ok(())
    }
}
