use serde::Serialize;

/// Outcome of a single resolution run.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The application label that was looked up.
    pub label: String,
    /// The version found on the status page, or the default for a
    /// brand-new label.
    pub current: String,
    /// The computed next build version.
    pub next: String,
}
