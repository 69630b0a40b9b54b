use thiserror::Error;

// ---------------------------------------------------------------------------
// DataError – "data unavailable or malformed"
// ---------------------------------------------------------------------------

/// Every way a render pass can fail.  All variants are fatal for the pass:
/// the dashboard shows the message and draws no charts.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network / transport failure or non-success HTTP status.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The body could not be parsed as CSV.
    #[error("failed to parse CSV from {url}: {source}")]
    Csv {
        url: String,
        #[source]
        source: csv::Error,
    },

    /// The CSV has no header columns at all.
    #[error("{url} contains no columns")]
    Empty { url: String },

    /// A classification report is not valid JSON of the expected shape.
    #[error("failed to parse classification report '{name}': {source}")]
    Report {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A classification report lacks one of the per-class entries.
    #[error("classification report '{name}' has no entry for class \"{class}\"")]
    MissingClass { name: String, class: String },
}
