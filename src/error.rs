use std::path::PathBuf;

use thiserror::Error;

/// Failures the aggregation pipeline can surface. All of them abort startup;
/// nothing here is retryable since the pipeline is pure computation over a
/// static input file.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to load dataset at {path}: {source}")]
    DataLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset at {path} is missing required column \"{column}\"")]
    MissingColumn { path: PathBuf, column: String },

    #[error("no record in the dataset lists \"{subject}\" in its cast")]
    EmptyResult { subject: String },
}
