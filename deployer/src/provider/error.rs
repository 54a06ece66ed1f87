use snafu::Snafu;
use std::path::PathBuf;

/// The result type returned by [`Provider`](crate::Provider) implementations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// The error type returned by [`Provider`](crate::Provider) implementations.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    #[snafu(display("Unable to convert the '{}' config to json: {}", provider, source))]
    Serialization {
        provider: String,
        source: serde_json::Error,
    },

    #[snafu(display("Failed to dump the json config to '{}': {}", path.display(), source))]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
