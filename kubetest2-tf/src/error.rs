use snafu::Snafu;

/// The crate-wide result type.
pub(crate) type Result<T> = std::result::Result<T, Error>;

/// The crate-wide error type.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum Error {
    #[snafu(display("Provider '{}' failed: {}", name, source))]
    Provider {
        name: String,
        source: deployer::ProviderError,
    },

    #[snafu(display("Unknown provider '{}'", name))]
    UnknownProvider { name: String },
}
