mod error;

pub use self::error::{ProviderError, ProviderResult};
pub(crate) use self::error::{SerializationSnafu, WriteSnafu};
use crate::flags::{FlagSet, FlagValues};
use std::path::{Path, PathBuf};

/// You implement the [`Provider`] trait in order to describe the infrastructure that Terraform
/// should create for a test cluster. The deployer drives the implementation in this order:
///
/// 1. [`Provider::bind_flags`] to register the provider's command line options.
/// 2. [`Provider::initialize`] once the command line has been parsed.
/// 3. [`Provider::load_flags`] with the parsed values.
/// 4. [`Provider::dump_config`] to write the Terraform variables for the provider's module.
///
/// The provider owns its configuration. Flag parsing never writes into it directly, the parsed
/// values are handed over as a whole in `load_flags`.
pub trait Provider {
    /// The name of the provider. This is also the stem of the tfvars file, see
    /// [`tfvars_filename`](crate::tfvars_filename).
    fn name(&self) -> &'static str;

    /// Prepare the provider before its flag values are loaded.
    fn initialize(&mut self) -> ProviderResult<()> {
        Ok(())
    }

    /// Register the provider's options with `flags`.
    fn bind_flags(&self, flags: &mut FlagSet);

    /// Replace the provider's configuration with one built from the parsed `values`.
    fn load_flags(&mut self, values: &FlagValues);

    /// Write the provider's configuration as `<dir>/<name>.auto.tfvars.json` and return the path
    /// of the written file.
    fn dump_config(&self, dir: &Path) -> ProviderResult<PathBuf>;
}
