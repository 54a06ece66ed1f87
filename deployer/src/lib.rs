/*!

The `deployer` library allows you to write Terraform providers for the `kubetest2-tf` deployer.
You do this by implementing the [`Provider`] trait: register your flags with a [`FlagSet`], build
your Terraform variables from the parsed [`FlagValues`], and write them to a
`<name>.auto.tfvars.json` file that Terraform picks up automatically.

!*/

pub mod flags;
pub mod provider;
pub mod tfvars;

pub use flags::{Flag, FlagSet, FlagValues};
pub use provider::{Provider, ProviderError, ProviderResult};
pub use tfvars::{tfvars_filename, write_tfvars, TFVARS_SUFFIX};
