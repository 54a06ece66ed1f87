use deployer::{write_tfvars, FlagSet, FlagValues, Provider, ProviderResult};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub(crate) const NAME: &str = "mock";

/// The Terraform variables of a pretend cloud.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub(crate) struct MockVars {
    #[serde(rename = "InstanceCount")]
    pub(crate) instance_count: String,
    #[serde(rename = "InstanceType")]
    pub(crate) instance_type: String,
}

/// A provider that records how the deployer drives it.
#[derive(Debug, Default)]
pub(crate) struct MockProvider {
    pub(crate) initialized: usize,
    pub(crate) vars: MockVars,
}

impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        NAME
    }

    fn initialize(&mut self) -> ProviderResult<()> {
        self.initialized += 1;
        Ok(())
    }

    fn bind_flags(&self, flags: &mut FlagSet) {
        flags
            .string("mock-instance-count", "1", "How many instances to create")
            .string("mock-instance-type", "", "The size of each instance");
    }

    fn load_flags(&mut self, values: &FlagValues) {
        self.vars = MockVars {
            instance_count: values.get("mock-instance-count").to_owned(),
            instance_type: values.get("mock-instance-type").to_owned(),
        };
    }

    fn dump_config(&self, dir: &Path) -> ProviderResult<PathBuf> {
        write_tfvars(dir, self.name(), &self.vars)
    }
}
