pub(crate) mod mock;

use deployer::{FlagSet, Provider};
use mock::{MockProvider, MockVars};
use std::fs;

/// Drives a provider through the whole lifecycle the way the deployer binary does, with the provider
/// behind a trait object.
#[test]
fn provider_lifecycle() {
    let _ = env_logger::builder().is_test(true).try_init();
    let tempdir = tempfile::TempDir::new().unwrap();

    let mut provider: Box<dyn Provider> = Box::new(MockProvider::default());
    let mut flags = FlagSet::new();
    provider.bind_flags(&mut flags);
    assert_eq!(flags.len(), 2);

    let values = flags
        .parse_from(["--mock-instance-type", "bx2-4x16"])
        .unwrap();
    provider.initialize().unwrap();
    provider.load_flags(&values);
    let path = provider.dump_config(tempdir.path()).unwrap();

    assert_eq!(path, tempdir.path().join("mock.auto.tfvars.json"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"InstanceCount\": \"1\",\n  \"InstanceType\": \"bx2-4x16\"\n}"
    );
}

#[test]
fn load_flags_builds_the_vars_in_one_step() {
    let mut provider = MockProvider::default();
    let mut flags = FlagSet::new();
    provider.bind_flags(&mut flags);

    provider.initialize().unwrap();
    provider.load_flags(&flags.parse_from(["--mock-instance-count", "3"]).unwrap());
    assert_eq!(provider.initialized, 1);
    assert_eq!(
        provider.vars,
        MockVars {
            instance_count: "3".to_string(),
            instance_type: "".to_string(),
        }
    );

    // A second parse replaces everything, including values that are now unset.
    provider.load_flags(&flags.parse_from(["--mock-instance-type", "cx2-2x4"]).unwrap());
    assert_eq!(
        provider.vars,
        MockVars {
            instance_count: "1".to_string(),
            instance_type: "cx2-2x4".to_string(),
        }
    );
}
