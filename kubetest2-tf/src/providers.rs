use deployer::Provider;
use std::collections::BTreeMap;
use vpc_provider::VpcProvider;

/// Every provider the deployer knows about, keyed by name.
pub(crate) type Registry = BTreeMap<&'static str, Box<dyn Provider>>;

pub(crate) fn registry() -> Registry {
    let providers: Vec<Box<dyn Provider>> = vec![Box::new(VpcProvider::new())];
    providers
        .into_iter()
        .map(|provider| (provider.name(), provider))
        .collect()
}
