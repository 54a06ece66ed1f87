//! String flags that providers register with the deployer.
//!
//! A [`Provider`](crate::Provider) never hands out references into its configuration. It registers
//! each option in a [`FlagSet`] and the deployer parses the command line into a [`FlagValues`] map,
//! which the provider turns into its configuration in one step once parsing is done.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::warn;
use std::collections::BTreeMap;
use std::ffi::OsString;

/// A single named, string-typed command line option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    name: &'static str,
    default: &'static str,
    help: &'static str,
}

impl Flag {
    pub fn new(name: &'static str, default: &'static str, help: &'static str) -> Self {
        Self {
            name,
            default,
            help,
        }
    }

    /// The long option name, without the leading `--`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value used when the flag is not given on the command line.
    pub fn default(&self) -> &'static str {
        self.default
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.name)
            .long(self.name)
            .value_name("VALUE")
            .action(ArgAction::Set)
            .num_args(1)
            .allow_hyphen_values(true);
        // Defaults are applied by `FlagSet::values`, so clap only ever sees values that were
        // actually passed. Non-empty defaults are still worth advertising in `--help`.
        if self.default.is_empty() {
            arg.help(self.help)
        } else {
            arg.help(format!("{} [default: {}]", self.help, self.default))
        }
    }
}

/// The set of flags registered by one or more providers.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: Vec<Flag>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a string flag. Registering the same name twice replaces the earlier definition.
    pub fn string(
        &mut self,
        name: &'static str,
        default: &'static str,
        help: &'static str,
    ) -> &mut Self {
        let flag = Flag::new(name, default, help);
        match self.flags.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => {
                warn!("Flag '--{}' was registered more than once", name);
                *existing = flag;
            }
            None => self.flags.push(flag),
        }
        self
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn get(&self, name: &str) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.name == name)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Install every registered flag as a `--<name> <VALUE>` option of `command`.
    pub fn augment(&self, command: Command) -> Command {
        self.flags
            .iter()
            .fold(command, |command, flag| command.arg(flag.to_arg()))
    }

    /// Collect the value of every registered flag from `matches`. Flags that were not given, or
    /// that were never installed in the command that produced `matches`, take their default.
    pub fn values(&self, matches: &ArgMatches) -> FlagValues {
        self.flags
            .iter()
            .map(|flag| {
                let value = matches
                    .try_get_one::<String>(flag.name)
                    .ok()
                    .flatten()
                    .map(String::as_str)
                    .unwrap_or(flag.default);
                (flag.name, value)
            })
            .collect()
    }

    /// Parse `args` using only the registered flags. `args` must not include a binary name.
    pub fn parse_from<I, T>(&self, args: I) -> Result<FlagValues, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = self.augment(Command::new("flags").no_binary_name(true));
        let matches = command.try_get_matches_from(args)?;
        Ok(self.values(&matches))
    }
}

/// Parsed flag values keyed by flag name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagValues {
    values: BTreeMap<String, String>,
}

impl FlagValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value of flag `name`, or the empty string if there is none.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values.insert(name.into(), value.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for FlagValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FlagValues::new();
        for (name, value) in iter {
            values.insert(name, value);
        }
        values
    }
}
