mod error;
mod providers;

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgMatches, Command};
use deployer::FlagSet;
use env_logger::Builder;
use error::Result;
use log::{debug, info, LevelFilter};
use providers::Registry;
use snafu::{OptionExt, ResultExt};
use std::path::PathBuf;

const TARGET_PROVIDER: &str = "target-provider";
const TFVARS_DIR: &str = "tfvars-dir";
const LOG_LEVEL: &str = "log-level";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// The crates whose logs `--log-level` applies to.
const LOG_TARGETS: &[&str] = &[env!("CARGO_CRATE_NAME"), "deployer", "vpc_provider"];

fn main() {
    let providers = providers::registry();
    let mut flags = FlagSet::new();
    for provider in providers.values() {
        provider.bind_flags(&mut flags);
    }
    let matches = flags
        .augment(command(providers.keys().copied()))
        .get_matches();
    init_logger(log_level(&matches));
    if let Err(e) = run(&matches, &flags, providers) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn command<I>(provider_names: I) -> Command
where
    I: IntoIterator<Item = &'static str>,
{
    let provider_names: Vec<&'static str> = provider_names.into_iter().collect();
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Writes the Terraform variables for a kubetest2 test cluster")
        .arg(
            Arg::new(TARGET_PROVIDER)
                .long(TARGET_PROVIDER)
                .value_name("NAME")
                .value_parser(PossibleValuesParser::new(provider_names))
                .default_value(vpc_provider::NAME)
                .help("The provider whose tfvars file is written"),
        )
        .arg(
            Arg::new(TFVARS_DIR)
                .long(TFVARS_DIR)
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .default_value(".")
                .help("The Terraform working directory to write the tfvars file into"),
        )
        .arg(
            Arg::new(LOG_LEVEL)
                .long(LOG_LEVEL)
                .value_name("LEVEL")
                .value_parser(LOG_LEVELS)
                .default_value("info")
                .help(
                    "Set logging verbosity [trace|debug|info|warn|error]. If the environment \
                    variable `RUST_LOG` is present, it overrides the default logging behavior. \
                    See https://docs.rs/env_logger/latest",
                ),
        )
}

fn run(matches: &ArgMatches, flags: &FlagSet, mut providers: Registry) -> Result<()> {
    let name = matches
        .get_one::<String>(TARGET_PROVIDER)
        .map(String::as_str)
        .unwrap_or(vpc_provider::NAME);
    let dir = matches
        .get_one::<PathBuf>(TFVARS_DIR)
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let provider = providers
        .get_mut(name)
        .context(error::UnknownProviderSnafu { name })?;

    debug!("Initializing provider '{}'", name);
    provider
        .initialize()
        .context(error::ProviderSnafu { name })?;
    provider.load_flags(&flags.values(matches));
    let path = provider
        .dump_config(&dir)
        .context(error::ProviderSnafu { name })?;

    info!("Terraform variables for '{}' are ready", name);
    println!("{}", path.display());
    Ok(())
}

fn log_level(matches: &ArgMatches) -> LevelFilter {
    matches
        .get_one::<String>(LOG_LEVEL)
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for our crates only.
            let mut builder = Builder::new();
            for target in LOG_TARGETS {
                builder.filter(Some(*target), level);
            }
            builder.init();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> (ArgMatches, FlagSet) {
        let providers = providers::registry();
        let mut flags = FlagSet::new();
        for provider in providers.values() {
            provider.bind_flags(&mut flags);
        }
        let matches = flags
            .augment(command(providers.keys().copied()))
            .try_get_matches_from(std::iter::once("kubetest2-tf").chain(args.iter().copied()))
            .unwrap();
        (matches, flags)
    }

    #[test]
    fn command_is_well_formed() {
        command(["vpc"]).debug_assert();
    }

    #[test]
    fn harness_defaults() {
        let (matches, _) = parse(&[]);
        assert_eq!(
            matches.get_one::<String>(TARGET_PROVIDER).unwrap(),
            "vpc"
        );
        assert_eq!(
            matches.get_one::<PathBuf>(TFVARS_DIR).unwrap(),
            &PathBuf::from(".")
        );
        assert_eq!(log_level(&matches), LevelFilter::Info);
    }

    #[test]
    fn provider_flags_sit_next_to_harness_flags() {
        let (matches, flags) = parse(&["--log-level", "debug", "--vpc-region", "jp-tok"]);
        assert_eq!(log_level(&matches), LevelFilter::Debug);
        let values = flags.values(&matches);
        assert_eq!(values.get("vpc-region"), "jp-tok");
        assert_eq!(values.get("vpc-resource-group"), "Default");
    }

    #[test]
    fn run_writes_into_the_tfvars_dir() {
        let tempdir = tempfile::TempDir::new().unwrap();
        let dir = tempdir.path().to_str().unwrap();
        let (matches, flags) = parse(&["--tfvars-dir", dir, "--vpc-name", "test-vpc"]);
        run(&matches, &flags, providers::registry()).unwrap();
        assert!(tempdir.path().join("vpc.auto.tfvars.json").is_file());
    }

    #[test]
    fn run_reports_the_failing_provider() {
        let tempdir = tempfile::TempDir::new().unwrap();
        let missing = tempdir.path().join("missing");
        let dir = missing.to_str().unwrap();
        let (matches, flags) = parse(&["--tfvars-dir", dir]);
        let err = run(&matches, &flags, providers::registry()).unwrap_err();
        assert!(err.to_string().starts_with("Provider 'vpc' failed"));
    }

    #[test]
    fn run_rejects_unregistered_providers() {
        let (matches, flags) = parse(&[]);
        let err = run(&matches, &flags, Registry::new()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown provider 'vpc'");
    }
}
