// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parsing Options.
//! `pairsum [-c FILE] <solve|selftest|bench|duplicates|prefix> ...`

use crate::error::{parse_sequence, Error};
use crate::exercises::Variant;
use crate::harness::Workload;
use crate::two_sum::Strategy;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Solve one Two Sum instance.
    Solve {
        strategy: Strategy,
        target: i64,
        nums: Vec<i64>,
    },
    /// Run the known scenarios. Empty `strategies` means the configured ones.
    SelfTest { strategies: Vec<Strategy>, json: bool },
    /// Time the strategies. `None` fields fall back to the configuration.
    Bench {
        size: Option<usize>,
        workload: Option<Workload>,
        seed: Option<u64>,
        repetitions: Option<usize>,
        json: bool,
    },
    Duplicates { nums: Vec<i64>, variant: Variant },
    /// Longest common prefix. With `compare`, time both variants instead;
    /// no words then means the built-in 3000-word input.
    Prefix {
        words: Vec<String>,
        variant: Variant,
        compare: bool,
    },
}

fn strategy_arg() -> Arg {
    Arg::new("strategy")
        .short('s')
        .long("strategy")
        .help("Two Sum strategy")
        .value_parser(PossibleValuesParser::new(Strategy::names()))
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print the report as JSON")
        .action(ArgAction::SetTrue)
}

fn numbers_arg() -> Arg {
    Arg::new("nums")
        .value_name("NUMS")
        .help("Integers, separated by spaces or commas")
        .num_args(0..)
        .allow_negative_numbers(true)
}

fn variant_arg() -> Arg {
    Arg::new("variant")
        .long("variant")
        .help("Exercise implementation")
        .default_value("optimal")
        .value_parser(PossibleValuesParser::new(Variant::names()))
}

fn make_options_parser() -> Command {
    Command::new("pairsum")
        .no_binary_name(true)
        .version("v0.1.0")
        .about("Two Sum and sibling exercises")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration for the harnesses")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("solve")
                .about("Find two indices whose values sum to the target")
                .arg(strategy_arg().default_value("hash"))
                .arg(
                    Arg::new("target")
                        .short('t')
                        .long("target")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(numbers_arg()),
        )
        .subcommand(
            Command::new("selftest")
                .about("Run the known scenarios through the strategies")
                .arg(strategy_arg().action(ArgAction::Append))
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("bench")
                .about("Compare strategy running times")
                .arg(
                    Arg::new("size")
                        .short('n')
                        .long("size")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("workload")
                        .short('w')
                        .long("workload")
                        .value_parser(["ascending", "shuffled"]),
                )
                .arg(Arg::new("seed").long("seed").value_parser(value_parser!(u64)))
                .arg(
                    Arg::new("repetitions")
                        .short('r')
                        .long("repetitions")
                        .value_parser(value_parser!(usize)),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("duplicates")
                .about("Report whether any value appears twice")
                .arg(variant_arg())
                .arg(numbers_arg()),
        )
        .subcommand(
            Command::new("prefix")
                .about("Longest common prefix of the given words")
                .arg(variant_arg())
                .arg(
                    Arg::new("compare")
                        .long("compare")
                        .help("Time both variants")
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("words").value_name("WORDS").num_args(0..)),
        )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub action: Action,
}

impl Options {
    pub fn parse_from_args<S: AsRef<str>>(flags: &[S]) -> Result<Self> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter().map(|flag| flag.as_ref()))?;
        let config = matches.get_one::<PathBuf>("config").cloned();

        let action = match matches.subcommand() {
            Some(("solve", sub)) => Action::Solve {
                strategy: strategy_of(sub)?.unwrap_or(Strategy::HashIndex),
                target: *sub
                    .get_one::<i64>("target")
                    .ok_or_else(|| anyhow::anyhow!("missing --target"))?,
                nums: numbers_of(sub)?,
            },
            Some(("selftest", sub)) => Action::SelfTest {
                strategies: sub
                    .get_many::<String>("strategy")
                    .into_iter()
                    .flatten()
                    .map(|name| Strategy::from_name(name))
                    .collect::<Result<_, _>>()?,
                json: sub.get_flag("json"),
            },
            Some(("bench", sub)) => Action::Bench {
                size: sub.get_one::<usize>("size").copied(),
                workload: sub
                    .get_one::<String>("workload")
                    .map(|name| Workload::from_name(name))
                    .transpose()?,
                seed: sub.get_one::<u64>("seed").copied(),
                repetitions: sub.get_one::<usize>("repetitions").copied(),
                json: sub.get_flag("json"),
            },
            Some(("duplicates", sub)) => Action::Duplicates {
                nums: numbers_of(sub)?,
                variant: variant_of(sub)?,
            },
            Some(("prefix", sub)) => {
                let words: Vec<String> = sub
                    .get_many::<String>("words")
                    .into_iter()
                    .flatten()
                    .cloned()
                    .collect();
                let compare = sub.get_flag("compare");
                if words.is_empty() && !compare {
                    return Err(Error::EmptyWordList.into());
                }
                Action::Prefix {
                    words,
                    variant: variant_of(sub)?,
                    compare,
                }
            }
            _ => return Err(anyhow::anyhow!("UnsupportedCommand")),
        };

        Ok(Options { config, action })
    }
}

fn strategy_of(matches: &ArgMatches) -> Result<Option<Strategy>> {
    Ok(matches
        .get_one::<String>("strategy")
        .map(|name| Strategy::from_name(name))
        .transpose()?)
}

fn variant_of(matches: &ArgMatches) -> Result<Variant> {
    Ok(matches
        .get_one::<String>("variant")
        .map(|name| Variant::from_name(name))
        .transpose()?
        .unwrap_or_default())
}

fn numbers_of(matches: &ArgMatches) -> Result<Vec<i64>> {
    let tokens: Vec<&String> = matches
        .get_many::<String>("nums")
        .into_iter()
        .flatten()
        .collect();
    Ok(parse_sequence(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve() {
        let options = Options::parse_from_args(&[
            "solve", "-s", "two-pointer", "-t", "-8", "-1", "-2", "-3", "-4", "-5",
        ])
        .unwrap();
        assert_eq!(options.config, None);
        assert_eq!(
            options.action,
            Action::Solve {
                strategy: Strategy::TwoPointer,
                target: -8,
                nums: vec![-1, -2, -3, -4, -5],
            }
        );
    }

    #[test]
    fn test_parse_solve_default_strategy() {
        let options = Options::parse_from_args(&["solve", "--target", "9", "2,7,11,15"]).unwrap();
        assert!(matches!(
            options.action,
            Action::Solve {
                strategy: Strategy::HashIndex,
                target: 9,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_selftest_strategies() {
        let options =
            Options::parse_from_args(&["-c", "h.toml", "selftest", "-s", "hash", "-s", "brute", "--json"])
                .unwrap();
        assert_eq!(options.config, Some(PathBuf::from("h.toml")));
        assert_eq!(
            options.action,
            Action::SelfTest {
                strategies: vec![Strategy::HashIndex, Strategy::BruteForce],
                json: true,
            }
        );
    }

    #[test]
    fn test_parse_bench() {
        let options = Options::parse_from_args(&["bench", "-n", "500", "-w", "shuffled", "--seed", "9"]).unwrap();
        assert_eq!(
            options.action,
            Action::Bench {
                size: Some(500),
                workload: Some(Workload::Shuffled),
                seed: Some(9),
                repetitions: None,
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_solve_without_numbers() {
        let options = Options::parse_from_args(&["solve", "-t", "0"]).unwrap();
        assert_eq!(
            options.action,
            Action::Solve {
                strategy: Strategy::HashIndex,
                target: 0,
                nums: vec![],
            }
        );
    }

    #[test]
    fn test_parse_prefix_needs_words() {
        let err = Options::parse_from_args(&["prefix"]).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::EmptyWordList));
    }

    #[test]
    fn test_parse_variants() {
        let options =
            Options::parse_from_args(&["duplicates", "--variant", "brute-force", "1", "2", "1"]).unwrap();
        assert_eq!(
            options.action,
            Action::Duplicates {
                nums: vec![1, 2, 1],
                variant: Variant::BruteForce,
            }
        );
        let options = Options::parse_from_args(&["prefix", "flow", "flower"]).unwrap();
        assert_eq!(
            options.action,
            Action::Prefix {
                words: vec!["flow".to_string(), "flower".to_string()],
                variant: Variant::Optimal,
                compare: false,
            }
        );
        let options = Options::parse_from_args(&["prefix", "--compare"]).unwrap();
        assert!(matches!(options.action, Action::Prefix { compare: true, .. }));
        assert!(Options::parse_from_args(&["prefix", "--variant", "fast", "a"]).is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(Options::parse_from_args(&["solve", "-s", "quantum", "-t", "1", "1", "2"]).is_err());
        assert!(Options::parse_from_args(&["solve", "-t", "1", "1", "x"]).is_err());
        assert!(Options::parse_from_args(&["solve", "1", "2"]).is_err());
        assert!(Options::parse_from_args::<&str>(&[]).is_err());
    }
}
