// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Harness configuration, read from a TOML file.
//!
//! Every field is optional; missing fields take the defaults below, and a
//! missing file gives the default configuration.
//!
//! ```toml
//! bench_size = 10000
//! seed = 42
//! workload = "shuffled"
//! repetitions = 3
//! strategies = ["hash", "two-pointer"]
//! ```

use crate::harness::Workload;
use crate::two_sum::Strategy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HarnessConfig {
    #[serde(default = "default_bench_size")]
    pub bench_size: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub workload: Workload,
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
    #[serde(default = "default_strategies")]
    pub strategies: Vec<Strategy>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            bench_size: default_bench_size(),
            seed: default_seed(),
            workload: Workload::default(),
            repetitions: default_repetitions(),
            strategies: default_strategies(),
        }
    }
}

impl HarnessConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: HarnessConfig = toml::from_str(content)?;
        Ok(config)
    }
}

fn default_bench_size() -> usize {
    10_000
}

fn default_seed() -> u64 {
    42
}

fn default_repetitions() -> usize {
    1
}

fn default_strategies() -> Vec<Strategy> {
    Strategy::all().collect()
}
