// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::{Ipv4Addr, Ipv6Addr};

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::check_batch_count;
use crate::errors::TransformError;
use crate::traits::{Generator, RandomnessClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IpVersion {
    #[default]
    V4,
    V6,
}

fn default_count() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RandomIpConfig {
    #[serde(default)]
    pub version: IpVersion,
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for RandomIpConfig {
    fn default() -> Self {
        Self {
            version: IpVersion::V4,
            count: default_count(),
        }
    }
}

/// Addresses drawn uniformly from the whole v4 or v6 space, reserved
/// ranges included.
pub struct RandomIpGenerator {
    config: RandomIpConfig,
}

impl RandomIpGenerator {
    pub fn new(config: RandomIpConfig) -> Self {
        Self { config }
    }
}

impl Generator for RandomIpGenerator {
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, TransformError> {
        check_batch_count(self.config.count)?;
        Ok((0..self.config.count)
            .map(|_| match self.config.version {
                IpVersion::V4 => Ipv4Addr::from(rng.random::<u32>()).to_string(),
                IpVersion::V6 => Ipv6Addr::from(rng.random::<u128>()).to_string(),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "random_ip"
    }

    fn randomness(&self) -> RandomnessClass {
        RandomnessClass::NonCryptographic
    }
}
