// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod generator;
pub mod transform;

pub use generator::{Generator, RandomnessClass};
pub use transform::{ToolIntent, Transform};
