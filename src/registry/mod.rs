// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod factory;

pub use factory::{parse_options, ToolFactory, ToolOptions};
