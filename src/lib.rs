// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod admin;      // header-script boundary
pub mod config;     // recipe files + limits
pub mod engine;     // recipe runner
pub mod errors;     // error handling
pub mod generators; // random value generators
pub mod observability;
pub mod registry;   // tool lookup by name
pub mod session;    // interactive converter state
pub mod stats;
pub mod tools;      // text transforms and analyzers
pub mod traits;     // unified abstractions
