// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod admin;
mod config;
mod execution;
mod session;
mod transform;

pub use admin::AdminError;
pub use config::{ConfigError, ValidationError};
pub use execution::ExecutionError;
pub use session::ClipboardError;
pub use transform::{TransformError, TransformResult};
