// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log lines are built from message structs that implement `Display`, so
//! wording lives in one place instead of being scattered through the tools.
//! Each message also implements `StructuredLog`, which emits it at its
//! fixed level with the struct's fields attached as tracing fields.
//!
//! Messages are organized by subsystem:
//! * `messages::tool` - transform execution and session events
//! * `messages::generator` - random batch generation
//! * `messages::recipe` - recipe runs and their steps
//! * `messages::validation` - recipe loading and validation
//!
//! The library never installs a subscriber; the binary does.
//!
//! ```rust
//! use text_forge::observability::messages::tool::InputRejected;
//!
//! let msg = InputRejected {
//!     size: 2_000_000,
//!     limit: 1_048_576,
//! };
//!
//! tracing::warn!("{}", msg);
//! ```

pub mod messages;
