// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Site header scripts managed from the admin dashboard.
//!
//! Only the record shape and the store contract live here. A hosted
//! database implements [`HeaderScriptStore`] in production; the in-memory
//! store backs tests and the CLI.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::errors::AdminError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderScript {
    pub id: String,
    pub label: String,
    pub script: String,
    #[serde(default)]
    pub is_enabled: bool,
}

/// Storage contract for header scripts.
pub trait HeaderScriptStore: Send + Sync {
    /// All scripts, ordered by id.
    fn list(&self) -> Result<Vec<HeaderScript>, AdminError>;

    fn get(&self, id: &str) -> Result<HeaderScript, AdminError>;

    /// Insert a new script or replace the one with the same id.
    fn upsert(&self, script: HeaderScript) -> Result<(), AdminError>;

    fn set_enabled(&self, id: &str, is_enabled: bool) -> Result<(), AdminError>;

    fn remove(&self, id: &str) -> Result<HeaderScript, AdminError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryHeaderScriptStore {
    inner: Arc<RwLock<BTreeMap<String, HeaderScript>>>,
}

impl InMemoryHeaderScriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scripts(scripts: impl IntoIterator<Item = HeaderScript>) -> Self {
        let map = scripts
            .into_iter()
            .map(|script| (script.id.clone(), script))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }
}

fn poisoned<T>(_: T) -> AdminError {
    AdminError::Backend("lock poisoned".to_string())
}

impl HeaderScriptStore for InMemoryHeaderScriptStore {
    fn list(&self) -> Result<Vec<HeaderScript>, AdminError> {
        let scripts = self.inner.read().map_err(poisoned)?;
        Ok(scripts.values().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<HeaderScript, AdminError> {
        let scripts = self.inner.read().map_err(poisoned)?;
        scripts
            .get(id)
            .cloned()
            .ok_or_else(|| AdminError::NotFound(id.to_string()))
    }

    fn upsert(&self, script: HeaderScript) -> Result<(), AdminError> {
        if script.id.trim().is_empty() {
            return Err(AdminError::EmptyId);
        }
        let mut scripts = self.inner.write().map_err(poisoned)?;
        scripts.insert(script.id.clone(), script);
        Ok(())
    }

    fn set_enabled(&self, id: &str, is_enabled: bool) -> Result<(), AdminError> {
        let mut scripts = self.inner.write().map_err(poisoned)?;
        let script = scripts
            .get_mut(id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))?;
        script.is_enabled = is_enabled;
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<HeaderScript, AdminError> {
        let mut scripts = self.inner.write().map_err(poisoned)?;
        scripts
            .remove(id)
            .ok_or_else(|| AdminError::NotFound(id.to_string()))
    }
}

/// Concatenates the enabled scripts, in the order given, one per line.
pub fn render_enabled_scripts(scripts: &[HeaderScript]) -> String {
    scripts
        .iter()
        .filter(|script| script.is_enabled)
        .map(|script| script.script.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
