// src/fs/defaults.rs
//! Expansion of configured default locations.

use std::path::Path;

use tracing::debug;

use super::{
    browser::list_entries,
    entry::{Entry, LocationSpec},
};

/// Expand `specs` under `root` into the locations that currently exist.
///
/// Output follows spec order, and filesystem order inside a wildcard. Callers
/// sort afterwards.
pub fn expand_defaults(root: &Path, specs: &[LocationSpec]) -> Vec<Entry> {
    specs
        .iter()
        .flat_map(|spec| candidates(root, spec))
        .filter(|entry| {
            let exists = entry.path.exists();
            if !exists {
                debug!(path = %entry.path.display(), "default location missing, skipping");
            }
            exists
        })
        .collect()
}

fn candidates(root: &Path, spec: &LocationSpec) -> Vec<Entry> {
    let base = spec.base(root);
    match spec {
        LocationSpec::Literal(_) => vec![Entry::from_path(base)],
        LocationSpec::ChildrenOf(_) => list_entries(&base),
    }
}
