//! JSON file loading for actors, catalogues and translation tables.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use laundry_domain::{ActorRecord, RulesetCatalogue};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads and deserialises one JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_actor(path: &Path) -> Result<ActorRecord, LoadError> {
    let actor: ActorRecord = load_json(path)?;
    tracing::debug!(
        path = %path.display(),
        actor = %actor.name,
        items = actor.items.len(),
        "Loaded actor"
    );
    Ok(actor)
}

/// Loads a catalogue file, or the built-in default when no path is given.
pub fn load_catalogue(path: Option<&Path>) -> Result<RulesetCatalogue, LoadError> {
    let Some(path) = path else {
        tracing::debug!("No catalogue configured; using built-in skill list");
        return Ok(RulesetCatalogue::default());
    };
    let catalogue: RulesetCatalogue = load_json(path)?;
    tracing::info!(
        path = %path.display(),
        skills = catalogue.skills.len(),
        talents = catalogue.talents.len(),
        "Loaded ruleset catalogue"
    );
    Ok(catalogue)
}
