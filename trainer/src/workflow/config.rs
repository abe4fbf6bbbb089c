use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strokecore::prelude::EngineConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// Fixed resample resolution for every descriptor.
    pub resample_points: usize,
    /// Best score must fall below this for a match to count.
    pub match_threshold: f64,
    /// Candidates scoring below this against the library are rejected
    /// as near-duplicates in define mode.
    pub duplicate_threshold: f64,
    /// Gesture library file.
    pub library: PathBuf,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        resample_points: usize,
        match_threshold: f64,
        duplicate_threshold: f64,
        library: PathBuf,
    ) -> Self {
        Self {
            resample_points,
            match_threshold,
            duplicate_threshold,
            library,
        }
    }

    pub fn to_engine_config(&self) -> EngineConfig {
        EngineConfig {
            resample_points: self.resample_points,
        }
    }
}
