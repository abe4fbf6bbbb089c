use std::path::Path;

use crate::library::codec;
use crate::library::gesture::Gesture;
use crate::prelude::GestureResult;

/// Insertion-ordered gesture library.
///
/// Entries are unique only by identity; duplicate descriptions are
/// allowed. Iteration order is registration order, which is what gives
/// recognition its deterministic tie-breaking.
#[derive(Debug, Default)]
pub struct GestureStore {
    gestures: Vec<Gesture>,
}

impl GestureStore {
    pub fn new() -> Self {
        Self {
            gestures: Vec::new(),
        }
    }

    pub fn add(&mut self, gesture: Gesture) {
        self.gestures.push(gesture);
    }

    pub fn clear(&mut self) {
        self.gestures.clear();
    }

    pub fn count(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gesture> {
        self.gestures.iter()
    }

    /// Serializes the full library to `path`, overwriting any existing
    /// record. The in-memory library is unchanged on failure.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GestureResult<()> {
        codec::save(path.as_ref(), &self.gestures)
    }

    /// Loads a persisted library, recomputing every gesture's
    /// descriptor at `resample_points` resolution. A missing file
    /// yields an empty store.
    pub fn load<P: AsRef<Path>>(path: P, resample_points: usize) -> GestureResult<Self> {
        let gestures = codec::load(path.as_ref(), resample_points)?;
        Ok(Self { gestures })
    }
}
