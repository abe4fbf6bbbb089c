use crate::geometry::point::Point;
use crate::library::gesture::Gesture;
use crate::library::store::GestureStore;
use crate::matching::matcher::DirectionMatcher;
use crate::prelude::{EngineConfig, GestureResult};
use crate::telemetry::log::LogManager;
use crate::telemetry::metrics::MetricsRecorder;

/// Best match found by a recognition pass over the store.
#[derive(Debug)]
pub struct Recognition<'a> {
    /// Dissimilarity of the best match; 1 is the worst possible score.
    pub score: f64,
    pub gesture: Option<&'a Gesture>,
}

/// Recognition service: best-match lookup over the gesture store plus
/// the define-mode admission gate.
///
/// Explicitly constructed and owned by its caller; it holds no state
/// beyond the store it wraps, so every call is deterministic given the
/// store's current contents. Callers serialize access (one capture
/// session at a time).
pub struct Recognizer {
    store: GestureStore,
    config: EngineConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Recognizer {
    pub fn new(store: GestureStore, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn store(&self) -> &GestureStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GestureStore {
        &mut self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    /// Normalizes a completed capture at this recognizer's configured
    /// descriptor resolution.
    pub fn gesture_from_points(&self, points: Vec<Point>) -> GestureResult<Gesture> {
        Gesture::from_points(points, self.config.resample_points)
    }

    /// Scans the store in insertion order for the lowest-scoring entry.
    ///
    /// Strict less-than comparison means the earliest-inserted gesture
    /// wins exact ties. An empty store returns score 1 and no gesture.
    /// Recognition never fails; whether the best pair counts as a match
    /// is the caller's threshold policy.
    pub fn recognize(&self, input: &Gesture) -> Recognition<'_> {
        let mut best = Recognition {
            score: 1.0,
            gesture: None,
        };
        for stored in self.store.iter() {
            let score = DirectionMatcher::score(input.directions(), stored.directions());
            if score < best.score {
                best = Recognition {
                    score,
                    gesture: Some(stored),
                };
            }
        }
        self.metrics.record_recognition();
        self.logger
            .record(&format!("recognize: best score {:.4}", best.score));
        best
    }

    /// Define-mode admission: a candidate scoring below `too_similar`
    /// against any stored gesture is rejected as a near-duplicate and
    /// the store is left unchanged; otherwise it is appended.
    pub fn admit(&mut self, candidate: Gesture, too_similar: f64) -> bool {
        let best_score = self.recognize(&candidate).score;
        if best_score < too_similar {
            self.metrics.record_rejection();
            self.logger.warn(&format!(
                "admit: rejected near-duplicate of \"{}\" (score {:.4} < {:.4})",
                candidate.description, best_score, too_similar
            ));
            return false;
        }
        self.store.add(candidate);
        self.metrics.record_admission();
        true
    }
}
