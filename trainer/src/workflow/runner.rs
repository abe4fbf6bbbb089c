use anyhow::Context;
use log::info;
use strokecore::geometry::Point;
use strokecore::library::{GestureAction, GestureStore};
use strokecore::matching::Recognizer;
use strokecore::prelude::ActionExecutor;

use crate::workflow::config::WorkflowConfig;

/// Result of a match-mode pass, flattened for reporting.
pub struct MatchOutcome {
    pub score: f64,
    pub description: Option<String>,
    pub matched: bool,
}

/// One interactive session over the persisted library: loads it, runs
/// match or define passes, and saves after accepted definitions.
pub struct Session {
    config: WorkflowConfig,
    recognizer: Recognizer,
}

impl Session {
    /// Loads the persisted library (empty on first run) and prepares a
    /// recognizer over it.
    pub fn open(config: WorkflowConfig) -> anyhow::Result<Self> {
        let store = GestureStore::load(&config.library, config.resample_points)
            .with_context(|| format!("loading gesture library {}", config.library.display()))?;
        info!(
            "loaded {} gesture(s) from {}",
            store.count(),
            config.library.display()
        );
        let recognizer = Recognizer::new(store, config.to_engine_config());
        Ok(Self { config, recognizer })
    }

    /// Match mode: recognize the captured stroke and run its action if
    /// the best score clears the configured threshold. The library is
    /// never mutated here.
    pub fn run_match(
        &self,
        points: Vec<Point>,
        executor: &dyn ActionExecutor,
    ) -> anyhow::Result<MatchOutcome> {
        let input = self
            .recognizer
            .gesture_from_points(points)
            .context("normalizing captured stroke")?;
        let recognition = self.recognizer.recognize(&input);

        let Some(gesture) = recognition.gesture else {
            return Ok(MatchOutcome {
                score: recognition.score,
                description: None,
                matched: false,
            });
        };
        let description = Some(gesture.description.clone());
        if recognition.score >= self.config.match_threshold {
            return Ok(MatchOutcome {
                score: recognition.score,
                description,
                matched: false,
            });
        }

        executor
            .execute(&gesture.action)
            .with_context(|| format!("executing action for \"{}\"", gesture.description))?;
        Ok(MatchOutcome {
            score: recognition.score,
            description,
            matched: true,
        })
    }

    /// Define mode: admit the stroke unless it is a near-duplicate of
    /// an existing gesture, then persist the library.
    pub fn run_define(
        &mut self,
        points: Vec<Point>,
        description: String,
        action: GestureAction,
    ) -> anyhow::Result<bool> {
        let candidate = self
            .recognizer
            .gesture_from_points(points)
            .context("normalizing captured stroke")?
            .with_description(description)
            .with_action(action);

        if !self
            .recognizer
            .admit(candidate, self.config.duplicate_threshold)
        {
            return Ok(false);
        }

        self.recognizer
            .store()
            .save(&self.config.library)
            .with_context(|| format!("saving gesture library {}", self.config.library.display()))?;
        Ok(true)
    }

    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }
}
