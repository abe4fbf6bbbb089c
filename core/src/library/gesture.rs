use serde::{Deserialize, Serialize};

use crate::geometry::descriptor::normalize;
use crate::geometry::point::Point;
use crate::prelude::GestureResult;

/// Command descriptor attached to a gesture. All three fields are
/// independently optional; an all-empty action is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureAction {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub arguments: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_in: String,
}

impl GestureAction {
    pub fn new(
        path: impl Into<String>,
        arguments: impl Into<String>,
        start_in: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            arguments: arguments.into(),
            start_in: start_in.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty() && self.arguments.is_empty() && self.start_in.is_empty()
    }
}

/// A committed stroke: the raw captured points plus the direction
/// descriptor derived from them.
///
/// The descriptor is computed once at construction and never mutated
/// independently of the points; it always holds exactly one value less
/// than the configured resample count.
#[derive(Debug, Clone)]
pub struct Gesture {
    points: Vec<Point>,
    directions: Vec<f64>,
    pub description: String,
    pub action: GestureAction,
    pub image_path: String,
}

impl Gesture {
    /// Builds a gesture from a completed capture of at least two points.
    pub fn from_points(points: Vec<Point>, resample_points: usize) -> GestureResult<Self> {
        let directions = normalize(&points, resample_points)?;
        Ok(Self {
            points,
            directions,
            description: String::new(),
            action: GestureAction::default(),
            image_path: String::new(),
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn directions(&self) -> &[f64] {
        &self.directions
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_action(mut self, action: GestureAction) -> Self {
        self.action = action;
        self
    }

    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = image_path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::GestureError;

    #[test]
    fn gesture_descriptor_has_invariant_length() {
        let points = vec![Point::new(0.0, 0.0), Point::new(50.0, 10.0)];
        let gesture = Gesture::from_points(points, 32).unwrap();
        assert_eq!(gesture.directions().len(), 31);
        assert_eq!(gesture.points().len(), 2);
    }

    #[test]
    fn gesture_rejects_insufficient_capture() {
        let err = Gesture::from_points(vec![Point::new(1.0, 2.0)], 32).unwrap_err();
        assert!(matches!(err, GestureError::InsufficientData(_)));
    }

    #[test]
    fn action_emptiness_requires_all_fields_empty() {
        assert!(GestureAction::default().is_empty());
        assert!(!GestureAction::new("", "-v", "").is_empty());
        assert!(!GestureAction::new("/usr/bin/true", "", "").is_empty());
    }
}
