use std::f64::consts::PI;

use crate::geometry::point::Point;
use crate::geometry::resample::resample;
use crate::prelude::GestureResult;

/// Converts resampled points into direction angles normalized to
/// `[-1, 1]` (atan2 of each segment divided by pi).
///
/// The representation is periodic with period 2, so angle differences
/// wrap at the +/-1 boundary and can be compared by plain subtraction
/// with a wraparound correction. A zero-length segment yields direction
/// 0 by convention.
pub fn directions(resampled: &[Point]) -> Vec<f64> {
    resampled
        .windows(2)
        .map(|pair| {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            if dx == 0.0 && dy == 0.0 {
                0.0
            } else {
                dy.atan2(dx) / PI
            }
        })
        .collect()
}

/// Full normalization pipeline: raw captured points to a fixed-length
/// shape descriptor with exactly `n - 1` entries.
///
/// The descriptor is invariant under translation and uniform scaling of
/// the input stroke; rotating the stroke shifts every direction by a
/// constant offset instead.
pub fn normalize(points: &[Point], n: usize) -> GestureResult<Vec<f64>> {
    let resampled = resample(points, n)?;
    Ok(directions(&resampled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::GestureError;

    fn horizontal_stroke(count: usize) -> Vec<Point> {
        (0..count).map(|i| Point::new(i as f64 * 10.0, 0.0)).collect()
    }

    #[test]
    fn normalize_yields_fixed_descriptor_length() {
        for count in [2, 3, 17, 50, 200] {
            let descriptor = normalize(&horizontal_stroke(count), 32).unwrap();
            assert_eq!(descriptor.len(), 31);
        }
    }

    #[test]
    fn normalize_rejects_short_input() {
        let err = normalize(&horizontal_stroke(1), 32).unwrap_err();
        assert!(matches!(err, GestureError::InsufficientData(_)));
    }

    #[test]
    fn horizontal_stroke_has_zero_directions() {
        let descriptor = normalize(&horizontal_stroke(12), 32).unwrap();
        assert!(descriptor.iter().all(|d| d.abs() < 1e-12));
    }

    #[test]
    fn vertical_stroke_has_half_pi_directions() {
        let points: Vec<Point> = (0..12).map(|i| Point::new(0.0, i as f64 * 7.0)).collect();
        let descriptor = normalize(&points, 32).unwrap();
        assert!(descriptor.iter().all(|d| (d - 0.5).abs() < 1e-12));
    }

    #[test]
    fn descriptor_is_translation_invariant() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(25.0, 5.0),
            Point::new(40.0, 20.0),
        ];
        let shifted: Vec<Point> = points
            .iter()
            .map(|p| Point::new(p.x + 312.0, p.y - 1250.0))
            .collect();
        let a = normalize(&points, 32).unwrap();
        let b = normalize(&shifted, 32).unwrap();
        for (da, db) in a.iter().zip(&b) {
            assert!((da - db).abs() < 1e-9);
        }
    }

    #[test]
    fn descriptor_is_scale_invariant() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(25.0, 5.0),
            Point::new(40.0, 20.0),
        ];
        let scaled: Vec<Point> = points.iter().map(|p| Point::new(p.x * 4.0, p.y * 4.0)).collect();
        let a = normalize(&points, 32).unwrap();
        let b = normalize(&scaled, 32).unwrap();
        for (da, db) in a.iter().zip(&b) {
            assert!((da - db).abs() < 1e-9);
        }
    }

    #[test]
    fn rotation_shifts_directions_by_constant_offset() {
        // Quarter-turn rotation: (x, y) -> (-y, x) adds 0.5 to every
        // direction of this diagonal stroke.
        let points: Vec<Point> = (0..8).map(|i| Point::new(i as f64, i as f64)).collect();
        let rotated: Vec<Point> = points.iter().map(|p| Point::new(-p.y, p.x)).collect();
        let a = normalize(&points, 16).unwrap();
        let b = normalize(&rotated, 16).unwrap();
        for (da, db) in a.iter().zip(&b) {
            assert!((db - da - 0.5).abs() < 1e-9);
        }
    }
}
