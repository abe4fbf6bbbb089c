use crate::geometry::point::Point;
use crate::prelude::{GestureError, GestureResult};

/// Resamples a polyline into exactly `n` points evenly spaced by arc
/// length along the original path.
///
/// The output is independent of the input's sampling density, which is
/// what makes strokes drawn at different speeds comparable. A stroke
/// whose points all coincide has no shape; it degenerates to `n` copies
/// of the first point.
pub fn resample(points: &[Point], n: usize) -> GestureResult<Vec<Point>> {
    if points.len() < 2 {
        return Err(GestureError::InsufficientData(format!(
            "{} point(s) captured, need at least 2",
            points.len()
        )));
    }
    if n < 2 {
        return Err(GestureError::InsufficientData(format!(
            "resample target {} too small, need at least 2",
            n
        )));
    }

    let total = path_length(points);
    if total == 0.0 {
        return Ok(vec![points[0]; n]);
    }

    let interval = total / (n - 1) as f64;
    let mut resampled = Vec::with_capacity(n);
    resampled.push(points[0]);

    let mut accumulated = 0.0;
    let mut prev = points[0];
    let mut i = 1;
    while i < points.len() {
        let segment = prev.dist(points[i]);
        if accumulated + segment >= interval {
            // Interpolate the next evenly spaced sample inside this
            // segment; stay on it until the remainder is consumed.
            let t = (interval - accumulated) / segment;
            let next = Point::new(
                prev.x + t * (points[i].x - prev.x),
                prev.y + t * (points[i].y - prev.y),
            );
            resampled.push(next);
            prev = next;
            accumulated = 0.0;
        } else {
            accumulated += segment;
            prev = points[i];
            i += 1;
        }
    }

    // Floating-point drift can leave the final sample short.
    while resampled.len() < n {
        resampled.push(points[points.len() - 1]);
    }
    resampled.truncate(n);
    Ok(resampled)
}

fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|pair| pair[0].dist(pair[1])).sum()
}
