use anyhow::Context;
use std::fs;
use std::path::Path;
use strokecore::geometry::Point;

/// Reads a completed stroke trace: a JSON array of `[x, y]` pairs.
///
/// Stands in for the on-screen capture surface; a trace file is only
/// ever written for a capture session that finished, so abandoned
/// sessions never reach the engine.
pub fn read_trace<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Point>> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading stroke trace {}", path_ref.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing stroke trace {}", path_ref.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn trace_parses_coordinate_pairs() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"[[0.0, 1.5], [10.0, 1.5], [20.25, 3.0]]")
            .unwrap();
        let path = temp.into_temp_path();
        let points = read_trace(&path).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], Point::new(20.25, 3.0));
    }

    #[test]
    fn malformed_trace_is_an_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"[[0.0], [10.0, 1.5]]").unwrap();
        let path = temp.into_temp_path();
        assert!(read_trace(&path).is_err());
    }
}
