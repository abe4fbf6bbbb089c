use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;
use crate::library::gesture::{Gesture, GestureAction};
use crate::prelude::{GestureError, GestureResult};
use crate::telemetry::log::LogManager;

/// On-disk record for a single gesture. The raw captured points are
/// what survives a round trip; the direction descriptor is recomputed
/// on load and never persisted.
#[derive(Debug, Serialize, Deserialize)]
struct GestureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    /// Base64 of the point sequence as raw little-endian f64 bytes,
    /// x then y per point.
    data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<GestureAction>,
    #[serde(default)]
    image_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct LibraryDocument {
    gestures: Vec<GestureRecord>,
}

fn encode_points(points: &[Point]) -> String {
    let mut bytes = Vec::with_capacity(points.len() * 16);
    for point in points {
        bytes.extend_from_slice(&point.x.to_le_bytes());
        bytes.extend_from_slice(&point.y.to_le_bytes());
    }
    BASE64.encode(bytes)
}

fn decode_points(data: &str) -> GestureResult<Vec<Point>> {
    let bytes = BASE64
        .decode(data)
        .map_err(|e| GestureError::Format(format!("point data is not valid base64: {}", e)))?;
    if bytes.len() % 16 != 0 {
        return Err(GestureError::Format(format!(
            "point data holds {} byte(s), not a whole number of coordinate pairs",
            bytes.len()
        )));
    }
    let mut points = Vec::with_capacity(bytes.len() / 16);
    for chunk in bytes.chunks_exact(16) {
        let mut x_bytes = [0u8; 8];
        let mut y_bytes = [0u8; 8];
        x_bytes.copy_from_slice(&chunk[..8]);
        y_bytes.copy_from_slice(&chunk[8..]);
        points.push(Point::new(
            f64::from_le_bytes(x_bytes),
            f64::from_le_bytes(y_bytes),
        ));
    }
    Ok(points)
}

/// Serializes the full ordered library to `path`, overwriting any
/// existing record.
pub fn save(path: &Path, gestures: &[Gesture]) -> GestureResult<()> {
    let records: Vec<GestureRecord> = gestures
        .iter()
        .map(|gesture| GestureRecord {
            name: if gesture.description.is_empty() {
                None
            } else {
                Some(gesture.description.clone())
            },
            data: encode_points(gesture.points()),
            action: if gesture.action.is_empty() {
                None
            } else {
                Some(gesture.action.clone())
            },
            image_path: gesture.image_path.clone(),
        })
        .collect();

    let document = LibraryDocument { gestures: records };
    let contents = serde_json::to_string_pretty(&document)
        .map_err(|e| GestureError::Storage(format!("encoding library document: {}", e)))?;
    fs::write(path, contents)
        .map_err(|e| GestureError::Storage(format!("writing {}: {}", path.display(), e)))
}

/// Deserializes a library record. A missing file is the expected
/// first-run state and yields an empty library; a structurally invalid
/// record is an error rather than a silently truncated library.
pub fn load(path: &Path, resample_points: usize) -> GestureResult<Vec<Gesture>> {
    let logger = LogManager::new();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            logger.record(&format!(
                "no gesture library at {}, starting empty",
                path.display()
            ));
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(GestureError::Storage(format!(
                "reading {}: {}",
                path.display(),
                e
            )))
        }
    };

    let document: LibraryDocument = serde_json::from_str(&contents)
        .map_err(|e| GestureError::Format(format!("parsing {}: {}", path.display(), e)))?;

    let mut gestures = Vec::with_capacity(document.gestures.len());
    for (index, record) in document.gestures.into_iter().enumerate() {
        let in_record =
            |e: GestureError| GestureError::Format(format!("gesture record {}: {}", index, e));
        let points = decode_points(&record.data).map_err(in_record)?;
        let gesture = Gesture::from_points(points, resample_points)
            .map_err(in_record)?
            .with_description(record.name.unwrap_or_default())
            .with_action(record.action.unwrap_or_default())
            .with_image_path(record.image_path);
        gestures.push(gesture);
    }
    Ok(gestures)
}
