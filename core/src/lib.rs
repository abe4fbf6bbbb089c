//! Gesture-recognition core for the mouse-gesture launcher.
//!
//! Converts raw captured mouse strokes into fixed-length direction
//! descriptors, scores them against a stored gesture library, and owns
//! the library's persistence format. The drawing surface, hotkey host,
//! and process launcher are external collaborators behind narrow seams.

pub mod geometry;
pub mod library;
pub mod matching;
pub mod prelude;
pub mod telemetry;

pub use prelude::{ActionExecutor, EngineConfig, GestureError, GestureResult};
