pub mod matcher;
pub mod recognizer;

pub use matcher::DirectionMatcher;
pub use recognizer::{Recognition, Recognizer};
