pub mod codec;
pub mod gesture;
pub mod store;

pub use gesture::{Gesture, GestureAction};
pub use store::GestureStore;
