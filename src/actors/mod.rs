pub mod overlay;

// Re-export actor types for easier import
pub use overlay::{GetView, KeyPress, OverlayActor};
