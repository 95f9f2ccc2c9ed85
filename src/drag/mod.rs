//! Glue between a drag-and-drop library and the board reconciler.
//!
//! The library only ever detects gestures. It never gets to move rendered
//! elements itself: every drop is cancelled before the reconciler publishes
//! the new state, so the state-driven render stays the only writer.

pub mod adapter;

pub use adapter::DragGestureAdapter;

/// Read access to an element's DOM attributes
pub trait ElementAttributes {
    fn attribute(&self, name: &str) -> Option<String>;
}

/// The drag library, treated as a black box
pub trait DragLibrary {
    type Zone: ElementAttributes;

    /// Starts monitoring drag gestures over the given drop zones
    fn watch(&mut self, zones: Vec<Self::Zone>);

    /// Suppresses the library's own relocation of the element in the current gesture
    fn cancel(&mut self);

    /// Removes every listener and releases the library's gesture bookkeeping
    fn destroy(&mut self);
}
