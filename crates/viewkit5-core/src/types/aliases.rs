//! Type aliases for commonly used shared-state types.
//!
//! The viewer is single-threaded and event-driven: every mutation of view
//! state happens on the UI/render thread. `Rc<RefCell<T>>` is therefore the
//! sharing primitive for model objects referenced by both controllers and
//! the renderer, and this alias gives that pattern one spelling.

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// The fundamental building block for UI state management: scenes, view
/// states, and controllers all hand these around.
pub type Shared<T> = Rc<RefCell<T>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
