//! Extension trait for mutating a signal without holding its borrow.
//!
//! `Signal::write()` keeps the signal mutably borrowed until the guard drops.
//! Upload transitions call back into the parent component while they run, and a
//! parent that reads this component's state during that callback would hit a
//! borrow conflict. `mutate` works on a copy instead:
//!
//! ```ignore
//! let ticket = view.mutate(|view| view.begin_upload());
//!
//! view.mutate(|view| {
//!     view.clear(&mut reporter);
//! });
//! ```

use dioxus::prelude::*;

/// Mutation helper implemented for every `Signal<T>` where `T: Clone + 'static`.
pub trait SignalExt<T: Clone + 'static> {
    /// Mutates a copy of the value, writes it back, and returns what `f` returned.
    ///
    /// No borrow of the signal is held while `f` runs.
    fn mutate<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

impl<T: Clone + 'static> SignalExt<T> for Signal<T> {
    fn mutate<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut value = self.read().clone();
        let result = f(&mut value);
        self.set(value);
        result
    }
}

// Note: no unit tests here; exercising a Signal needs a Dioxus runtime. The
// transitions this wraps are covered in resume-upload-core.
