//! Measurement boundary: size observation with scoped teardown.

use std::fmt;

/// Callback invoked with a row's content size whenever it changes.
pub type SizeCallback = Box<dyn FnMut(f64)>;

/// Source of asynchronous size measurements for one piece of rendered
/// content.
///
/// Implementations wrap whatever the host environment offers for watching a
/// rendered element's content-box size: a resize observation in a browser
/// shell, a post-layout hook in a retained-mode UI, or a synchronous text
/// measurer in a terminal. The engine only requires that `on_size` is
/// invoked with the current size on every change, and that dropping the
/// returned [`Observation`] stops further invocations.
pub trait SizeObserver {
    /// Start observing; report size changes through `on_size` until the
    /// returned guard is dropped.
    fn observe(&mut self, on_size: SizeCallback) -> Observation;
}

/// RAII guard for one active observation.
///
/// Dropping the guard runs the cancel hook exactly once, covering every
/// teardown path: row identity changes, rows leaving the rendered window,
/// and list teardown.
pub struct Observation {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Observation {
    /// Guard that runs `cancel` when dropped.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Guard for observers with no teardown to perform.
    pub fn untracked() -> Self {
        Self { cancel: None }
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn drop_runs_cancel_hook() {
        let cancelled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&cancelled);

        let observation = Observation::new(move || flag.set(true));
        assert!(!cancelled.get());

        drop(observation);
        assert!(cancelled.get());
    }

    #[test]
    fn untracked_guard_drops_quietly() {
        drop(Observation::untracked());
    }

    #[test]
    fn replacing_a_guard_cancels_the_old_one() {
        let cancels = Rc::new(Cell::new(0u32));

        let first_counter = Rc::clone(&cancels);
        let mut slot = Some(Observation::new(move || {
            first_counter.set(first_counter.get() + 1)
        }));

        let second_counter = Rc::clone(&cancels);
        slot = Some(Observation::new(move || {
            second_counter.set(second_counter.get() + 1)
        }));
        assert_eq!(cancels.get(), 1);

        drop(slot);
        assert_eq!(cancels.get(), 2);
    }
}
