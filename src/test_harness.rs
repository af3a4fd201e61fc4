//! Shared test fixtures.
//!
//! `ManualObserver` stands in for a real measurement source: tests attach
//! measurers to it and push sizes by hand, which makes the asynchronous
//! measure-report-apply loop fully deterministic.

use crate::measure::{Observation, SizeCallback, SizeObserver};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct ManualObserverInner {
    callback: Option<SizeCallback>,
    generation: u64,
    attach_count: usize,
}

/// Hand-driven size observer for one conceptual element.
///
/// Holds at most one active observation; a newer `observe` replaces the
/// previous callback the way re-observing the same element would.
#[derive(Default)]
pub struct ManualObserver {
    inner: Rc<RefCell<ManualObserverInner>>,
}

impl ManualObserver {
    /// Create an observer with no active observation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a size to the active observation, if any.
    pub fn emit(&self, size: f64) {
        if let Some(callback) = &mut self.inner.borrow_mut().callback {
            callback(size);
        }
    }

    /// How many times `observe` has been called.
    pub fn attach_count(&self) -> usize {
        self.inner.borrow().attach_count
    }

    /// Number of live observations (0 or 1).
    pub fn active_count(&self) -> usize {
        usize::from(self.inner.borrow().callback.is_some())
    }
}

impl SizeObserver for ManualObserver {
    fn observe(&mut self, on_size: SizeCallback) -> Observation {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.attach_count += 1;
            inner.callback = Some(on_size);
            inner.generation
        };

        // Cancel clears the callback only while this observation is still
        // the active one; a replacing observation must survive the old
        // guard's teardown.
        let weak = Rc::downgrade(&self.inner);
        Observation::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.borrow_mut();
                if inner.generation == generation {
                    inner.callback = None;
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_reaches_active_callback() {
        let mut observer = ManualObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let _observation = observer.observe(Box::new(move |size| sink.borrow_mut().push(size)));
        observer.emit(12.0);
        observer.emit(24.0);

        assert_eq!(*seen.borrow(), vec![12.0, 24.0]);
    }

    #[test]
    fn dropping_observation_stops_delivery() {
        let mut observer = ManualObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let observation = observer.observe(Box::new(move |size| sink.borrow_mut().push(size)));
        drop(observation);
        observer.emit(12.0);

        assert!(seen.borrow().is_empty());
        assert_eq!(observer.active_count(), 0);
    }

    #[test]
    fn replacing_observation_survives_old_guard_teardown() {
        let mut observer = ManualObserver::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let old = observer.observe(Box::new(|_| {}));
        let sink = Rc::clone(&seen);
        let _new = observer.observe(Box::new(move |size| sink.borrow_mut().push(size)));

        drop(old);
        observer.emit(9.0);

        assert_eq!(*seen.borrow(), vec![9.0]);
        assert_eq!(observer.attach_count(), 2);
    }

    #[test]
    fn observer_can_outlive_nothing_without_panics() {
        let mut observer = ManualObserver::new();
        let observation = observer.observe(Box::new(|_| {}));
        drop(observer);
        drop(observation); // weak upgrade fails quietly
    }
}
