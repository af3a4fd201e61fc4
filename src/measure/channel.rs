//! Single-slot conduit carrying size reports from row measurers to the
//! list instance currently rendering them.

use crate::model::RowKey;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// One measured-size report for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    /// Identity of the measured row.
    pub id: RowKey,
    /// Observed content size. Always positive; measurers filter the rest.
    pub size: f64,
}

/// Queue of size reports awaiting application.
///
/// Reports are pushed on the measurement turn and drained by the controller
/// on its own turn, which is what makes "row size changed" an event that
/// arrives after the row already rendered once at an estimated size.
#[derive(Debug, Clone, Default)]
pub struct ReportQueue {
    reports: Rc<RefCell<VecDeque<SizeReport>>>,
}

impl ReportQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue one report.
    pub fn push(&self, report: SizeReport) {
        self.reports.borrow_mut().push_back(report);
    }

    /// Take every pending report, in arrival order.
    pub fn drain(&self) -> Vec<SizeReport> {
        self.reports.borrow_mut().drain(..).collect()
    }

    /// Number of pending reports.
    pub fn len(&self) -> usize {
        self.reports.borrow().len()
    }

    /// True when no report is pending.
    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

/// Contextual single-slot channel between measurers and a list instance.
///
/// Clones share the slot. A connected channel forwards reports into the
/// occupant's [`ReportQueue`]; a disconnected channel drops them silently -
/// a measurer with no list instance above it is degraded, not an error.
#[derive(Debug, Clone, Default)]
pub struct SizeChannel {
    slot: Rc<RefCell<Option<ReportQueue>>>,
}

impl SizeChannel {
    /// Create a channel with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Occupy the slot, replacing any previous occupant.
    pub fn connect(&self, queue: ReportQueue) {
        *self.slot.borrow_mut() = Some(queue);
    }

    /// Empty the slot; subsequent reports are dropped.
    pub fn disconnect(&self) {
        *self.slot.borrow_mut() = None;
    }

    /// Whether a list instance is currently connected.
    pub fn is_connected(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Deliver a report to the connected queue.
    ///
    /// Returns `false` when the slot is empty and the report was dropped.
    pub fn report(&self, id: RowKey, size: f64) -> bool {
        match &*self.slot.borrow() {
            Some(queue) => {
                queue.push(SizeReport { id, size });
                true
            }
            None => {
                tracing::trace!(%id, size, "size report dropped: no list connected");
                false
            }
        }
    }
}
