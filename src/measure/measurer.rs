//! Per-row measurement lifecycle.

use super::channel::SizeChannel;
use super::observer::{Observation, SizeObserver};
use crate::model::RowKey;

/// Binds one rendered row to a size observation and forwards measured sizes
/// through the [`SizeChannel`].
///
/// A measurer holds at most one live observation. Whenever the row's
/// identity or width changes the current observation is cancelled before a
/// new one can be attached, so there are never duplicate registrations and
/// never a stale callback reporting under an old identity. Dropping the
/// measurer (the row left the rendered window) cancels the observation.
///
/// Observed sizes that are zero or negative are discarded as transient
/// measurements of hidden or not-yet-laid-out content; the row keeps its
/// previous (or estimated) size.
#[derive(Debug)]
pub struct RowMeasurer {
    id: RowKey,
    width: f64,
    channel: SizeChannel,
    observation: Option<Observation>,
}

impl RowMeasurer {
    /// Create a detached measurer for the row `id` at the given width.
    pub fn new(id: RowKey, width: f64, channel: SizeChannel) -> Self {
        Self {
            id,
            width,
            channel,
            observation: None,
        }
    }

    /// Identity of the measured row.
    pub fn id(&self) -> &RowKey {
        &self.id
    }

    /// Width the row is being measured at.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Whether an observation is currently live.
    pub fn is_attached(&self) -> bool {
        self.observation.is_some()
    }

    /// Point the measurer at a (possibly) different row identity or width.
    ///
    /// When either changed, the current observation is cancelled immediately
    /// and `true` is returned: the caller must re-[`attach`](Self::attach)
    /// to resume measurement. Unchanged targets are a no-op.
    pub fn set_target(&mut self, id: RowKey, width: f64) -> bool {
        if self.id == id && self.width == width {
            return false;
        }
        self.observation = None;
        self.id = id;
        self.width = width;
        true
    }

    /// Start observing through `observer`.
    ///
    /// Any previous observation is cancelled first. The new observation
    /// forwards every positive observed size as a report for this row.
    pub fn attach(&mut self, observer: &mut dyn SizeObserver) {
        self.observation = None;

        let channel = self.channel.clone();
        let id = self.id.clone();
        self.observation = Some(observer.observe(Box::new(move |size| {
            if size > 0.0 {
                channel.report(id.clone(), size);
            }
        })));
    }

    /// Cancel the current observation, if any.
    pub fn detach(&mut self) {
        self.observation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::channel::ReportQueue;
    use crate::test_harness::ManualObserver;

    fn measurer_with_queue() -> (RowMeasurer, ReportQueue, SizeChannel) {
        let channel = SizeChannel::new();
        let queue = ReportQueue::new();
        channel.connect(queue.clone());
        let measurer = RowMeasurer::new(RowKey::new("row-1"), 300.0, channel.clone());
        (measurer, queue, channel)
    }

    #[test]
    fn attach_then_emit_delivers_report() {
        let (mut measurer, queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();

        measurer.attach(&mut observer);
        assert!(measurer.is_attached());
        observer.emit(42.0);

        let reports = queue.drain();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, RowKey::new("row-1"));
        assert_eq!(reports[0].size, 42.0);
    }

    #[test]
    fn non_positive_sizes_are_filtered() {
        let (mut measurer, queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();

        measurer.attach(&mut observer);
        observer.emit(0.0);
        observer.emit(-5.0);

        assert!(queue.is_empty());

        observer.emit(12.0);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn reattach_cancels_previous_observation() {
        let (mut measurer, _queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();

        measurer.attach(&mut observer);
        measurer.attach(&mut observer);

        assert_eq!(observer.attach_count(), 2);
        assert_eq!(observer.active_count(), 1);
    }

    #[test]
    fn set_target_with_same_identity_is_noop() {
        let (mut measurer, _queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();
        measurer.attach(&mut observer);

        assert!(!measurer.set_target(RowKey::new("row-1"), 300.0));
        assert!(measurer.is_attached());
    }

    #[test]
    fn set_target_with_new_identity_detaches() {
        let (mut measurer, queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();
        measurer.attach(&mut observer);

        assert!(measurer.set_target(RowKey::new("row-2"), 300.0));
        assert!(!measurer.is_attached());
        assert_eq!(observer.active_count(), 0);

        // A stale emit reaches no one.
        observer.emit(50.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn set_target_with_new_width_detaches() {
        let (mut measurer, _queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();
        measurer.attach(&mut observer);

        assert!(measurer.set_target(RowKey::new("row-1"), 200.0));
        assert!(!measurer.is_attached());
    }

    #[test]
    fn reports_after_retarget_use_new_identity() {
        let (mut measurer, queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();
        measurer.attach(&mut observer);

        measurer.set_target(RowKey::new("row-2"), 300.0);
        measurer.attach(&mut observer);
        observer.emit(18.0);

        let reports = queue.drain();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, RowKey::new("row-2"));
    }

    #[test]
    fn drop_cancels_observation() {
        let (mut measurer, _queue, _channel) = measurer_with_queue();
        let mut observer = ManualObserver::new();
        measurer.attach(&mut observer);
        assert_eq!(observer.active_count(), 1);

        drop(measurer);
        assert_eq!(observer.active_count(), 0);
    }

    #[test]
    fn measurer_without_connected_list_stays_quiet() {
        let channel = SizeChannel::new(); // nothing connected
        let mut measurer = RowMeasurer::new(RowKey::new("row-1"), 100.0, channel);
        let mut observer = ManualObserver::new();

        measurer.attach(&mut observer);
        observer.emit(30.0); // dropped silently, no panic
    }
}
