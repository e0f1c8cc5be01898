//! Frame scheduling.
//!
//! The animator never drives its own clock. It asks a [`FrameScheduler`] for
//! one callback per display refresh and the host reports, through
//! [`FrameScheduler::take_due`], when that refresh has arrived.

/// Identifies one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Source of display-refresh callbacks.
pub trait FrameScheduler {
    /// Request a single callback at the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Drop a request that has not fired yet.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Fire the pending request if its refresh has arrived.
    ///
    /// A fired handle is consumed; it will not be returned again.
    fn take_due(&mut self, now_ms: u64) -> Option<FrameHandle>;
}

/// Scheduler stepped by hand: every `take_due` is a refresh.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Option<FrameHandle>,
    /// Total requests made.
    pub requested: usize,
    /// Total requests cancelled before firing.
    pub cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request waiting to fire, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.requested += 1;
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }

    fn take_due(&mut self, _now_ms: u64) -> Option<FrameHandle> {
        self.pending.take()
    }
}

/// Scheduler that refreshes at a fixed rate.
#[derive(Debug)]
pub struct IntervalScheduler {
    interval_ms: u64,
    next_id: u64,
    pending: Option<FrameHandle>,
    last_fire_ms: Option<u64>,
}

impl IntervalScheduler {
    /// Create a scheduler refreshing `fps` times per second (at least once).
    pub fn new(fps: u32) -> Self {
        Self {
            interval_ms: 1000 / u64::from(fps.max(1)),
            next_id: 0,
            pending: None,
            last_fire_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Milliseconds until the pending request fires, if one is pending.
    pub fn time_until_due(&self, now_ms: u64) -> Option<u64> {
        self.pending?;
        Some(
            self.last_fire_ms
                .map(|last| (last + self.interval_ms).saturating_sub(now_ms))
                .unwrap_or(0),
        )
    }
}

impl FrameScheduler for IntervalScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
        }
    }

    fn take_due(&mut self, now_ms: u64) -> Option<FrameHandle> {
        if self.time_until_due(now_ms)? > 0 {
            return None;
        }
        self.last_fire_ms = Some(now_ms);
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_scheduler_fires_once() {
        let mut scheduler = ManualScheduler::new();
        assert_eq!(scheduler.take_due(0), None);
        let handle = scheduler.request_frame();
        assert_eq!(scheduler.take_due(0), Some(handle));
        assert_eq!(scheduler.take_due(0), None);
    }

    #[test]
    fn test_manual_scheduler_cancel() {
        let mut scheduler = ManualScheduler::new();
        let stale = scheduler.request_frame();
        let handle = scheduler.request_frame();
        scheduler.cancel_frame(stale);
        assert_eq!(scheduler.cancelled, 0);
        scheduler.cancel_frame(handle);
        assert_eq!(scheduler.cancelled, 1);
        assert_eq!(scheduler.take_due(0), None);
    }

    #[test]
    fn test_interval_scheduler_paces_frames() {
        let mut scheduler = IntervalScheduler::new(50);
        assert_eq!(scheduler.interval_ms(), 20);

        let first = scheduler.request_frame();
        assert_eq!(scheduler.take_due(0), Some(first));

        let second = scheduler.request_frame();
        assert_eq!(scheduler.time_until_due(5), Some(15));
        assert_eq!(scheduler.take_due(5), None);
        assert_eq!(scheduler.take_due(20), Some(second));
        assert_eq!(scheduler.time_until_due(25), None);
    }

    #[test]
    fn test_interval_scheduler_zero_fps() {
        assert_eq!(IntervalScheduler::new(0).interval_ms(), 1000);
    }
}
