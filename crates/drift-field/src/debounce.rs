//! Trailing-edge debounce.

/// Holds back a value until no newer one has arrived for `delay_ms`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Replace any pending value and restart the quiet window.
    pub fn schedule(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.delay_ms)));
    }

    /// Take the pending value once its quiet window has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        match self.pending {
            Some((_, deadline)) if now_ms >= deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_yields_last_value_once() {
        let mut debouncer = Debouncer::new(200);
        debouncer.schedule(1, 0);
        debouncer.schedule(2, 150);
        debouncer.schedule(3, 300);
        assert_eq!(debouncer.poll(450), None);
        assert_eq!(debouncer.poll(499), None);
        assert_eq!(debouncer.poll(500), Some(3));
        assert_eq!(debouncer.poll(1000), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(200);
        debouncer.schedule("resize", 0);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(1000), None);
    }
}
