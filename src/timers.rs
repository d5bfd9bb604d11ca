use std::time::Instant;

/// Identity of a pending one-shot transition. At most one timer per key is
/// live; scheduling again replaces the old deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKey {
    CardAdvance,
    QuizAdvance,
    ToastDismiss,
}

/// Cancelable one-shot timers, polled on each tick of the event loop.
///
/// Deferred screen transitions used to be fire-and-forget callbacks; a
/// stale callback could then mutate state after the user had left the
/// owning screen. Keeping them in an explicit table makes every pending
/// transition cancelable when its screen is exited.
#[derive(Default)]
pub struct PendingTimers {
    entries: Vec<(TimerKey, Instant)>,
}

impl PendingTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, key: TimerKey, fire_at: Instant) {
        self.cancel(key);
        self.entries.push((key, fire_at));
    }

    pub fn cancel(&mut self, key: TimerKey) {
        self.entries.retain(|(k, _)| *k != key);
    }

    #[allow(dead_code)]
    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Remove and return every timer due at `now`, in firing order.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKey> {
        let mut due: Vec<(TimerKey, Instant)> = Vec::new();
        self.entries.retain(|&(key, fire_at)| {
            if fire_at <= now {
                due.push((key, fire_at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, fire_at)| fire_at);
        due.into_iter().map(|(key, _)| key).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn due_timers_fire_once() {
        let mut timers = PendingTimers::new();
        let now = Instant::now();
        timers.schedule(TimerKey::CardAdvance, now + Duration::from_millis(200));

        assert!(timers.take_due(now).is_empty());

        let later = now + Duration::from_millis(250);
        assert_eq!(timers.take_due(later), vec![TimerKey::CardAdvance]);
        assert!(timers.take_due(later).is_empty());
    }

    #[test]
    fn canceled_timers_never_fire() {
        let mut timers = PendingTimers::new();
        let now = Instant::now();
        timers.schedule(TimerKey::QuizAdvance, now + Duration::from_millis(100));
        timers.cancel(TimerKey::QuizAdvance);

        assert!(!timers.is_pending(TimerKey::QuizAdvance));
        assert!(timers.take_due(now + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let mut timers = PendingTimers::new();
        let now = Instant::now();
        timers.schedule(TimerKey::ToastDismiss, now + Duration::from_millis(100));
        timers.schedule(TimerKey::ToastDismiss, now + Duration::from_secs(3));

        // The first deadline no longer exists
        assert!(timers.take_due(now + Duration::from_millis(200)).is_empty());
        assert_eq!(
            timers.take_due(now + Duration::from_secs(4)),
            vec![TimerKey::ToastDismiss]
        );
    }

    #[test]
    fn multiple_due_timers_come_back_in_firing_order() {
        let mut timers = PendingTimers::new();
        let now = Instant::now();
        timers.schedule(TimerKey::ToastDismiss, now + Duration::from_millis(300));
        timers.schedule(TimerKey::CardAdvance, now + Duration::from_millis(100));

        let due = timers.take_due(now + Duration::from_secs(1));
        assert_eq!(due, vec![TimerKey::CardAdvance, TimerKey::ToastDismiss]);
    }

    #[test]
    fn cancel_leaves_other_keys_alone() {
        let mut timers = PendingTimers::new();
        let now = Instant::now();
        timers.schedule(TimerKey::CardAdvance, now);
        timers.schedule(TimerKey::QuizAdvance, now);
        timers.cancel(TimerKey::CardAdvance);

        assert!(timers.is_pending(TimerKey::QuizAdvance));
        assert_eq!(timers.take_due(now), vec![TimerKey::QuizAdvance]);
    }
}
