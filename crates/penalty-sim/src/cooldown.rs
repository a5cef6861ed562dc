//! Single-shot delayed task between attempts.
//!
//! At most one task is pending. Whoever takes it (the timer via
//! [`Cooldown::take_due`] or a manual reset via [`Cooldown::take_pending`])
//! leaves nothing behind, so the reset it guards runs exactly once.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cooldown {
    due_ms: Option<f64>,
}

impl Cooldown {
    /// Schedule the task `delay_ms` after `now_ms`, replacing any pending one.
    pub fn schedule(&mut self, now_ms: f64, delay_ms: f64) {
        self.due_ms = Some(now_ms + delay_ms.max(0.0));
    }

    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<f64> {
        self.due_ms
    }

    /// Fire the task if it is due at `now_ms`.
    pub fn take_due(&mut self, now_ms: f64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Claim the pending task early, regardless of its due time.
    pub fn take_pending(&mut self) -> bool {
        self.due_ms.take().is_some()
    }
}
