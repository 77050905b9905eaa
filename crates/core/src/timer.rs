/// A one-shot wall-clock deadline that can be cancelled and re-armed.
///
/// Time is a monotonic millisecond reading supplied by the caller, so the
/// owner decides what "now" means (host clock in the game, plain numbers in
/// tests). Re-arming replaces the previous deadline; a cancelled deadline
/// never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline {
    due_ms: Option<u64>,
}

impl Deadline {
    pub fn new() -> Self {
        Self { due_ms: None }
    }

    /// Arm (or re-arm) to fire `delay_ms` after `now_ms`.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    /// Returns true exactly once, on the first poll at or after the due time.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}
