//! Frame-driven tweens for marker animations.
//!
//! The animator has no notion of what an animation looks like; it only keeps
//! time so the host knows when an `Explode` is done and renderers can ask how
//! far along a marker is.

use crate::types::{AnimationKind, MarkerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tween {
    pub marker: MarkerId,
    pub kind: AnimationKind,
    pub elapsed_ms: u32,
    pub duration_ms: u32,
}

impl Tween {
    pub fn new(marker: MarkerId, kind: AnimationKind) -> Self {
        Self {
            marker,
            kind,
            elapsed_ms: 0,
            duration_ms: kind.duration_ms(),
        }
    }

    /// 0.0 at the start, 1.0 when finished.
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[derive(Debug, Clone, Default)]
pub struct Animator {
    active: Vec<Tween>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `kind` on `marker`, replacing whatever it was playing.
    pub fn request(&mut self, marker: MarkerId, kind: AnimationKind) {
        let tween = Tween::new(marker, kind);
        match self.active.iter_mut().find(|t| t.marker == marker) {
            Some(slot) => *slot = tween,
            None => self.active.push(tween),
        }
    }

    /// Advance all tweens and push the ones that finished into `finished`.
    ///
    /// `finished` is appended to, not cleared, so callers can reuse a buffer.
    pub fn advance(&mut self, delta_ms: u32, finished: &mut Vec<(MarkerId, AnimationKind)>) {
        for tween in &mut self.active {
            tween.elapsed_ms = tween.elapsed_ms.saturating_add(delta_ms);
        }
        self.active.retain(|t| {
            if t.is_finished() {
                finished.push((t.marker, t.kind));
                false
            } else {
                true
            }
        });
    }

    pub fn get(&self, marker: MarkerId) -> Option<&Tween> {
        self.active.iter().find(|t| t.marker == marker)
    }

    pub fn progress(&self, marker: MarkerId) -> Option<(AnimationKind, f32)> {
        self.get(marker).map(|t| (t.kind, t.progress()))
    }

    pub fn cancel(&mut self, marker: MarkerId) {
        self.active.retain(|t| t.marker != marker);
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
