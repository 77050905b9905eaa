//! Audio output seam.

use tracing::debug;

use crate::types::Cue;

/// Plays fire-and-forget cues. Implementations must not block the frame.
pub trait AudioSink {
    fn play(&mut self, cue: Cue);
}

/// Logs cues instead of playing them; the terminal runner uses this.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAudio;

impl AudioSink for TracingAudio {
    fn play(&mut self, cue: Cue) {
        debug!(cue = cue.as_str(), "audio cue");
    }
}

/// Records cues in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CueRecorder {
    pub cues: Vec<Cue>,
}

impl CueRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}

impl AudioSink for CueRecorder {
    fn play(&mut self, cue: Cue) {
        self.cues.push(cue);
    }
}
