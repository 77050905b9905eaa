//! Game host: runs a [`Session`] against the host-side collaborators.
//!
//! One call to [`Game::frame`] is one frame. It advances the booster clock,
//! feeds finished animations back into the session, ticks the session and
//! then routes every emitted [`EngineEvent`] to the animator, the audio sink
//! and the status line.

use tracing::{debug, info};

use match_qube_core::{EngineEvent, Session, SessionSnapshot};

use crate::animator::Animator;
use crate::audio::AudioSink;
use crate::picker::{Facing, OrthoPicker};
use crate::types::{AnimationKind, MarkerId, Pointer, AUTO_ROTATE_MS};

/// Overlay text shown while no game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Hidden,
    ClickToStart,
    GameOver,
}

impl Status {
    pub fn text(self) -> Option<&'static str> {
        match self {
            Status::Hidden => None,
            Status::ClickToStart => Some("Click to Start"),
            Status::GameOver => Some("Game Over - Click to Start"),
        }
    }
}

pub struct Game<A: AudioSink> {
    session: Session,
    animator: Animator,
    picker: OrthoPicker,
    audio: A,
    status: Status,
    rotate_paused: bool,
    rotate_elapsed_ms: u32,
    finished: Vec<(MarkerId, AnimationKind)>,
}

impl<A: AudioSink> Game<A> {
    pub fn new(session: Session, audio: A) -> Self {
        Self {
            session,
            animator: Animator::new(),
            picker: OrthoPicker::default(),
            audio,
            status: Status::ClickToStart,
            rotate_paused: false,
            rotate_elapsed_ms: 0,
            finished: Vec::with_capacity(8),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// For scripted boards; the frame loop owns the session otherwise.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn facing(&self) -> Facing {
        self.picker.facing()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.session.snapshot_into(out);
    }

    /// Advance one frame.
    ///
    /// `delta_ms` drives spawning and tweens; `now_ms` is the wall clock the
    /// booster deadlines are measured against.
    pub fn frame(&mut self, delta_ms: u32, now_ms: u64) {
        self.session.booster_mut().update(now_ms);

        self.finished.clear();
        self.animator.advance(delta_ms, &mut self.finished);
        for &(marker, kind) in &self.finished {
            self.session.animation_finished(marker, kind);
        }

        self.session.tick(delta_ms, &self.picker);
        self.dispatch();

        if !self.session.running() && !self.rotate_paused {
            self.rotate_elapsed_ms = self.rotate_elapsed_ms.saturating_add(delta_ms);
            if self.rotate_elapsed_ms >= AUTO_ROTATE_MS {
                self.rotate_elapsed_ms = 0;
                self.picker.set_facing(self.picker.facing().next());
            }
        }
    }

    pub fn start(&mut self) -> bool {
        let started = self.session.start();
        self.dispatch();
        started
    }

    /// Pointer pressed: idle rotation holds still until the release.
    pub fn pointer_pressed(&mut self) {
        self.rotate_paused = true;
    }

    /// A press released without dragging.
    ///
    /// Starts a game when none is running, otherwise queues a pick at `pointer`.
    pub fn click(&mut self, pointer: Pointer) {
        self.rotate_paused = false;
        if self.session.running() {
            self.session.set_pointer(pointer);
        } else {
            self.start();
        }
    }

    /// A press that turned into a drag.
    pub fn pointer_cancelled(&mut self) {
        self.rotate_paused = false;
    }

    pub fn cycle_facing(&mut self) {
        self.rotate_elapsed_ms = 0;
        self.picker.set_facing(self.picker.facing().next());
        debug!(facing = self.picker.facing().as_str(), "facing changed");
    }

    fn dispatch(&mut self) {
        for event in self.session.drain_events() {
            match event {
                EngineEvent::Started => {
                    self.animator.clear();
                    self.status = Status::Hidden;
                    self.rotate_elapsed_ms = 0;
                }
                EngineEvent::AnimationRequested { marker, kind } => {
                    self.animator.request(marker, kind);
                }
                EngineEvent::Cue(cue) => self.audio.play(cue),
                EngineEvent::GameOver { score, highscore } => {
                    info!(score, highscore, "showing game over");
                    self.status = Status::GameOver;
                }
                EngineEvent::MarkerRemoved { marker, .. } => self.animator.cancel(marker),
                EngineEvent::MarkerSpawned { .. }
                | EngineEvent::MatchScored { .. }
                | EngineEvent::ColorsExpanded { .. } => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::CueRecorder;
    use match_qube_core::grid::position_to_index;
    use match_qube_types::{Cue, Position, EXPLODE_MS};

    fn game() -> Game<CueRecorder> {
        Game::new(Session::with_seed(9), CueRecorder::new())
    }

    #[test]
    fn starts_on_click_when_stopped() {
        let mut g = game();
        assert_eq!(g.status().text(), Some("Click to Start"));
        g.click(Pointer::new(0.0, 0.0));
        assert!(g.session().running());
        assert_eq!(g.status(), Status::Hidden);
        assert_eq!(g.audio().cues, vec![Cue::Ambient]);
    }

    #[test]
    fn idle_rotation_cycles_facing() {
        let mut g = game();
        g.frame(AUTO_ROTATE_MS, 0);
        assert_eq!(g.facing(), Facing::Side);

        g.pointer_pressed();
        g.frame(AUTO_ROTATE_MS, 0);
        assert_eq!(g.facing(), Facing::Side);
    }

    #[test]
    fn running_game_does_not_rotate() {
        let mut g = game();
        g.start();
        g.frame(AUTO_ROTATE_MS, 0);
        assert_eq!(g.facing(), Facing::Front);
    }

    #[test]
    fn spawn_requests_appear_tween() {
        let mut g = game();
        g.start();
        g.frame(1000, 1000);
        assert_eq!(g.session().grid().occupied(), 1);
        assert_eq!(g.animator().len(), 1);
        assert_eq!(g.audio().count(Cue::Appear), 1);
    }

    #[test]
    fn explode_chain_completes_through_frames() {
        let mut g = game();
        g.start();
        let mut session_ids = Vec::new();
        for z in [1, 0, -1] {
            let index = position_to_index(Position::new(0, 0, z)).unwrap();
            session_ids.push(g.session.insert_marker(index, 1).unwrap());
        }
        g.click(Pointer::new(0.0, 0.0));
        g.frame(1, 1);
        assert_eq!(g.session().removals_in_flight(), 1);

        for _ in 0..3 {
            g.frame(EXPLODE_MS, 2);
        }
        assert_eq!(g.session().score().current(), 1);
        assert_eq!(g.audio().count(Cue::Pop), 3);
        assert!(session_ids
            .iter()
            .all(|id| g.session().grid().find(*id).is_none()));
    }

    #[test]
    fn game_over_sets_status() {
        let mut g = game();
        g.start();
        for i in 0..match_qube_types::GRID_CELLS {
            g.session.insert_marker(i, 0);
        }
        g.frame(1, 1);
        assert_eq!(g.status().text(), Some("Game Over - Click to Start"));
        assert_eq!(g.audio().count(Cue::End), 1);
    }
}
