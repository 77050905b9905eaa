use crate::types::{AnimationKind, ColorId, Cue, MarkerId};

/// Signals emitted by the [`Session`](crate::session::Session) for the host.
///
/// The host drains them once per frame and routes them to its animation,
/// audio and status collaborators. Animation requests expect a matching
/// completion report for `Explode`; the other kinds are fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A game started: stop idle rotation, clear the status text.
    Started,
    MarkerSpawned {
        marker: MarkerId,
        index: usize,
        color: ColorId,
    },
    AnimationRequested {
        marker: MarkerId,
        kind: AnimationKind,
    },
    Cue(Cue),
    /// A matched marker finished exploding and left its cell.
    MarkerRemoved { marker: MarkerId, index: usize },
    MatchScored {
        points: u64,
        score: u64,
        highscore: u64,
        multiplier: u32,
    },
    ColorsExpanded { color_count: u8 },
    /// Emitted once per game.
    GameOver { score: u64, highscore: u64 },
}
