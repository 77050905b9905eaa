//! Session module - the match engine
//!
//! This module ties together the grid, the booster, scoring and the RNG. It
//! owns the cell contents, spawns markers on a decaying schedule, resolves
//! pointer picks into matches and runs the removal sequences.
//!
//! # Lifecycle
//!
//! A session starts stopped. [`Session::start`] clears the cube and begins
//! spawning; the game ends on the first tick that finds every cell occupied.
//!
//! # Removal protocol
//!
//! A match explodes its three markers strictly one after the other. The engine
//! requests an `Explode` animation for the first marker and waits for the host
//! to report completion via [`Session::animation_finished`]; only then does that
//! marker leave its cell and the next explode start. Points are awarded after
//! the third completion. Ticks keep running in the meantime.

use tracing::{debug, info};

use crate::booster::Booster;
use crate::config::EngineConfig;
use crate::event::EngineEvent;
use crate::grid::{line_through, Grid, Marker};
use crate::pick::{PickOutcome, Picker};
use crate::rng::SimpleRng;
use crate::score::{Score, ScoreChange};
use crate::snapshot::{BoosterSnapshot, MarkerSnapshot, SessionSnapshot};
use crate::store::{HighscoreStore, MemoryStore};
use crate::types::*;

/// Result of one spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned {
        marker: MarkerId,
        index: usize,
        color: ColorId,
    },
    /// No free cell (or the requested cell was taken); nothing happened.
    Skipped,
}

/// A match waiting for its explode animations, in pick order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Removal {
    markers: [MarkerId; 3],
    /// Index of the marker currently exploding.
    step: usize,
}

impl Removal {
    fn pending(&self) -> &[MarkerId] {
        &self.markers[self.step..]
    }
}

/// Complete match-engine state
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    grid: Grid,
    booster: Booster,
    score: Score,
    rng: SimpleRng,
    running: bool,
    spawn_rate_ms: u32,
    spawn_elapsed_ms: u32,
    color_count: u8,
    next_marker_id: u32,
    pending_pick: Option<Pointer>,
    removals: Vec<Removal>,
    events: Vec<EngineEvent>,
}

impl Session {
    /// Create a stopped session with the given config and highscore store
    pub fn new(config: EngineConfig, store: Box<dyn HighscoreStore>) -> Self {
        let config = config.sanitized();
        Self {
            grid: Grid::new(),
            booster: Booster::with_delays(config.booster_settle_ms, config.booster_cooldown_ms),
            score: Score::new(store),
            rng: SimpleRng::new(config.seed),
            running: false,
            spawn_rate_ms: config.initial_spawn_rate_ms,
            spawn_elapsed_ms: 0,
            color_count: config.initial_color_count,
            next_marker_id: 0,
            pending_pick: None,
            removals: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Session with default config and an in-memory highscore
    pub fn with_seed(seed: u32) -> Self {
        Self::new(
            EngineConfig::default().with_seed(seed),
            Box::new(MemoryStore::new()),
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn booster(&self) -> &Booster {
        &self.booster
    }

    /// The host advances the booster once per frame through this.
    pub fn booster_mut(&mut self) -> &mut Booster {
        &mut self.booster
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn color_count(&self) -> u8 {
        self.color_count
    }

    pub fn spawn_rate_ms(&self) -> u32 {
        self.spawn_rate_ms
    }

    /// Number of match removals still waiting on explode animations
    pub fn removals_in_flight(&self) -> usize {
        self.removals.len()
    }

    /// Whether `id` belongs to a match that has not finished exploding
    pub fn is_removing(&self, id: MarkerId) -> bool {
        self.removals.iter().any(|r| r.pending().contains(&id))
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a game. Returns false if one is already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.grid.clear();
        // Their markers are gone; late completions are ignored.
        self.removals.clear();
        self.pending_pick = None;
        self.spawn_rate_ms = self.config.initial_spawn_rate_ms;
        self.spawn_elapsed_ms = 0;
        self.color_count = self.config.initial_color_count;
        self.score.reset();
        self.booster.reset();
        self.running = true;

        info!(highscore = self.score.highscore(), "game started");
        self.events.push(EngineEvent::Started);
        self.events.push(EngineEvent::Cue(Cue::Ambient));
        true
    }

    /// End the game. In-flight removals are left to finish.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.pending_pick = None;
        self.booster.reset();

        let score = self.score.current();
        let highscore = self.score.highscore();
        info!(score, highscore, "game over");
        self.events.push(EngineEvent::GameOver { score, highscore });
        self.events.push(EngineEvent::Cue(Cue::End));
        true
    }

    /// Queue a pointer-up for resolution on the next tick.
    ///
    /// Only one pick is kept per tick; a newer pointer replaces an older one.
    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pending_pick = Some(pointer);
    }

    /// Advance one host frame: spawn on schedule, resolve the pending pick,
    /// then end the game if the cube is full.
    pub fn tick(&mut self, delta_ms: u32, picker: &dyn Picker) {
        if !self.running {
            if self.pending_pick.take().is_some() {
                debug!("pick discarded: session stopped");
            }
            return;
        }

        self.spawn_elapsed_ms = self.spawn_elapsed_ms.saturating_add(delta_ms);
        if self.spawn_elapsed_ms >= self.spawn_rate_ms {
            self.spawn_elapsed_ms = 0;
            if let SpawnOutcome::Spawned { .. } = self.spawn() {
                self.spawn_rate_ms = self
                    .spawn_rate_ms
                    .saturating_sub(self.config.spawn_rate_step_ms)
                    .max(self.config.spawn_rate_floor_ms);
            }
        }

        if let Some(pointer) = self.pending_pick.take() {
            let hits = picker.pick(pointer, &self.grid);
            self.resolve_hits(&hits);
        }

        if self.running && self.grid.full() {
            self.stop();
        }
    }

    /// Spawn one marker into a free cell, scanning circularly from a random start
    pub fn spawn(&mut self) -> SpawnOutcome {
        let start = self.rng.next_index(GRID_CELLS);
        match self.grid.first_free_from(start) {
            Some(index) => self.spawn_into(index),
            None => {
                debug!("spawn skipped: no free cell");
                SpawnOutcome::Skipped
            }
        }
    }

    /// Spawn one marker into `index` if it is free, choosing its color
    pub fn spawn_into(&mut self, index: usize) -> SpawnOutcome {
        if !self.grid.is_free(index) {
            return SpawnOutcome::Skipped;
        }
        let color = self.choose_color(index);
        match self.insert_marker(index, color) {
            Some(marker) => {
                self.events.push(EngineEvent::AnimationRequested {
                    marker,
                    kind: AnimationKind::Appear,
                });
                self.events.push(EngineEvent::Cue(Cue::Appear));
                SpawnOutcome::Spawned {
                    marker,
                    index,
                    color,
                }
            }
            None => SpawnOutcome::Skipped,
        }
    }

    /// Put a marker of a given color into a free cell without animation.
    ///
    /// For scripted boards; regular play goes through [`Session::spawn`].
    pub fn insert_marker(&mut self, index: usize, color: ColorId) -> Option<MarkerId> {
        let id = MarkerId(self.next_marker_id);
        if !self.grid.place(index, Marker { id, color }) {
            return None;
        }
        self.next_marker_id = self.next_marker_id.wrapping_add(1);
        self.events.push(EngineEvent::MarkerSpawned {
            marker: id,
            index,
            color,
        });
        Some(id)
    }

    fn choose_color(&mut self, index: usize) -> ColorId {
        if self.rng.chance(self.config.heuristic_percent) {
            if let Some(color) = self.completing_color(index) {
                debug!(index, color, "heuristic spawn");
                return color;
            }
        }
        self.rng.next_range(u32::from(self.color_count)) as ColorId
    }

    /// A color held by both other cells of an axis line through `index`.
    ///
    /// Axes are tried in x, y, z order. Markers already exploding don't count.
    pub fn completing_color(&self, index: usize) -> Option<ColorId> {
        if index >= GRID_CELLS {
            return None;
        }
        Axis::ALL.iter().find_map(|&axis| {
            let mut others = line_through(index, axis)
                .into_iter()
                .filter(|&i| i != index)
                .map(|i| self.grid.get(i).filter(|m| !self.is_removing(m.id)));
            match (others.next().flatten(), others.next().flatten()) {
                (Some(a), Some(b)) if a.color == b.color => Some(a.color),
                _ => None,
            }
        })
    }

    /// Resolve an ordered hit list (nearest first) into block feedback or a match
    pub fn resolve_hits(&mut self, hits: &[MarkerId]) -> PickOutcome {
        let outcome = self.classify(hits);
        match outcome {
            PickOutcome::Empty | PickOutcome::NoMatch => {
                debug!(hits = hits.len(), "no match");
            }
            PickOutcome::Blocked(marker) => {
                self.events.push(EngineEvent::AnimationRequested {
                    marker,
                    kind: AnimationKind::Block,
                });
                self.events.push(EngineEvent::Cue(Cue::Block));
            }
            PickOutcome::Matched(markers) => {
                debug!(?markers, "match");
                self.removals.push(Removal { markers, step: 0 });
                self.events.push(EngineEvent::AnimationRequested {
                    marker: markers[0],
                    kind: AnimationKind::Explode,
                });
            }
        }
        outcome
    }

    fn classify(&self, hits: &[MarkerId]) -> PickOutcome {
        let live = |id: &MarkerId| self.grid.find(*id).is_some() && !self.is_removing(*id);
        match hits {
            [] => PickOutcome::Empty,
            [one] if live(one) => PickOutcome::Blocked(*one),
            [a, b, c] if hits.iter().all(live) => {
                let color = |id: &MarkerId| {
                    self.grid
                        .find(*id)
                        .and_then(|i| self.grid.get(i))
                        .map(|m| m.color)
                };
                let distinct = a != b && b != c && a != c;
                if distinct && color(a) == color(b) && color(b) == color(c) {
                    PickOutcome::Matched([*a, *b, *c])
                } else {
                    PickOutcome::NoMatch
                }
            }
            _ => PickOutcome::NoMatch,
        }
    }

    /// Host report that an animation requested for `marker` completed.
    ///
    /// Only `Explode` completions drive the engine: the marker leaves its cell,
    /// the next marker of the match starts exploding, and after the last one
    /// the match is scored.
    pub fn animation_finished(&mut self, marker: MarkerId, kind: AnimationKind) {
        if kind != AnimationKind::Explode {
            return;
        }
        let Some(slot) = self
            .removals
            .iter()
            .position(|r| r.markers.get(r.step) == Some(&marker))
        else {
            debug!(?marker, "explode completion for unknown removal");
            return;
        };

        self.events.push(EngineEvent::Cue(Cue::Pop));
        if let Some(index) = self.grid.find(marker) {
            self.grid.take(index);
            self.events.push(EngineEvent::MarkerRemoved { marker, index });
        }

        let removal = &mut self.removals[slot];
        removal.step += 1;
        if let Some(&next) = removal.markers.get(removal.step) {
            self.events.push(EngineEvent::AnimationRequested {
                marker: next,
                kind: AnimationKind::Explode,
            });
        } else {
            self.removals.remove(slot);
            self.award_match();
        }
    }

    fn award_match(&mut self) -> ScoreChange {
        let multiplier = self.booster.multiplier();
        let change = self.score.add_score(1, multiplier);
        // A match finishing after game over scores but leaves the booster idle.
        if self.running {
            self.booster.charge();
        }

        if change.milestone && self.color_count < MAX_COLOR_COUNT {
            self.color_count += 1;
            info!(color_count = self.color_count, "colors expanded");
            self.events.push(EngineEvent::ColorsExpanded {
                color_count: self.color_count,
            });
        }

        self.events.push(EngineEvent::MatchScored {
            points: change.points,
            score: change.after,
            highscore: self.score.highscore(),
            multiplier: self.booster.multiplier(),
        });
        change
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        for (slot, cell) in out.cells.iter_mut().zip(self.grid.cells()) {
            *slot = cell.map(|m| MarkerSnapshot {
                id: m.id,
                color: m.color,
                removing: self.is_removing(m.id),
            });
        }
        out.running = self.running;
        out.score = self.score.current();
        out.highscore = self.score.highscore();
        out.booster = BoosterSnapshot {
            multiplier: self.booster.multiplier(),
            phase: self.booster.phase(),
            degrees: self.booster.progress_degrees(),
        };
        out.color_count = self.color_count;
        out.spawn_rate_ms = self.spawn_rate_ms;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
