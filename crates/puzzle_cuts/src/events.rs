//! Event types and sinks for observing generation runs.
//!
//! This module defines [`PuzzleEvent`] and a set of sinks to collect or forward events
//! while [`crate::pipeline::generate_with_events`] runs the stages.
use crate::config::PuzzleConfig;
use crate::perturb::PerturbStats;
use crate::pipeline::PuzzleSummary;

/// Describes events emitted by the generation pipeline, in stage order.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PuzzleEvent {
    /// Emitted once the configuration has been validated.
    GenerationStarted {
        /// The configuration used.
        config: PuzzleConfig,
        /// Canvas size (width, height).
        canvas: (i32, i32),
    },

    /// Emitted after the regular lattice was built.
    GridBuilt {
        /// Number of lattice points.
        points: usize,
    },

    /// Emitted after perturbation and border snapping.
    GridPerturbed {
        /// Perturbation radius used.
        radius: u32,
        /// Draw and displacement counters.
        stats: PerturbStats,
    },

    /// Emitted after edges were derived and border edges removed.
    EdgesDerived {
        /// All lattice edges.
        total: usize,
        /// Edges that will receive a tongue.
        interior: usize,
    },

    /// Emitted after tongue synthesis.
    TonguesSynthesized {
        /// Number of curves produced.
        curves: usize,
    },

    /// Emitted when the run completes.
    GenerationFinished {
        /// Aggregated counts for the run.
        summary: PuzzleSummary,
    },

    /// Non-fatal warning generated during a run.
    Warning {
        /// Context string (e.g. stage name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// A generic event sink that accepts [`PuzzleEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PuzzleEvent);

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = PuzzleEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PuzzleEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PuzzleEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PuzzleEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PuzzleEvent),
{
    #[inline]
    fn send(&mut self, event: PuzzleEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PuzzleEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<PuzzleEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PuzzleEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PuzzleEvent) {
        self.events.push(event);
    }
}
