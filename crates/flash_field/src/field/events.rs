//! Event types and sinks for observing flash field generation.
//!
//! [`FieldEvent`]s are emitted by [`crate::field::FlashField::generate_with_events`]
//! as the active flash walks, arrives, and forks new branches.
use crate::field::FieldConfig;
use crate::geometry::Point;

/// Describes events emitted while a field grows.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum FieldEvent {
    /// Emitted once before the first step.
    FieldStarted {
        /// The configuration used.
        config: FieldConfig,
    },

    /// Emitted when the active flash arrived and a new branch was spawned.
    FlashSpawned {
        /// Index of the new flash in the field.
        index: usize,
        /// Index of the root-flash node the branch forks from.
        fork_node: usize,
        /// Start point of the new flash.
        start: Point,
        /// Target of the new flash.
        end: Point,
    },

    /// Emitted after every walk step.
    StepTaken {
        /// Budget step, starting at 0.
        step: usize,
        /// Index of the flash that grew.
        flash_index: usize,
        /// The appended node.
        node: Point,
    },

    /// Emitted when a step gave up on in-bounds candidates.
    FallbackUsed {
        /// Budget step, starting at 0.
        step: usize,
        /// Index of the flash that grew.
        flash_index: usize,
        /// The random node that was appended instead.
        node: Point,
    },

    /// Emitted when the node budget is spent.
    FieldFinished {
        /// Number of flashes created, root included.
        flash_count: usize,
        /// Number of steps that hit the fallback.
        fallback_count: usize,
    },
}

/// A generic event sink that accepts [`FieldEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: FieldEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: FieldEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(FieldEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(FieldEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(FieldEvent),
{
    #[inline]
    fn send(&mut self, event: FieldEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<FieldEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<FieldEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[FieldEvent] {
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
    fn send(&mut self, event: FieldEvent) {
        self.events.push(event);
    }
}
