//! Orchestration of many flashes into one branching field.
//!
//! A [`FlashField`] drives a single active [`Flash`] at a time. Whenever the
//! active tip comes within the arrival radius of its target, a new branch is
//! forked from a random node of the root flash toward a fresh random target
//! in the upper half of the canvas, and becomes the active flash. Generation
//! stops after exactly `nodes` walk steps.
use rand::RngCore;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::flash::{Branch, Flash, OutlinePath, WalkParams, WalkStep};
use crate::geometry::Point;
use crate::random::{rand01, rand_index};

pub mod events;

use events::{EventSink, FieldEvent};

pub const DEFAULT_NODES: usize = 23;
pub const DEFAULT_CANVAS_SIZE: f64 = 500.0;
pub const DEFAULT_THICKNESS: f64 = 4.0;
/// Arrival radius is `height / DEFAULT_ARRIVAL_DIVISOR`.
pub const DEFAULT_ARRIVAL_DIVISOR: f64 = 20.0;

/// Configuration for growing a [`FlashField`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Total walk steps across all flashes.
    pub nodes: usize,
    /// Maximum backflash offset used by [`FlashField::outlines`].
    pub thickness: f64,
    /// Divides `height` to get the arrival radius.
    pub arrival_divisor: f64,
    /// Settings passed to every walk step.
    pub walk: WalkParams,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_SIZE,
            height: DEFAULT_CANVAS_SIZE,
            nodes: DEFAULT_NODES,
            thickness: DEFAULT_THICKNESS,
            arrival_divisor: DEFAULT_ARRIVAL_DIVISOR,
            walk: WalkParams::default(),
        }
    }
}

impl FieldConfig {
    /// Creates a new [`FieldConfig`] for a `width` x `height` canvas.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Sets the node budget.
    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    /// Sets the outline thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness;
        self
    }

    /// Sets the walk parameters.
    pub fn with_walk(mut self, walk: WalkParams) -> Self {
        self.walk = walk;
        self
    }

    /// Sets the arrival divisor.
    pub fn with_arrival_divisor(mut self, arrival_divisor: f64) -> Self {
        self.arrival_divisor = arrival_divisor;
        self
    }

    pub fn arrival_radius(&self) -> f64 {
        self.height / self.arrival_divisor
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.width) || !positive(self.height) {
            return Err(Error::InvalidConfig(
                "width and height must be finite and > 0".into(),
            ));
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(Error::InvalidConfig(
                "thickness must be finite and >= 0".into(),
            ));
        }
        if !positive(self.arrival_divisor) {
            return Err(Error::InvalidConfig(
                "arrival_divisor must be finite and > 0".into(),
            ));
        }
        self.walk.validate()
    }
}

/// A root flash plus every branch forked from it.
#[derive(Debug, Clone)]
pub struct FlashField {
    config: FieldConfig,
    flashes: Vec<Flash>,
    active: usize,
    steps: usize,
    fallbacks: usize,
}

impl FlashField {
    pub fn try_new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn new(config: FieldConfig) -> Self {
        debug_assert!(
            config.width > 0.0 && config.height > 0.0,
            "width and height must be > 0"
        );
        debug_assert!(config.arrival_divisor > 0.0, "arrival_divisor must be > 0");

        let root = Flash::new(config.width, config.height);
        Self {
            config,
            flashes: vec![root],
            active: 0,
            steps: 0,
            fallbacks: 0,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn flashes(&self) -> &[Flash] {
        &self.flashes
    }

    pub fn into_flashes(self) -> Vec<Flash> {
        self.flashes
    }

    /// The first flash; every branch forks from its nodes.
    pub fn root(&self) -> &Flash {
        &self.flashes[0]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Flash {
        &self.flashes[self.active]
    }

    /// Walk steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Takes one budget step: fork a branch if the active flash arrived,
    /// then grow the active flash by one node.
    pub fn step<R: RngCore>(&mut self, rng: &mut R, sink: &mut dyn EventSink) -> WalkStep {
        if self.active().arrived(self.config.arrival_radius()) {
            self.spawn_branch(rng, sink);
        }

        let step_index = self.steps;
        let walk = self.config.walk;
        let outcome = self.flashes[self.active].random_walk(&walk, rng);
        self.steps += 1;

        if outcome.fallback {
            self.fallbacks += 1;
            sink.send(FieldEvent::FallbackUsed {
                step: step_index,
                flash_index: self.active,
                node: outcome.node,
            });
        }
        sink.send(FieldEvent::StepTaken {
            step: step_index,
            flash_index: self.active,
            node: outcome.node,
        });

        outcome
    }

    /// Spends the remaining node budget and returns every flash.
    pub fn generate<R: RngCore>(self, rng: &mut R) -> Vec<Flash> {
        self.generate_with_events(rng, &mut ())
    }

    pub fn generate_with_events<R: RngCore>(
        mut self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Vec<Flash> {
        info!(
            "Growing flash field {}x{} with a budget of {} nodes.",
            self.config.width, self.config.height, self.config.nodes
        );
        sink.send(FieldEvent::FieldStarted {
            config: self.config.clone(),
        });

        while self.steps < self.config.nodes {
            self.step(rng, sink);
        }

        if self.config.nodes > 0 && self.fallbacks == self.config.nodes {
            warn!(
                "Every one of {} steps fell back to a random point; check the canvas size.",
                self.fallbacks
            );
        }
        info!(
            "Flash field done: {} flashes, {} fallback steps.",
            self.flashes.len(),
            self.fallbacks
        );
        sink.send(FieldEvent::FieldFinished {
            flash_count: self.flashes.len(),
            fallback_count: self.fallbacks,
        });

        self.flashes
    }

    /// Closed outline polygon of every flash, root first.
    pub fn outlines(&self) -> Vec<OutlinePath> {
        self.flashes
            .iter()
            .map(|f| f.render_path(self.config.thickness))
            .collect()
    }

    fn spawn_branch<R: RngCore>(&mut self, rng: &mut R, sink: &mut dyn EventSink) {
        let (width, height) = (self.config.width, self.config.height);
        let fork_node = rand_index(rng, self.root().len());
        let start = self.root().points()[fork_node];
        let end = Point::new(rand01(rng) * width, rand01(rng) * height / 2.0);
        let index = self.flashes.len();

        debug!(
            "Flash {} arrived; forking flash {} from root node {} toward {}.",
            self.active, index, fork_node, end
        );

        self.flashes[0].record_branch(Branch {
            node_index: fork_node,
            flash_index: index,
        });
        self.flashes.push(Flash::between(width, height, start, end));
        self.active = index;

        sink.send(FieldEvent::FlashSpawned {
            index,
            fork_node,
            start,
            end,
        });
    }
}

/// Grows a field with default walk settings and returns every flash.
pub fn make_flash<R: RngCore>(width: f64, height: f64, nodes: usize, rng: &mut R) -> Vec<Flash> {
    FlashField::new(FieldConfig::new(width, height).with_nodes(nodes)).generate(rng)
}
