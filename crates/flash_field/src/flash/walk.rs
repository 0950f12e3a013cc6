//! Biased random walk that grows a [`Flash`] toward its target.
//!
//! Each step either lunges toward the target with a squared step length or
//! zig-zags sideways by a deflection blended from fresh randomness and a
//! caller-supplied bias. Candidates leaving the canvas are redrawn a bounded
//! number of times before falling back to a uniformly random canvas point, so
//! a step always appends exactly one in-bounds node.
use std::f64::consts::FRAC_PI_2;

use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::flash::Flash;
use crate::geometry::{Point, Vector};
use crate::random::{rand01, rand_int_inclusive};

/// Candidates drawn per step before the random fallback kicks in.
pub const MAX_ATTEMPTS: usize = 10;
/// Inclusive range of the drawn step length.
pub const STEP_LENGTH_RANGE: (u32, u32) = (1, 10);
/// Side of the square box used to seed a walk that has no heading yet.
pub const JITTER_EXTENT: f64 = 10.0;

/// Per-step walk settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkParams {
    /// Fixed step length; drawn from [`STEP_LENGTH_RANGE`] per step when `None`.
    pub length: Option<u32>,
    /// External steering bias, intended range `[-1, 1]`.
    pub data: f64,
    /// Weight of `data` against fresh randomness, in `[0, 1]`.
    pub mix: f64,
    /// Re-draw every other lunge as a fresh `{-1, 0, 1}` factor.
    pub alternate: bool,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            length: None,
            data: 0.0,
            mix: 0.0,
            alternate: false,
        }
    }
}

impl WalkParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a fixed step length.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the steering bias and its weight.
    pub fn with_bias(mut self, data: f64, mix: f64) -> Self {
        self.data = data;
        self.mix = mix;
        self
    }

    pub fn with_alternate(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    /// Validates the parameters, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.data.is_finite() {
            return Err(Error::InvalidConfig("walk data must be finite".into()));
        }
        if !(0.0..=1.0).contains(&self.mix) {
            return Err(Error::InvalidConfig("walk mix must be in [0, 1]".into()));
        }
        Ok(())
    }
}

/// Outcome of a single [`Flash::random_walk`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStep {
    /// The node appended to the flash.
    pub node: Point,
    /// Candidates drawn, at most [`MAX_ATTEMPTS`].
    pub attempts: usize,
    /// True when every candidate left the canvas and `node` is a uniform random point.
    pub fallback: bool,
}

impl Flash {
    /// Appends one node to the path and returns it.
    ///
    /// The appended node always satisfies
    /// [`Point::within_limits`]`(width, height)`.
    pub fn random_walk<R: RngCore>(&mut self, params: &WalkParams, rng: &mut R) -> WalkStep {
        let (lo, hi) = STEP_LENGTH_RANGE;
        let length = params
            .length
            .unwrap_or_else(|| rand_int_inclusive(rng, i64::from(lo), i64::from(hi)) as u32);

        let redraw_lunge = params.alternate && self.alternate_flag;
        self.alternate_flag = !self.alternate_flag;

        for attempt in 1..=MAX_ATTEMPTS {
            let candidate = self.candidate(params, length, redraw_lunge, rng);
            if candidate.within_limits(self.width, self.height) {
                self.nodes.push(candidate);
                return WalkStep {
                    node: candidate,
                    attempts: attempt,
                    fallback: false,
                };
            }
        }

        let node = self.random_point(rng);
        debug!(
            "No in-bounds candidate from {} after {} attempts; jumping to {}.",
            self.tip(),
            MAX_ATTEMPTS,
            node
        );
        self.nodes.push(node);
        WalkStep {
            node,
            attempts: MAX_ATTEMPTS,
            fallback: true,
        }
    }

    /// Uniformly random point on the canvas.
    pub fn random_point<R: RngCore>(&self, rng: &mut R) -> Point {
        Point::new(rand01(rng) * self.width, rand01(rng) * self.height)
    }

    fn candidate(
        &self,
        params: &WalkParams,
        length: u32,
        redraw_lunge: bool,
        rng: &mut dyn RngCore,
    ) -> Point {
        let tip = self.tip();
        if self.nodes.len() < 2 {
            let half = JITTER_EXTENT / 2.0;
            return tip.translate(
                rand01(rng) * JITTER_EXTENT - half,
                rand01(rng) * JITTER_EXTENT - half,
            );
        }

        let deflect = rand01(rng) * (1.0 - params.mix) + params.data * params.mix;
        let mut factor = rand_int_inclusive(rng, -1, 1);
        if factor == 0 && redraw_lunge {
            factor = rand_int_inclusive(rng, -1, 1);
        }

        let (angle, step) = if factor == 0 {
            let phi = Vector::new(tip, self.end).phi().unwrap_or_else(|_| {
                debug!("Tip {} sits on its target; lunging along phi = 0.", tip);
                0.0
            });
            let length = f64::from(length);
            (FRAC_PI_2 - phi + (deflect - 0.5), length * length)
        } else {
            (
                FRAC_PI_2 - factor as f64 * deflect * FRAC_PI_2,
                f64::from(length),
            )
        };

        let displacement = Vector::from_polar(tip, angle, step).ab();
        tip.translate(displacement.x, displacement.y)
    }
}
