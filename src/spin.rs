//! Spin driver: walks the ring for a random number of frames.

use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::RaffleError;
use crate::render::Render;
use crate::ring::{NodeId, Ring, window};

pub const DEFAULT_MIN_STEPS: usize = 30;
pub const DEFAULT_MAX_STEPS: usize = 80;
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(50);
pub const DEFAULT_WINDOW_WIDTH: usize = 2;
/// Widest window a spin accepts; each frame walks and clones `2 * width` values.
pub const MAX_WINDOW_WIDTH: usize = 64;

/// Parameters for a single spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOptions {
    /// Fewest frames a spin renders (inclusive)
    pub min_steps: usize,
    /// Upper bound on frames rendered (exclusive)
    pub max_steps: usize,
    /// Pause after each frame
    pub step_delay: Duration,
    /// Entries shown on each side of the current choice
    pub window_width: usize,
}

impl Default for SpinOptions {
    fn default() -> Self {
        Self {
            min_steps: DEFAULT_MIN_STEPS,
            max_steps: DEFAULT_MAX_STEPS,
            step_delay: DEFAULT_STEP_DELAY,
            window_width: DEFAULT_WINDOW_WIDTH,
        }
    }
}

impl SpinOptions {
    /// Reject step ranges that would render nothing or can't be sampled,
    /// and windows wider than `MAX_WINDOW_WIDTH`.
    pub fn validate(&self) -> Result<(), RaffleError> {
        if self.min_steps == 0 || self.max_steps <= self.min_steps {
            return Err(RaffleError::InvalidStepRange {
                min: self.min_steps,
                max: self.max_steps,
            });
        }
        if self.window_width > MAX_WINDOW_WIDTH {
            return Err(RaffleError::WindowTooWide {
                width: self.window_width,
                max: MAX_WINDOW_WIDTH,
            });
        }
        Ok(())
    }
}

/// What a finished spin landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub start: NodeId,
    /// Node shown in the last frame
    pub result: NodeId,
    pub frames: usize,
}

/// Drives the animation with its own random source.
pub struct Spinner {
    rng: fastrand::Rng,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Spinner whose start node and step count are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Spin `ring` from a random node for a random number of frames in
    /// `[min_steps, max_steps)`, rendering each frame and sleeping
    /// `step_delay` between them.
    ///
    /// Render errors are logged and the spin carries on.
    pub fn spin<T, R>(
        &mut self,
        ring: &Ring<T>,
        options: &SpinOptions,
        renderer: &mut R,
    ) -> Result<SpinOutcome, RaffleError>
    where
        T: Clone,
        R: Render<T>,
    {
        options.validate()?;

        let start = ring.wrapping_node(self.rng.usize(..ring.len()));
        let steps = self.rng.usize(options.min_steps..options.max_steps);
        info!(
            options = ring.len(),
            start = start.index(),
            steps,
            "spin:start"
        );

        let mut current = start;
        let mut shown = start;
        for frame in 0..steps {
            let around = window(ring, current, options.window_width);
            if let Err(e) = renderer.render(&around.before, ring.get(current), &around.after) {
                warn!(frame, error = %e, "spin:render failed");
            }

            thread::sleep(options.step_delay);
            shown = current;
            current = ring.next(current);
        }

        debug!(result = shown.index(), frames = steps, "spin:stopped");
        Ok(SpinOutcome {
            start,
            result: shown,
            frames: steps,
        })
    }
}
