use crate::clock::Clock;
use crate::constants::{SPARKLE_SPREAD_PX, SPARKLE_THROTTLE_MS, SPARKLE_TRAIL_OFFSET};
use crate::particle::ParticleSpec;
use crate::sink::EffectSink;
use crate::surface::EffectSurface;
use glam::Vec2;
use rand::Rng;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Debug)]
pub struct SparkleParams {
    pub throttle_ms: f64,
    pub spread_px: f32,
    pub trail_offset: Vec2,
}

impl Default for SparkleParams {
    fn default() -> Self {
        Self {
            throttle_ms: SPARKLE_THROTTLE_MS,
            spread_px: SPARKLE_SPREAD_PX,
            trail_offset: Vec2::from(SPARKLE_TRAIL_OFFSET),
        }
    }
}

/// A pointer-move event as the emitter sees it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub timestamp_ms: f64,
    pub position: Vec2,
}

impl PointerSample {
    pub fn new(timestamp_ms: f64, x: f32, y: f32) -> Self {
        Self {
            timestamp_ms,
            position: Vec2::new(x, y),
        }
    }
}

/// Throttled sparkle trail following the pointer.
///
/// Starts inactive; [`activate`](Self::activate) is called once per view
/// mount with the reduced-motion preference read at that moment.
pub struct SparkleEmitter<R: Rng> {
    params: SparkleParams,
    rng: R,
    active: bool,
    last_accepted_ms: Option<f64>,
}

impl<R: Rng> SparkleEmitter<R> {
    pub fn new(params: SparkleParams, rng: R) -> Self {
        Self {
            params,
            rng,
            active: false,
            last_accepted_ms: None,
        }
    }

    /// Returns whether the emitter is now listening.
    pub fn activate(&mut self, prefers_reduced_motion: bool) -> bool {
        self.last_accepted_ms = None;
        self.active = !prefers_reduced_motion;
        self.active
    }

    /// Stops reacting to pointer movement. Particles already on the surface
    /// keep their deadlines.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Throttle gate: true if the sample is at least `throttle_ms` after the
    /// last accepted one. Rejected samples leave no trace.
    pub fn accept(&mut self, timestamp_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if timestamp_ms - last < self.params.throttle_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(timestamp_ms);
        true
    }

    /// The two sparkles for an accepted sample: one at the pointer, one at
    /// the trail offset.
    pub fn sparkles_at(&mut self, position: Vec2) -> SmallVec<[ParticleSpec; 2]> {
        let first = ParticleSpec::sparkle(position, self.motion());
        let second = ParticleSpec::sparkle(position + self.params.trail_offset, self.motion());
        smallvec![first, second]
    }

    /// Handle one pointer-move sample. Returns the number of sparkles spawned.
    pub fn on_pointer_move<S: EffectSink, C: Clock>(
        &mut self,
        sample: PointerSample,
        surface: &mut EffectSurface<S, C>,
    ) -> usize {
        if !self.active || !self.accept(sample.timestamp_ms) {
            return 0;
        }
        self.sparkles_at(sample.position)
            .into_iter()
            .filter_map(|spec| surface.spawn(spec))
            .count()
    }

    fn motion(&mut self) -> Vec2 {
        let s = self.params.spread_px;
        Vec2::new(self.rng.gen_range(-s..s), self.rng.gen_range(-s..s))
    }
}
