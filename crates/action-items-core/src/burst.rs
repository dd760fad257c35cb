use crate::clock::Clock;
use crate::constants::{
    HEART_COUNT, HEART_COUNT_REDUCED, HEART_DELAY_MAX_MS, HEART_DX_SPAN_PX, HEART_DY_MAX_PX,
    HEART_DY_MIN_PX, HEART_ROTATION_MAX_DEG,
};
use crate::particle::ParticleSpec;
use crate::sink::EffectSink;
use crate::surface::EffectSurface;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct BurstParams {
    pub count: usize,
    pub count_reduced: usize,
    pub dx_span_px: f32,
    pub dy_min_px: f32,
    pub dy_max_px: f32,
    pub rotation_max_deg: f32,
    pub delay_max_ms: f32,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            count: HEART_COUNT,
            count_reduced: HEART_COUNT_REDUCED,
            dx_span_px: HEART_DX_SPAN_PX,
            dy_min_px: HEART_DY_MIN_PX,
            dy_max_px: HEART_DY_MAX_PX,
            rotation_max_deg: HEART_ROTATION_MAX_DEG,
            delay_max_ms: HEART_DELAY_MAX_MS,
        }
    }
}

/// One-shot heart burst. Every call is independent of the previous ones.
pub struct BurstEmitter<R: Rng> {
    params: BurstParams,
    rng: R,
}

impl<R: Rng> BurstEmitter<R> {
    pub fn new(params: BurstParams, rng: R) -> Self {
        Self { params, rng }
    }

    pub fn count_for(&self, prefers_reduced_motion: bool) -> usize {
        if prefers_reduced_motion {
            self.params.count_reduced.max(1)
        } else {
            self.params.count.max(1)
        }
    }

    pub fn hearts_at(
        &mut self,
        origin: Vec2,
        prefers_reduced_motion: bool,
    ) -> SmallVec<[ParticleSpec; 16]> {
        let n = self.count_for(prefers_reduced_motion);
        let Self { params: p, rng } = self;
        (0..n)
            .map(|_| {
                let motion = Vec2::new(
                    rng.gen_range(-p.dx_span_px..p.dx_span_px),
                    rng.gen_range(p.dy_min_px..p.dy_max_px),
                );
                let rotation = rng.gen_range(0.0..p.rotation_max_deg);
                let delay = rng.gen_range(0.0..p.delay_max_ms);
                ParticleSpec::heart(origin, motion, rotation, delay)
            })
            .collect()
    }

    /// Spawn a burst at `origin`. Returns the number of hearts spawned.
    pub fn fire<S: EffectSink, C: Clock>(
        &mut self,
        origin: Vec2,
        prefers_reduced_motion: bool,
        surface: &mut EffectSurface<S, C>,
    ) -> usize {
        let spawned = self
            .hearts_at(origin, prefers_reduced_motion)
            .into_iter()
            .filter_map(|spec| surface.spawn(spec))
            .count();
        log::debug!(
            "[fx] heart burst at ({:.0},{:.0}) n={}",
            origin.x,
            origin.y,
            spawned
        );
        spawned
    }
}
