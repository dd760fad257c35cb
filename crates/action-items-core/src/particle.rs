//! Decorative particles handed to an [`EffectSink`](crate::EffectSink).
//!
//! A particle is immutable once spawned; all of its motion is declarative and
//! carried to the styling layer as CSS custom properties.

use crate::constants::{HEART_LIFETIME_MS, SPARKLE_LIFETIME_MS};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Sparkle,
    Heart,
}

impl ParticleKind {
    /// CSS class the stylesheet animates.
    pub fn class_name(self) -> &'static str {
        match self {
            ParticleKind::Sparkle => "sparkle",
            ParticleKind::Heart => "heart",
        }
    }

    pub fn tag_name(self) -> &'static str {
        match self {
            ParticleKind::Sparkle => "span",
            ParticleKind::Heart => "div",
        }
    }

    pub fn lifetime_ms(self) -> f64 {
        match self {
            ParticleKind::Sparkle => SPARKLE_LIFETIME_MS,
            ParticleKind::Heart => HEART_LIFETIME_MS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

/// What an emitter asks the surface to spawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub kind: ParticleKind,
    pub origin: Vec2,
    pub motion: Vec2,
    pub rotation_deg: f32,
    pub delay_ms: f32,
}

impl ParticleSpec {
    pub fn sparkle(origin: Vec2, motion: Vec2) -> Self {
        Self {
            kind: ParticleKind::Sparkle,
            origin,
            motion,
            rotation_deg: 0.0,
            delay_ms: 0.0,
        }
    }

    pub fn heart(origin: Vec2, motion: Vec2, rotation_deg: f32, delay_ms: f32) -> Self {
        Self {
            kind: ParticleKind::Heart,
            origin,
            motion,
            rotation_deg,
            delay_ms,
        }
    }
}

/// A spawned particle with its identity and removal deadline.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub spec: ParticleSpec,
    pub spawned_at_ms: f64,
    pub deadline_ms: f64,
}

impl Particle {
    pub fn new(id: ParticleId, spec: ParticleSpec, now_ms: f64) -> Self {
        let deadline_ms = now_ms + spec.kind.lifetime_ms();
        Self {
            id,
            spec,
            spawned_at_ms: now_ms,
            deadline_ms,
        }
    }

    #[inline]
    pub fn kind(&self) -> ParticleKind {
        self.spec.kind
    }

    /// Custom properties consumed by the `.sparkle` / `.heart` keyframes.
    ///
    /// Sparkles only carry `--dx`/`--dy`; hearts add `--rot` and `--delay`
    /// (seconds, as the stylesheet's `animation-delay` expects).
    pub fn style_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![
            ("--dx", format!("{}px", self.spec.motion.x)),
            ("--dy", format!("{}px", self.spec.motion.y)),
        ];
        if self.spec.kind == ParticleKind::Heart {
            vars.push(("--rot", format!("{}deg", self.spec.rotation_deg)));
            vars.push(("--delay", format!("{}s", self.spec.delay_ms / 1000.0)));
        }
        vars
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.spec.origin.x)
    }

    pub fn top_px(&self) -> String {
        format!("{}px", self.spec.origin.y)
    }
}
