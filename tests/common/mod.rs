// Shared host-side fixtures: a sink that records what the surface does to it.

#![allow(dead_code)]
use action_items_core::{
    Clock, EffectSink, EffectSurface, ManualClock, Particle, ParticleId, ParticleKind, SinkError,
};
use std::collections::HashSet;

pub struct RecordingSink {
    clock: ManualClock,
    pub appended: Vec<Particle>,
    pub removed: Vec<(ParticleId, f64)>,
    live: HashSet<ParticleId>,
    pub fail_appends: bool,
    pub fail_removes: bool,
}

impl RecordingSink {
    pub fn new(clock: ManualClock) -> Self {
        Self {
            clock,
            appended: Vec::new(),
            removed: Vec::new(),
            live: HashSet::new(),
            fail_appends: false,
            fail_removes: false,
        }
    }

    pub fn live(&self) -> usize {
        self.live.len()
    }

    pub fn appended_of(&self, kind: ParticleKind) -> Vec<&Particle> {
        self.appended.iter().filter(|p| p.kind() == kind).collect()
    }
}

impl EffectSink for RecordingSink {
    fn append(&mut self, particle: &Particle) -> Result<(), SinkError> {
        if self.fail_appends {
            return Err(SinkError::Append(particle.id, "refused".into()));
        }
        self.live.insert(particle.id);
        self.appended.push(particle.clone());
        Ok(())
    }

    fn remove(&mut self, id: ParticleId) -> Result<(), SinkError> {
        if !self.live.remove(&id) {
            return Err(SinkError::Unknown(id));
        }
        self.removed.push((id, self.clock.now_ms()));
        if self.fail_removes {
            return Err(SinkError::Remove(id, "refused".into()));
        }
        Ok(())
    }
}

pub type TestSurface = EffectSurface<RecordingSink, ManualClock>;

pub fn surface_at(start_ms: f64) -> (TestSurface, ManualClock) {
    let clock = ManualClock::new(start_ms);
    let surface = EffectSurface::new(RecordingSink::new(clock.clone()), clock.clone());
    (surface, clock)
}
