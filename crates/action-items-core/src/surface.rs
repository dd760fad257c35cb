use crate::clock::Clock;
use crate::particle::{Particle, ParticleId, ParticleSpec};
use crate::sink::EffectSink;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct Expiry {
    deadline_ms: f64,
    id: ParticleId,
}

impl PartialEq for Expiry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Expiry {}

impl PartialOrd for Expiry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Expiry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline_ms
            .total_cmp(&other.deadline_ms)
            .then(self.id.cmp(&other.id))
    }
}

/// Single owner of the effect sink and of every pending removal.
///
/// Spawns are appended immediately; removals happen on [`tick`](Self::tick)
/// once the clock passes each particle's deadline. A particle leaves the
/// queue when it is removed, so it can never be removed twice.
pub struct EffectSurface<S: EffectSink, C: Clock> {
    sink: S,
    clock: C,
    expiries: BinaryHeap<Reverse<Expiry>>,
    next_id: u64,
}

impl<S: EffectSink, C: Clock> EffectSurface<S, C> {
    pub fn new(sink: S, clock: C) -> Self {
        Self {
            sink,
            clock,
            expiries: BinaryHeap::new(),
            next_id: 0,
        }
    }

    pub fn spawn(&mut self, spec: ParticleSpec) -> Option<ParticleId> {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        let particle = Particle::new(id, spec, self.clock.now_ms());
        if let Err(e) = self.sink.append(&particle) {
            log::debug!("[fx] {}", e);
            return None;
        }
        self.expiries.push(Reverse(Expiry {
            deadline_ms: particle.deadline_ms,
            id,
        }));
        Some(id)
    }

    /// Remove every particle whose deadline has passed. Returns how many
    /// were taken off the queue.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now_ms();
        let mut removed = 0;
        while let Some(Reverse(next)) = self.expiries.peek().copied() {
            if next.deadline_ms > now {
                break;
            }
            self.expiries.pop();
            if let Err(e) = self.sink.remove(next.id) {
                log::debug!("[fx] {}", e);
            }
            removed += 1;
        }
        removed
    }

    /// Particles still waiting for their deadline.
    pub fn pending(&self) -> usize {
        self.expiries.len()
    }

    pub fn next_deadline_ms(&self) -> Option<f64> {
        self.expiries.peek().map(|Reverse(e)| e.deadline_ms)
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
