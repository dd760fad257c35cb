use crate::particle::{Particle, ParticleId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("could not append particle {0:?}: {1}")]
    Append(ParticleId, String),
    #[error("could not remove particle {0:?}: {1}")]
    Remove(ParticleId, String),
    #[error("unknown particle {0:?}")]
    Unknown(ParticleId),
}

/// The visual surface particles are appended to and removed from.
///
/// Implementations only ever remove the element they appended for a given
/// id; the [`EffectSurface`](crate::EffectSurface) guarantees each id is
/// removed at most once.
pub trait EffectSink {
    fn append(&mut self, particle: &Particle) -> Result<(), SinkError>;
    fn remove(&mut self, id: ParticleId) -> Result<(), SinkError>;
}

impl<S: EffectSink + ?Sized> EffectSink for Box<S> {
    fn append(&mut self, particle: &Particle) -> Result<(), SinkError> {
        (**self).append(particle)
    }

    fn remove(&mut self, id: ParticleId) -> Result<(), SinkError> {
        (**self).remove(id)
    }
}
