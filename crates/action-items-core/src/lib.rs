pub mod burst;
pub mod clock;
pub mod constants;
pub mod particle;
pub mod route;
pub mod scroll;
pub mod sink;
pub mod sparkle;
pub mod surface;

pub use burst::*;
pub use clock::*;
pub use particle::*;
pub use route::*;
pub use scroll::*;
pub use sink::*;
pub use sparkle::*;
pub use surface::*;
