// Glitch canvas: stretch a picture over a window-sized RGBA buffer and tear it
// apart, one user event at a time.

pub mod engine;
pub mod error;
pub mod fx;
pub mod logging;
pub mod profile;
pub mod registry;
pub mod session;
pub mod types;

pub use engine::{EngineState, GlitchEngine};
pub use error::Error;
pub use fx::EffectKind;
pub use profile::GlitchProfile;
pub use registry::{EffectRegistry, EnabledEffects};
pub use session::Session;
pub use types::{PixelBuffer, Region, Rgba};
