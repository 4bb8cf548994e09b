pub mod activities;
mod common;
pub mod config;
pub mod console;
pub mod display;
pub mod generators;
mod logging;
pub mod progress;
mod rng;
mod session;

pub use common::{PROJECT_NAME, PROJECT_VERSION};
pub use config::{Profile, SessionArgs, SessionConfig};
pub use logging::Logging;
pub use rng::Rng;
pub use session::{Pace, Session};
