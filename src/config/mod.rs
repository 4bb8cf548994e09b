mod kinds;
mod loader;
pub use kinds::{Complexity, DevelopmentType, JargonLevel};
pub use loader::{DEFAULT_PROJECT, Profile, SessionArgs, SessionConfig};
