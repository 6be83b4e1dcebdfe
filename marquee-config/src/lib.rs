//! Shared configuration library for Marquee.
//!
//! Settings come from, in order of precedence: per-field environment
//! overrides, a settings file (TOML or JSON, found through the environment or
//! a list of default locations), and built-in defaults. An optional `.env`
//! file is read first so its variables take part in the same lookup. The
//! result passes through guard rails that reject unusable values and collect
//! warnings for questionable ones.

pub mod constants;
pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{CarouselConfig, Config, ConfigMetadata, ConfigSource};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
