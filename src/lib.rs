//! Geometry exercises: a Cartesian to spherical coordinate converter and a
//! small family of 2D figures sharing the [`Figure`](shapes::Figure) trait.

pub mod config;
pub mod error;
pub mod input;
pub mod shapes;
pub mod spherical;

pub use error::GeometryError;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Initialise `env_logger`; `verbose` lowers the default filter to `debug`.
/// `RUST_LOG` still takes precedence when set.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
