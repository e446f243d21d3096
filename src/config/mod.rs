//! Configuration types for scope resolution and descriptor discovery.
//!
//! Options are layered: **CLI argument > config file > variant default**.
//! [`file`] holds the on-disk TOML representation; the other modules hold the
//! resolved option structs handed to the library.

pub mod discovery;
pub mod file;
pub mod overrides;

pub use discovery::DiscoveryOptions;
pub use file::FileConfig;
pub use overrides::ScopeOverrides;
