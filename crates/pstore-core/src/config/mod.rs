//! Configuration management for pstore.
//!
//! Client settings ([`settings::Config`]) are stored as a TOML file and
//! may be overridden from the environment at startup.

pub mod settings;
