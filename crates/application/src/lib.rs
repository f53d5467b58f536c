//! Holocron Application Layer
//!
//! Ports for the cache store and the caching fetch client, the raw
//! upstream wire shapes, and the use cases orchestrating them.
pub mod ports;
pub mod services;
pub mod swapi;
pub mod use_cases;
