//! interact-rs: pointer/touch interaction engine for chart surfaces.
//!
//! This crate owns hit-testing and interaction dispatch only: it maps raw
//! pointer/touch coordinates to logical data points, drives hover/drag/click
//! state, and raises semantic events. Rendering, scale math beyond the stock
//! linear mapper, and tooltip content stay behind narrow collaborator traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{InteractionEngine, InteractionEngineConfig};
pub use error::{InteractError, InteractResult};
