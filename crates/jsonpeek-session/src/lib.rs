//! Session orchestration: external events in, rendered documents out.
//!
//! The host editor integration, panel surface, and persistence are trait
//! boundaries ([`host`], [`jsonpeek_core::PreferenceStore`]); the
//! [`SessionController`] owns all shared mutable state (preferences, sticky
//! slot, panel handle) and runs each event's pipeline to completion before
//! the next — single-threaded, no overlapping render cycles.

pub mod controller;
pub mod host;
pub mod message;

pub use controller::{SessionController, SessionError};
pub use host::{Panel, PanelHost, SelectionSource};
pub use message::PanelMessage;
