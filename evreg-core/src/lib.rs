//! Core types for evreg.
//!
//! This crate provides everything the CLI builds on:
//! - `Event` and `EventCategory`, the record model
//! - `codec` for turning events into data file lines and back
//! - `Store`, the ordered event list mirrored to disk
//! - `User` and `Participation` for confirmed attendance
//! - `EvregConfig` for ~/.config/evreg/config.toml

pub mod category;
pub mod codec;
pub mod config;
pub mod error;
pub mod event;
pub mod participation;
pub mod store;
pub mod user;

pub use category::EventCategory;
pub use codec::Format;
pub use config::EvregConfig;
pub use error::{EvregError, EvregResult, RecordError};
pub use event::{Event, NewEvent};
pub use participation::Participation;
pub use store::{EventId, LoadPolicy, Store, StoreOptions};
pub use user::User;
