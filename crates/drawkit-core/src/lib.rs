//! # DrawKit Core
//!
//! Core types, errors, and utilities shared by the DrawKit crates.
//! Provides the error taxonomy, the small enums exchanged between the
//! editor and its configuration, and the event bus that replaces
//! per-value change notification.

pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{DragError, Error, GeometryError, ListError, Result};

pub use event_bus::{
    EditorEvent, EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter, ListEvent,
    ListId, ShapeEvent, SubscriptionId,
};

pub use types::{CreateMode, CursorKind, Key, Modifiers, ShapeKind};
