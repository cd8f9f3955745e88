//! # Event Bus Module
//!
//! Change notification between the shape list, its per-item controls, and
//! whatever displays them.
//!
//! ## Overview
//!
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Handlers run synchronously on the publishing thread
//!
//! ## Usage
//!
//! ```rust
//! use drawkit_core::event_bus::{EditorEvent, EventBus, EventFilter, ListEvent, ListId};
//!
//! let bus = EventBus::new();
//! let list = ListId::new();
//!
//! let subscription = bus.subscribe(EventFilter::List(list), |event| {
//!     if let EditorEvent::List(ListEvent::CountChanged { count, .. }) = event {
//!         assert_eq!(count, 2);
//!     }
//! });
//!
//! bus.publish(EditorEvent::List(ListEvent::CountChanged { list, count: 2 }))
//!     .ok();
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
