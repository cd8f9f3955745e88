//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so a session can be logged and
//! replayed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::CursorKind;

/// Identity of one ordered list on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(Uuid);

impl ListId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "List({})", &self.0.to_string()[..8])
    }
}

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Ordered list structure and z-order
    List(ListEvent),
    /// Shape values inside a list
    Shape(ShapeEvent),
    /// Cursor requested by the editor
    Cursor(CursorKind),
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::List(_) => EventCategory::List,
            EditorEvent::Shape(_) => EventCategory::Shape,
            EditorEvent::Cursor(_) => EventCategory::Cursor,
        }
    }

    /// The list this event concerns, if any
    pub fn list(&self) -> Option<ListId> {
        match self {
            EditorEvent::List(e) => Some(e.list()),
            EditorEvent::Shape(e) => Some(e.list()),
            EditorEvent::Cursor(_) => None,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::List(e) => e.description(),
            EditorEvent::Shape(e) => e.description(),
            EditorEvent::Cursor(kind) => format!("Cursor set to {}", kind),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    List,
    Shape,
    Cursor,
}

/// Ordered list events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEvent {
    /// Published before the item count changes
    CountWillChange { list: ListId, count: usize },
    /// Published after the item count changed
    CountChanged { list: ListId, count: usize },
    /// The render-order permutation changed
    Reordered { list: ListId, indices: Vec<usize> },
    /// An item asks to be drawn one step later (closer to the top)
    MoveUpRequested { list: ListId, unordered: usize },
    /// An item asks to be drawn one step earlier
    MoveDownRequested { list: ListId, unordered: usize },
    /// The selected item changed
    SelectionChanged {
        list: ListId,
        selected: Option<usize>,
    },
}

impl ListEvent {
    pub fn list(&self) -> ListId {
        match self {
            ListEvent::CountWillChange { list, .. }
            | ListEvent::CountChanged { list, .. }
            | ListEvent::Reordered { list, .. }
            | ListEvent::MoveUpRequested { list, .. }
            | ListEvent::MoveDownRequested { list, .. }
            | ListEvent::SelectionChanged { list, .. } => *list,
        }
    }

    pub fn description(&self) -> String {
        match self {
            ListEvent::CountWillChange { count, .. } => {
                format!("List count will change to {}", count)
            }
            ListEvent::CountChanged { count, .. } => format!("List count changed to {}", count),
            ListEvent::Reordered { indices, .. } => format!("List reordered: {:?}", indices),
            ListEvent::MoveUpRequested { unordered, .. } => {
                format!("Move up requested for item {}", unordered)
            }
            ListEvent::MoveDownRequested { unordered, .. } => {
                format!("Move down requested for item {}", unordered)
            }
            ListEvent::SelectionChanged { selected, .. } => match selected {
                Some(index) => format!("Selected item {}", index),
                None => "Selection cleared".to_string(),
            },
        }
    }
}

/// Shape value events, keyed by unordered index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeEvent {
    Created { list: ListId, unordered: usize },
    Changed { list: ListId, unordered: usize },
    Deleted { list: ListId, unordered: usize },
}

impl ShapeEvent {
    pub fn list(&self) -> ListId {
        match self {
            ShapeEvent::Created { list, .. }
            | ShapeEvent::Changed { list, .. }
            | ShapeEvent::Deleted { list, .. } => *list,
        }
    }

    pub fn description(&self) -> String {
        match self {
            ShapeEvent::Created { unordered, .. } => format!("Shape {} created", unordered),
            ShapeEvent::Changed { unordered, .. } => format!("Shape {} changed", unordered),
            ShapeEvent::Deleted { unordered, .. } => format!("Shape {} deleted", unordered),
        }
    }
}
