//! Recorded editing sessions
//!
//! A session is a JSON list of input steps in device coordinates. Replaying
//! it drives a [`ShapeEditor`] exactly as live pointer and key input would.

use std::path::Path;

use anyhow::Context;
use drawkit_core::{CreateMode, Key, Modifiers, ShapeKind};
use drawkit_designer::{Look, Point, ShapeEditor};
use serde::{Deserialize, Serialize};

/// One recorded input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        control: bool,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        control: bool,
    },
    Up {
        x: f64,
        y: f64,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        control: bool,
    },
    Key {
        key: Key,
    },
    /// Shape produced by later create drags
    Kind {
        kind: ShapeKind,
    },
    Mode {
        mode: CreateMode,
    },
    Look {
        look: Look,
    },
    /// Zoom about a device position
    Zoom {
        zoom: f64,
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    Pan {
        dx: f64,
        dy: f64,
    },
    /// Raise a shape one step in the z-order
    Raise {
        index: usize,
    },
    Lower {
        index: usize,
    },
    Enable {
        enabled: bool,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Session {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid session JSON")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("In {}", path.display()))
    }

    /// Feeds every step to `editor`, stopping at the first failing step.
    ///
    /// Queued z-order requests are processed after each step.
    pub fn replay(&self, editor: &mut ShapeEditor) -> anyhow::Result<()> {
        for (number, step) in self.steps.iter().enumerate() {
            apply(editor, step).with_context(|| format!("Step {} ({:?}) failed", number, step))?;
            editor.shapes_mut().process_requests();
        }
        tracing::info!(
            "Replayed {} steps, {} shapes",
            self.steps.len(),
            editor.shapes().len()
        );
        Ok(())
    }
}

fn modifiers(alt: bool, control: bool) -> Modifiers {
    Modifiers { alt, control }
}

fn apply(editor: &mut ShapeEditor, step: &Step) -> drawkit_core::Result<()> {
    match *step {
        Step::Down { x, y, alt, control } => {
            editor.pointer_down(Point::new(x, y), modifiers(alt, control))?
        }
        Step::Move { x, y, alt, control } => {
            editor.pointer_move(Point::new(x, y), modifiers(alt, control))?
        }
        Step::Up { x, y, alt, control } => {
            editor.pointer_up(Point::new(x, y), modifiers(alt, control))?
        }
        Step::Key { key } => {
            if !editor.key_down(key)? {
                tracing::debug!("Key {:?} ignored", key);
            }
        }
        Step::Kind { kind } => editor.set_create_kind(kind),
        Step::Mode { mode } => editor.set_create_mode(mode),
        Step::Look { look } => editor.set_look(look),
        Step::Zoom { zoom, x, y } => editor.viewport_mut().zoom_at(Point::new(x, y), zoom),
        Step::Pan { dx, dy } => editor.viewport_mut().pan_by(Point::new(dx, dy)),
        Step::Raise { index } => editor.shapes().request_move_up(index),
        Step::Lower { index } => editor.shapes().request_move_down(index),
        Step::Enable { enabled } => editor.set_enabled(enabled),
    }
    Ok(())
}
