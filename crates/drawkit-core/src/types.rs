//! Small value types shared between the editor, its settings, and the
//! session replay binary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shapes a create drag can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Free-form polygon, created as a rectangle of points
    #[default]
    Polygon,
    /// Quadrilateral with shear and perspective
    Quad,
    /// Ellipse
    Ellipse,
    /// Regular polygon
    RegularPolygon,
    /// Cross marker
    Cross,
}

impl ShapeKind {
    /// All kinds, in menu order.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Polygon,
        ShapeKind::Quad,
        ShapeKind::Ellipse,
        ShapeKind::RegularPolygon,
        ShapeKind::Cross,
    ];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polygon => write!(f, "polygon"),
            Self::Quad => write!(f, "quad"),
            Self::Ellipse => write!(f, "ellipse"),
            Self::RegularPolygon => write!(f, "regular_polygon"),
            Self::Cross => write!(f, "cross"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "polygon" => Ok(Self::Polygon),
            "quad" => Ok(Self::Quad),
            "ellipse" => Ok(Self::Ellipse),
            "regular_polygon" | "regularpolygon" => Ok(Self::RegularPolygon),
            "cross" => Ok(Self::Cross),
            other => Err(format!("Unknown shape kind: {}", other)),
        }
    }
}

/// How a finished create drag commits its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreateMode {
    /// Append the new shape on top of the existing ones
    #[default]
    Append,
    /// Clear the list and keep only the new shape
    Replace,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub control: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        control: false,
    };

    pub const ALT: Modifiers = Modifiers {
        alt: true,
        control: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        alt: false,
        control: true,
    };

    pub fn is_alt(&self) -> bool {
        self.alt
    }

    pub fn is_control(&self) -> bool {
        self.control
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    Other,
}

/// Pointer cursor requested by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CursorKind {
    #[default]
    Arrow,
    OpenHand,
    ClosedHand,
    Cross,
    Bullseye,
    PointRight,
    Sizing,
    Pencil,
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arrow => "arrow",
            Self::OpenHand => "open_hand",
            Self::ClosedHand => "closed_hand",
            Self::Cross => "cross",
            Self::Bullseye => "bullseye",
            Self::PointRight => "point_right",
            Self::Sizing => "sizing",
            Self::Pencil => "pencil",
        };
        write!(f, "{}", name)
    }
}
