//! # DrawKit Designer
//!
//! Interactive editing of 2D vector shapes: the geometry model, hit-testing,
//! pointer drags, and the z-ordered shape list.
//!
//! ## Core Components
//!
//! ### Geometry
//! - **Model**: Polygons, quadrilaterals with shear and perspective, ellipses,
//!   regular polygons, crosses, edges, and open segment chains
//! - **Lines**: Infinite lines, segments, and per-edge line sets used to
//!   rebuild outlines after an edge is dragged
//! - **Hit-testing**: Odd-even containment and nearest-vertex lookup
//!
//! ### Interaction
//! - **Drags**: Move, edit-point, rotate-point, edit-line, and create
//! - **Editor**: Pointer and key routing, cursor feedback, viewport mapping
//!
//! ### Lists
//! - **Ordered list**: Stable storage indices with a separate render order
//! - **Shape list**: Shapes with identities, looks, and lifecycle events
//!
//! ## Architecture
//!
//! ```text
//! ShapeEditor (pointer/key input)
//!   ├── Viewport (device <-> logical)
//!   ├── Drag (one live drag)
//!   └── ShapeList
//!         └── OrderedList ── EventBus (per-item move requests)
//!
//! Renderer (DrawCommand stream) ── RenderBackend (tiny-skia pixmap)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use drawkit_core::{EventBus, Modifiers};
//! use drawkit_designer::{Point, ShapeEditor};
//! use drawkit_settings::Config;
//!
//! let mut editor = ShapeEditor::new(&Config::default(), Arc::new(EventBus::new()));
//! editor.pointer_down(Point::new(10.0, 10.0), Modifiers::NONE).unwrap();
//! editor.pointer_up(Point::new(60.0, 40.0), Modifiers::NONE).unwrap();
//! assert_eq!(editor.shapes().len(), 1);
//! ```

pub mod angles;
pub mod drag;
pub mod editor;
pub mod id_allocator;
pub mod line;
pub mod look;
pub mod model;
pub mod ordered_list;
pub mod polygon_lines;
pub mod quad_lines;
pub mod renderer;
pub mod selection_manager;
pub mod shape_list;
pub mod viewport;

pub use angles::{adjust_rotation, angle_difference, wrap_degrees};
pub use drag::{begin_drag, create_shape, CreateDrag, Drag, DragKind, DragOrigin, DragStart, ShapeDrag};
pub use editor::ShapeEditor;
pub use hit_test::{contains, find_point};
pub use id_allocator::IdAllocator;
pub use line::{Line, Segment};
pub use look::{Look, Rgba};
pub use model::{
    rotate_point, DesignCross, DesignEdge, DesignEllipse, DesignPolygon, DesignQuad,
    DesignRegularPolygon, DesignSegments, DesignerShape, Point, Shape, ShapeCapabilities,
    ShapeType, Size,
};
pub use ordered_list::{OrderRequest, OrderedList};
pub use polygon_lines::PolygonLines;
pub use quad_lines::QuadLines;
pub use renderer::{render_shapes, shape_commands, DrawCommand, PixmapBackend, RenderBackend};
pub use selection_manager::SelectionManager;
pub use shape_list::{ShapeEntry, ShapeList};
pub use viewport::Viewport;
