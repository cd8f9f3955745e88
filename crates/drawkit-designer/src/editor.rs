//! Shape editor
//!
//! Routes pointer and key input to the shape list. Pointer positions arrive
//! in device coordinates and are converted through the [`Viewport`]; hit
//! radii are configured in device units and shrink as the view zooms in.
//!
//! At most one drag is live at a time. It is created on pointer-down and
//! finished on pointer-up or when the editor is disabled.

use std::sync::Arc;

use drawkit_core::{
    CreateMode, CursorKind, EditorEvent, EventBus, Key, ListError, Modifiers, Result, ShapeKind,
};
use drawkit_settings::{Config, CreationSettings, InteractionSettings};

use crate::drag::{begin_drag, control_click, CreateDrag, Drag, DragKind, DragStart};
use crate::hit_test::find_point;
use crate::look::Look;
use crate::model::{DesignerShape, Point, Shape};
use crate::polygon_lines::PolygonLines;
use crate::shape_list::ShapeList;
use crate::viewport::Viewport;

pub struct ShapeEditor {
    interaction: InteractionSettings,
    creation: CreationSettings,
    shapes: ShapeList,
    viewport: Viewport,
    drag: Option<Drag>,
    enabled: bool,
    /// Look given to newly created shapes
    look: Look,
    modifiers: Modifiers,
    cursor: CursorKind,
    /// Last pointer position, logical
    position: Point,
}

impl ShapeEditor {
    pub fn new(config: &Config, bus: Arc<EventBus>) -> Self {
        Self {
            interaction: config.interaction,
            creation: config.creation,
            shapes: ShapeList::new(bus),
            viewport: Viewport::new(&config.view),
            drag: None,
            enabled: true,
            look: Look::default(),
            modifiers: Modifiers::NONE,
            cursor: CursorKind::Arrow,
            position: Point::ORIGIN,
        }
    }

    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut ShapeList {
        &mut self.shapes
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn create_kind(&self) -> ShapeKind {
        self.creation.default_shape
    }

    pub fn set_create_kind(&mut self, kind: ShapeKind) {
        self.creation.default_shape = kind;
    }

    pub fn create_mode(&self) -> CreateMode {
        self.creation.mode
    }

    pub fn set_create_mode(&mut self, mode: CreateMode) {
        self.creation.mode = mode;
    }

    pub fn set_look(&mut self, look: Look) {
        self.look = look;
    }

    pub fn drag(&self) -> Option<&Drag> {
        self.drag.as_ref()
    }

    /// The shape a live create drag would produce if released now
    pub fn preview(&self) -> Option<Shape> {
        match &self.drag {
            Some(Drag::Create(drag)) => drag.preview(),
            _ => None,
        }
    }

    /// Enables or disables pointer and key handling.
    ///
    /// Disabling finishes a live drag exactly like a pointer-up.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;

        if !enabled {
            self.finish_drag();
            self.set_cursor(CursorKind::Arrow);
        }
        tracing::debug!("Shape editor {}", if enabled { "enabled" } else { "disabled" });
    }

    /// Updates held modifiers outside of a pointer event
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
        if self.enabled && self.drag.is_none() {
            self.update_hover_cursor();
        }
    }

    pub fn pointer_down(&mut self, device: Point, modifiers: Modifiers) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.finish_drag();
        self.modifiers = modifiers;
        let click = self.viewport.device_to_logical(device);
        self.position = click;
        let settings = self.logical_settings();

        if let Some(index) = self.shapes.find_clicked(click, settings.contains_margin) {
            if self.shapes.selected() != Some(index) {
                self.shapes.select(index)?;
            }

            let mut shape = self
                .shapes
                .shape(index)
                .cloned()
                .ok_or(ListError::OutOfRange {
                    index,
                    len: self.shapes.len(),
                })?;

            match begin_drag(&mut shape, index, click, modifiers, &settings)? {
                DragStart::AltHandled => {
                    self.shapes.set_shape(index, shape)?;
                    self.update_hover_cursor();
                }
                DragStart::Drag(drag) => {
                    if drag.kind() == DragKind::Move {
                        self.set_cursor(CursorKind::ClosedHand);
                    }
                    self.drag = Some(Drag::Shape(drag));
                }
                DragStart::Miss => {
                    tracing::debug!("Click on shape {} hit nothing editable", index);
                }
            }
            return Ok(());
        }

        if modifiers.is_control() && self.try_control_click(click)? {
            return Ok(());
        }

        self.shapes.clear_selection();
        self.drag = Some(Drag::Create(CreateDrag::new(
            self.creation.default_shape,
            click,
            self.interaction.min_create_extent,
        )));
        Ok(())
    }

    pub fn pointer_move(&mut self, device: Point, modifiers: Modifiers) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        self.modifiers = modifiers;
        let position = self.viewport.device_to_logical(device);
        self.position = position;

        let Some(drag) = self.drag.as_mut() else {
            self.update_hover_cursor();
            return Ok(());
        };

        match drag {
            Drag::Shape(drag) => {
                let shape = drag.make_shape(position);
                self.shapes.set_shape(drag.target(), shape)?;
            }
            Drag::Create(drag) => drag.report_position(position),
        }
        Ok(())
    }

    pub fn pointer_up(&mut self, device: Point, modifiers: Modifiers) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let moved = self.pointer_move(device, modifiers);
        self.finish_drag();
        self.update_hover_cursor();
        moved
    }

    /// Handles a key press, returning whether it was used
    pub fn key_down(&mut self, key: Key) -> Result<bool> {
        if !self.enabled {
            return Ok(false);
        }

        match key {
            Key::Delete | Key::Backspace => {
                let Some(selected) = self.shapes.selected() else {
                    return Ok(false);
                };
                self.finish_drag();
                let removed = self.shapes.remove(selected)?;
                tracing::debug!("Deleted {} {}", removed.shape.shape_type(), removed.id);
                self.update_hover_cursor();
                Ok(true)
            }
            Key::Escape => {
                if self.drag.is_some() {
                    self.cancel_drag()?;
                } else if self.shapes.selected().is_some() {
                    self.shapes.clear_selection();
                } else {
                    return Ok(false);
                }
                self.update_hover_cursor();
                Ok(true)
            }
            Key::Other => Ok(false),
        }
    }

    /// Finishes the live drag. A create drag commits or drops its shape here.
    fn finish_drag(&mut self) {
        match self.drag.take() {
            Some(Drag::Shape(drag)) => {
                tracing::debug!("Finished {:?} drag on shape {}", drag.kind(), drag.target());
            }
            Some(Drag::Create(drag)) => match drag.finish() {
                Ok(Some(shape)) => self.commit_created(shape),
                Ok(None) => {}
                Err(e) => tracing::error!("Error creating shape: {}", e),
            },
            None => {}
        }
    }

    /// Drops the live drag, putting an edited shape back as it started
    fn cancel_drag(&mut self) -> Result<()> {
        if let Some(Drag::Shape(drag)) = self.drag.take() {
            tracing::debug!("Cancelled {:?} drag on shape {}", drag.kind(), drag.target());
            self.shapes.set_shape(drag.target(), drag.starting().clone())?;
        }
        Ok(())
    }

    fn commit_created(&mut self, shape: Shape) {
        if self.creation.mode == CreateMode::Replace {
            self.shapes.clear();
        }

        let index = self.shapes.add(shape, self.look);
        if self.creation.select_created {
            if let Err(e) = self.shapes.select(index) {
                tracing::warn!("Could not select created shape: {}", e);
            }
        }
    }

    fn try_control_click(&mut self, click: Point) -> Result<bool> {
        let Some(selected) = self.shapes.selected() else {
            return Ok(false);
        };
        let Some(shape) = self.shapes.shape(selected) else {
            return Ok(false);
        };
        if !shape.capabilities().control_click {
            return Ok(false);
        }

        let mut shape = shape.clone();
        if !control_click(&mut shape, click) {
            return Ok(false);
        }
        self.shapes.set_shape(selected, shape)?;
        Ok(true)
    }

    /// Interaction settings with device-unit radii converted to logical units
    fn logical_settings(&self) -> InteractionSettings {
        let zoom = self.viewport.zoom();
        InteractionSettings {
            hit_radius: self.interaction.hit_radius / zoom,
            contains_margin: self.interaction.contains_margin / zoom,
            ..self.interaction
        }
    }

    fn update_hover_cursor(&mut self) {
        let cursor = self.hover_cursor(self.position);
        self.set_cursor(cursor);
    }

    fn hover_cursor(&self, at: Point) -> CursorKind {
        let settings = self.logical_settings();

        let hovered = self
            .shapes
            .find_clicked(at, settings.contains_margin)
            .and_then(|index| self.shapes.shape(index));

        match hovered {
            Some(shape) => shape_cursor(shape, at, self.modifiers, &settings),
            None => {
                let pencil = self.modifiers.is_control()
                    && self
                        .shapes
                        .selected()
                        .and_then(|index| self.shapes.shape(index))
                        .is_some_and(|shape| shape.capabilities().control_click);
                if pencil {
                    CursorKind::Pencil
                } else {
                    CursorKind::Arrow
                }
            }
        }
    }

    fn set_cursor(&mut self, cursor: CursorKind) {
        if self.cursor == cursor {
            return;
        }
        self.cursor = cursor;
        tracing::trace!("Cursor {:?}", cursor);
        if let Err(e) = self.shapes.bus().publish(EditorEvent::Cursor(cursor)) {
            tracing::trace!("{}", e);
        }
    }
}

/// Cursor for a pointer hovering over `shape`
fn shape_cursor(
    shape: &Shape,
    at: Point,
    modifiers: Modifiers,
    settings: &InteractionSettings,
) -> CursorKind {
    let capabilities = shape.capabilities();
    let points = shape.points();

    if find_point(at, &points, settings.hit_radius).is_some() {
        return if modifiers.is_control() && capabilities.rotate {
            CursorKind::PointRight
        } else if modifiers.is_alt() && capabilities.alt_click {
            CursorKind::Bullseye
        } else if capabilities.edit_point {
            CursorKind::Cross
        } else {
            CursorKind::OpenHand
        };
    }

    if shape.is_closed()
        && capabilities.edit_line
        && PolygonLines::new(&points)
            .find(at, settings.hit_radius)
            .is_some()
    {
        return CursorKind::Sizing;
    }

    CursorKind::OpenHand
}
