//! Shape List
//!
//! The editable set of shapes: an [`OrderedList`] of entries plus the
//! identifier pool. Shape lifecycle changes are announced on the list's bus
//! as [`ShapeEvent`]s.

use std::sync::Arc;

use drawkit_core::{EditorEvent, EventBus, ListError, ListId, ShapeEvent};
use serde::{Deserialize, Serialize};

use crate::id_allocator::IdAllocator;
use crate::look::Look;
use crate::model::{DesignerShape, Point, Shape};
use crate::ordered_list::OrderedList;

/// One shape with its identity and style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeEntry {
    pub id: usize,
    pub shape: Shape,
    #[serde(default)]
    pub look: Look,
}

#[derive(Debug)]
pub struct ShapeList {
    list: OrderedList<ShapeEntry>,
    ids: IdAllocator,
}

impl ShapeList {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            list: OrderedList::new(bus),
            ids: IdAllocator::new(),
        }
    }

    pub fn id(&self) -> ListId {
        self.list.id()
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        self.list.bus()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Underlying ordered list, for z-order inspection
    pub fn ordered(&self) -> &OrderedList<ShapeEntry> {
        &self.list
    }

    /// Adds a shape on top and returns its unordered index
    pub fn add(&mut self, shape: Shape, look: Look) -> usize {
        let entry = self.entry(shape, look);
        let unordered = self.list.append(entry);
        self.publish(ShapeEvent::Created {
            list: self.id(),
            unordered,
        });
        unordered
    }

    /// Adds a shape below every other shape
    pub fn add_bottom(&mut self, shape: Shape, look: Look) -> usize {
        let entry = self.entry(shape, look);
        let unordered = self.list.prepend(entry);
        self.publish(ShapeEvent::Created {
            list: self.id(),
            unordered,
        });
        unordered
    }

    pub fn remove(&mut self, unordered: usize) -> Result<ShapeEntry, ListError> {
        let entry = self.list.remove(unordered)?;
        if let Err(e) = self.ids.release(entry.id) {
            tracing::warn!("Removed shape carried a stale id: {}", e);
        }
        self.publish(ShapeEvent::Deleted {
            list: self.id(),
            unordered,
        });
        Ok(entry)
    }

    pub fn clear(&mut self) {
        let count = self.list.len();
        self.list.clear();
        self.ids.clear();
        for unordered in (0..count).rev() {
            self.publish(ShapeEvent::Deleted {
                list: self.id(),
                unordered,
            });
        }
    }

    pub fn get(&self, unordered: usize) -> Option<&ShapeEntry> {
        self.list.get_unordered(unordered)
    }

    pub fn shape(&self, unordered: usize) -> Option<&Shape> {
        self.get(unordered).map(|entry| &entry.shape)
    }

    /// Replaces a shape's geometry and announces the change
    pub fn set_shape(&mut self, unordered: usize, shape: Shape) -> Result<(), ListError> {
        let len = self.list.len();
        let entry = self
            .list
            .get_unordered_mut(unordered)
            .ok_or(ListError::OutOfRange {
                index: unordered,
                len,
            })?;

        if entry.shape == shape {
            return Ok(());
        }
        entry.shape = shape;

        self.publish(ShapeEvent::Changed {
            list: self.id(),
            unordered,
        });
        Ok(())
    }

    pub fn set_look(&mut self, unordered: usize, look: Look) -> Result<(), ListError> {
        let len = self.list.len();
        let entry = self
            .list
            .get_unordered_mut(unordered)
            .ok_or(ListError::OutOfRange {
                index: unordered,
                len,
            })?;
        entry.look = look;
        Ok(())
    }

    /// Topmost shape whose body, widened by `margin`, contains `point`
    pub fn find_clicked(&self, point: Point, margin: f64) -> Option<usize> {
        self.list
            .iter()
            .rev()
            .find(|(_, entry)| entry.shape.contains_point(point, margin))
            .map(|(unordered, _)| unordered)
    }

    /// `(unordered index, entry)` pairs from bottom to top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &ShapeEntry)> + '_ {
        self.list.iter()
    }

    /// Entries in render order, cloned
    pub fn to_vec(&self) -> Vec<ShapeEntry> {
        self.list.iter().map(|(_, entry)| entry.clone()).collect()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    pub fn select(&mut self, unordered: usize) -> Result<(), ListError> {
        self.list.select(unordered)
    }

    pub fn clear_selection(&mut self) {
        self.list.clear_selection();
    }

    pub fn move_up(&mut self, unordered: usize) -> Result<(), ListError> {
        self.list.move_up(unordered)
    }

    pub fn move_down(&mut self, unordered: usize) -> Result<(), ListError> {
        self.list.move_down(unordered)
    }

    pub fn request_move_up(&self, unordered: usize) {
        self.list.request_move_up(unordered);
    }

    pub fn request_move_down(&self, unordered: usize) {
        self.list.request_move_down(unordered);
    }

    pub fn process_requests(&mut self) -> usize {
        self.list.process_requests()
    }

    fn entry(&mut self, shape: Shape, look: Look) -> ShapeEntry {
        ShapeEntry {
            id: self.ids.allocate(),
            shape,
            look,
        }
    }

    fn publish(&self, event: ShapeEvent) {
        if let Err(e) = self.bus().publish(EditorEvent::Shape(event)) {
            tracing::trace!("{}: {}", self.id(), e);
        }
    }
}
