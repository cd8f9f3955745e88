//! Ordered List
//!
//! A list whose items keep a stable storage ("unordered") index while their
//! render order is an independent permutation. Later positions in the
//! permutation draw on top.
//!
//! Every item slot owns one subscription on the [`EventBus`] that listens
//! for move-up/move-down requests addressed to that slot. Requests are
//! queued by the subscription and applied by
//! [`OrderedList::process_requests`], so no bus handler ever mutates the
//! list while it is being changed. Whenever the item count changes the
//! subscriptions are torn down from the first affected slot and rebuilt.

use std::collections::VecDeque;
use std::sync::Arc;

use drawkit_core::{
    EditorEvent, EventBus, EventFilter, ListError, ListEvent, ListId, SubscriptionId,
};
use parking_lot::Mutex;

use crate::selection_manager::SelectionManager;

/// A queued z-order change, by unordered index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderRequest {
    MoveUp(usize),
    MoveDown(usize),
}

type RequestQueue = Arc<Mutex<VecDeque<OrderRequest>>>;

pub struct OrderedList<T> {
    id: ListId,
    items: Vec<T>,
    /// Render position -> unordered index
    indices: Vec<usize>,
    /// One subscription per unordered index
    connections: Vec<SubscriptionId>,
    requests: RequestQueue,
    selection: SelectionManager,
    bus: Arc<EventBus>,
}

impl<T> OrderedList<T> {
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self {
            id: ListId::new(),
            items: Vec::new(),
            indices: Vec::new(),
            connections: Vec::new(),
            requests: Arc::new(Mutex::new(VecDeque::new())),
            selection: SelectionManager::new(),
            bus,
        }
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render order as unordered indices
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Adds an item on top of the render order and returns its unordered index
    pub fn append(&mut self, item: T) -> usize {
        let unordered = self.items.len();
        self.will_change(unordered + 1);
        self.items.push(item);
        self.indices.push(unordered);
        self.changed(unordered);
        unordered
    }

    /// Adds an item at the bottom of the render order.
    ///
    /// Storage still appends, so existing unordered indices do not move.
    pub fn prepend(&mut self, item: T) -> usize {
        let unordered = self.items.len();
        self.will_change(unordered + 1);
        self.items.push(item);
        self.indices.insert(0, unordered);
        self.changed(unordered);
        self.publish_order();
        unordered
    }

    /// Removes the item stored at `unordered`.
    ///
    /// Items stored after it move down one slot, and the render order is
    /// renumbered to match.
    pub fn remove(&mut self, unordered: usize) -> Result<T, ListError> {
        let len = self.items.len();
        if unordered >= len {
            return Err(ListError::OutOfRange {
                index: unordered,
                len,
            });
        }

        self.will_change(len - 1);
        let item = self.items.remove(unordered);
        self.indices.retain(|&i| i != unordered);
        for index in &mut self.indices {
            if *index > unordered {
                *index -= 1;
            }
        }

        if self.selection.on_removed(unordered) {
            self.publish_selection();
        }
        self.changed(unordered);
        self.publish_order();
        Ok(item)
    }

    /// Shrinks the list to `len` items, dropping the highest unordered
    /// indices and keeping the relative render order of the rest.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.items.len() {
            return;
        }

        self.will_change(len);
        self.items.truncate(len);
        self.indices.retain(|&i| i < len);
        self.changed(len);
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Render position of the item stored at `unordered`
    pub fn position_of(&self, unordered: usize) -> Option<usize> {
        self.indices.iter().position(|&i| i == unordered)
    }

    /// Moves an item one step towards the top. A no-op when it is already
    /// on top.
    pub fn move_up(&mut self, unordered: usize) -> Result<(), ListError> {
        let position = self
            .position_of(unordered)
            .ok_or(ListError::IndexNotFound { index: unordered })?;

        if position + 1 >= self.indices.len() {
            return Ok(());
        }

        self.indices.swap(position, position + 1);
        self.publish_order();
        Ok(())
    }

    /// Moves an item one step towards the bottom. A no-op when it is
    /// already at the bottom.
    pub fn move_down(&mut self, unordered: usize) -> Result<(), ListError> {
        let position = self
            .position_of(unordered)
            .ok_or(ListError::IndexNotFound { index: unordered })?;

        if position == 0 {
            return Ok(());
        }

        self.indices.swap(position, position - 1);
        self.publish_order();
        Ok(())
    }

    /// Item at render position `ordered`
    pub fn get(&self, ordered: usize) -> Option<&T> {
        self.indices.get(ordered).map(|&i| &self.items[i])
    }

    pub fn get_unordered(&self, unordered: usize) -> Option<&T> {
        self.items.get(unordered)
    }

    pub fn get_unordered_mut(&mut self, unordered: usize) -> Option<&mut T> {
        self.items.get_mut(unordered)
    }

    /// `(unordered index, item)` pairs from bottom to top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> + '_ {
        self.indices.iter().map(move |&i| (i, &self.items[i]))
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn select(&mut self, unordered: usize) -> Result<(), ListError> {
        let len = self.items.len();
        if unordered >= len {
            return Err(ListError::OutOfRange {
                index: unordered,
                len,
            });
        }
        if self.selection.select(unordered) {
            self.publish_selection();
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.selection.clear() {
            self.publish_selection();
        }
    }

    /// Asks the item at `unordered` to move up through its subscription.
    ///
    /// The move happens on the next [`process_requests`](Self::process_requests).
    pub fn request_move_up(&self, unordered: usize) {
        self.publish(ListEvent::MoveUpRequested {
            list: self.id,
            unordered,
        });
    }

    pub fn request_move_down(&self, unordered: usize) {
        self.publish(ListEvent::MoveDownRequested {
            list: self.id,
            unordered,
        });
    }

    /// Applies queued move requests in arrival order, returning how many
    /// were applied. Requests for unknown items are logged and skipped.
    pub fn process_requests(&mut self) -> usize {
        let pending: Vec<OrderRequest> = self.requests.lock().drain(..).collect();
        let mut applied = 0;

        for request in pending {
            let result = match request {
                OrderRequest::MoveUp(unordered) => self.move_up(unordered),
                OrderRequest::MoveDown(unordered) => self.move_down(unordered),
            };

            match result {
                Ok(()) => applied += 1,
                Err(e) => tracing::warn!("Ignoring {:?} on {}: {}", request, self.id, e),
            }
        }

        applied
    }

    /// Number of live per-item subscriptions
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    fn will_change(&self, count: usize) {
        self.publish(ListEvent::CountWillChange {
            list: self.id,
            count,
        });
    }

    fn changed(&mut self, first_changed: usize) {
        debug_assert_eq!(self.items.len(), self.indices.len());

        self.rebuild_connections(first_changed);
        if self.selection.invalidate_from(self.items.len()) {
            self.publish_selection();
        }

        self.publish(ListEvent::CountChanged {
            list: self.id,
            count: self.items.len(),
        });
    }

    /// Drops the subscriptions from `first_changed` on and subscribes every
    /// slot from there to the end of the list.
    fn rebuild_connections(&mut self, first_changed: usize) {
        let keep = first_changed.min(self.connections.len());
        for id in self.connections.drain(keep..) {
            self.bus.unsubscribe(id);
        }

        for unordered in keep..self.items.len() {
            let connection = self.connect(unordered);
            self.connections.push(connection);
        }

        tracing::trace!(
            "{} rebuilt connections from {}, {} live",
            self.id,
            keep,
            self.connections.len()
        );
    }

    fn connect(&self, unordered: usize) -> SubscriptionId {
        let requests = Arc::clone(&self.requests);
        self.bus.subscribe(
            EventFilter::ListItem {
                list: self.id,
                unordered,
            },
            move |event| {
                let request = match event {
                    EditorEvent::List(ListEvent::MoveUpRequested { unordered, .. }) => {
                        OrderRequest::MoveUp(unordered)
                    }
                    EditorEvent::List(ListEvent::MoveDownRequested { unordered, .. }) => {
                        OrderRequest::MoveDown(unordered)
                    }
                    _ => return,
                };
                requests.lock().push_back(request);
            },
        )
    }

    fn publish_order(&self) {
        self.publish(ListEvent::Reordered {
            list: self.id,
            indices: self.indices.clone(),
        });
    }

    fn publish_selection(&self) {
        self.publish(ListEvent::SelectionChanged {
            list: self.id,
            selected: self.selection.selected(),
        });
    }

    fn publish(&self, event: ListEvent) {
        if let Err(e) = self.bus.publish(EditorEvent::List(event)) {
            tracing::trace!("{}: {}", self.id, e);
        }
    }
}

impl<T> Drop for OrderedList<T> {
    fn drop(&mut self) {
        for id in self.connections.drain(..) {
            self.bus.unsubscribe(id);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderedList")
            .field("id", &self.id)
            .field("items", &self.items)
            .field("indices", &self.indices)
            .field("selected", &self.selection.selected())
            .field("connections", &self.connections.len())
            .finish()
    }
}
