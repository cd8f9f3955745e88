/// Tracks which item of an ordered list is selected.
///
/// The selection is stored as the item's unordered index, so it survives
/// z-order changes.
///
/// # Invalidation
///
/// When the list shrinks, a selection pointing at or past the new length is
/// cleared. When an item is removed, a selection above it shifts down with
/// the storage indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    /// The unordered index of the selected item, if any
    selected: Option<usize>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use drawkit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Returns the unordered index of the selected item.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, unordered: usize) -> bool {
        self.selected == Some(unordered)
    }

    /// Selects an item.
    ///
    /// # Returns
    ///
    /// `true` if the selection changed.
    pub fn select(&mut self, unordered: usize) -> bool {
        self.set(Some(unordered))
    }

    /// Selects the item, or clears the selection if it was already selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use drawkit_designer::selection_manager::SelectionManager;
    ///
    /// let mut manager = SelectionManager::new();
    /// manager.toggle(2);
    /// assert_eq!(manager.selected(), Some(2));
    /// manager.toggle(2);
    /// assert_eq!(manager.selected(), None);
    /// ```
    pub fn toggle(&mut self, unordered: usize) -> bool {
        if self.is_selected(unordered) {
            self.set(None)
        } else {
            self.set(Some(unordered))
        }
    }

    /// Clears the selection, returning `true` if something was selected.
    pub fn clear(&mut self) -> bool {
        self.set(None)
    }

    /// Clears a selection that no longer fits a list of `len` items.
    ///
    /// # Returns
    ///
    /// `true` if the selection was cleared.
    pub fn invalidate_from(&mut self, len: usize) -> bool {
        match self.selected {
            Some(index) if index >= len => self.set(None),
            _ => false,
        }
    }

    /// Follows the removal of the item at `unordered`.
    ///
    /// Removing the selected item clears the selection; removing an item
    /// below it shifts the selection down by one.
    pub fn on_removed(&mut self, unordered: usize) -> bool {
        match self.selected {
            Some(index) if index == unordered => self.set(None),
            Some(index) if index > unordered => self.set(Some(index - 1)),
            _ => false,
        }
    }

    fn set(&mut self, selected: Option<usize>) -> bool {
        if self.selected == selected {
            return false;
        }
        self.selected = selected;
        true
    }
}
