//! Ordered, de-duplicated collection of items the user chose to keep.

/// An item with a stable identifier.
pub trait Identified {
    type Id: PartialEq + Clone + std::fmt::Debug;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone)]
pub struct FavoritesSet<T> {
    items: Vec<T>,
}

impl<T> Default for FavoritesSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identified> FavoritesSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.iter().any(|item| &item.id() == id)
    }

    /// Appends `item` unless one with the same id is present.
    /// Returns whether the set changed.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item.id()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the item with `id`. Returns whether the set changed.
    pub fn remove(&mut self, id: &T::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id() != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
