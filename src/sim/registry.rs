//! Registry for short-lived, self-expiring entities
//!
//! Particles, floating texts and power-ups all follow the same per-tick protocol:
//! update every live entity in order, then filter out the ones that are done.
//! Removal is a `retain` pass, so no survivor is skipped or reordered.
//!
//! Nothing caps the entity count; lifetimes keep a single level bounded.

/// Something with a per-tick update and a natural end
pub trait Transient {
    /// Advance one tick
    fn update(&mut self);
    /// True once the entity should be dropped (lifetime spent, left the screen, ...)
    fn is_expired(&self) -> bool;
}

/// Ordered collection of transient entities
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Transient> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity; the next `tick` call updates it, even within the same game tick
    pub fn spawn(&mut self, item: T) {
        self.items.push(item);
    }

    /// Update everything, then drop expired entities
    pub fn tick(&mut self) {
        self.tick_with(|_| false);
    }

    /// Update everything, then drop entities that expired or that `consume` claims
    ///
    /// `consume` sees each surviving entity exactly once per call, so an effect triggered
    /// from it fires at most once per entity.
    pub fn tick_with<F>(&mut self, mut consume: F)
    where
        F: FnMut(&T) -> bool,
    {
        for item in self.items.iter_mut() {
            item.update();
        }
        self.items.retain(|item| !item.is_expired() && !consume(item));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
