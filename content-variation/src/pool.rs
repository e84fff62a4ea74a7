use crate::error::VariationError;
use crate::selector;

/// An ordered, immutable set of candidates for one content facet.
///
/// A pool is never empty; construction fails with a configuration error instead.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    name: String,
    items: Vec<T>,
}

impl<T> Pool<T> {
    pub fn new(name: impl Into<String>, items: Vec<T>) -> Result<Pool<T>, VariationError> {
        let name = name.into();
        if items.is_empty() {
            return Err(VariationError::empty_pool(&name));
        }
        Ok(Pool { name, items })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Fails unless `count` distinct fragments can be drawn from this pool.
    pub fn require(&self, count: usize) -> Result<(), VariationError> {
        if count > self.items.len() {
            return Err(VariationError::InsufficientPoolSize {
                pool: self.name.clone(),
                requested: count,
                available: self.items.len(),
            });
        }
        Ok(())
    }

    /// Returns a copy of this pool with `item` appended.
    pub fn with_appended(&self, item: T) -> Pool<T>
    where
        T: Clone,
    {
        let mut items = self.items.clone();
        items.push(item);
        Pool {
            name: self.name.clone(),
            items,
        }
    }

    pub fn select(&self, identifier: &str, salt: &str) -> Result<&T, VariationError> {
        let index = selector::pick(self, identifier, salt)?;
        Ok(&self.items[index])
    }

    pub fn select_many(
        &self,
        identifier: &str,
        salt: &str,
        count: usize,
    ) -> Result<Vec<&T>, VariationError> {
        let indices = selector::pick_many(self, identifier, salt, count)?;
        Ok(indices.into_iter().map(|index| &self.items[index]).collect())
    }
}
