//! In-memory fruit collection

use super::models::Fruit;
use tokio::sync::RwLock;

/// Ordered, append-only list of fruits shared by every request handler.
///
/// Reads take a shared lock and return a snapshot; an append takes the write
/// lock for a single push, so concurrent writers never lose an item. The
/// relative order of two simultaneous appends is whichever acquires the lock
/// first.
#[derive(Debug, Default)]
pub struct FruitStore {
    fruits: RwLock<Vec<Fruit>>,
}

impl FruitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every fruit in insertion order.
    pub async fn list(&self) -> Vec<Fruit> {
        self.fruits.read().await.clone()
    }

    /// Appends `fruit` and returns the new number of stored fruits.
    pub async fn add(&self, fruit: Fruit) -> usize {
        let mut fruits = self.fruits.write().await;
        fruits.push(fruit);
        fruits.len()
    }

    pub async fn len(&self) -> usize {
        self.fruits.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
