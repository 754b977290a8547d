//! # Item Catalog
//!
//! A `Catalog` is the ordered, read-only list of items a knapsack can hold together
//! with its capacity. Item order is significant: the item at index `i` corresponds
//! to gene `i` of every chromosome.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::catalog::{Catalog, Item};
//!
//! let catalog = Catalog::new(vec![Item::new("map", 9, 150), Item::new("compass", 13, 35)], 20);
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.item(0).unwrap().value, 150);
//! ```

#[cfg(feature = "serde")]
use std::path::Path;

#[cfg(feature = "serde")]
use crate::error::{GeneticError, Result};

/// One item that may be packed. Weight and value are assumed positive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: u64, value: u64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// The items on offer and the weight the knapsack can carry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    items: Vec<Item>,
    capacity: u64,
}

impl Catalog {
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    /// The classic 22-item hiking inventory with a capacity of 400.
    pub fn reference() -> Self {
        let items = [
            ("map", 9, 150),
            ("compass", 13, 35),
            ("water", 153, 200),
            ("sandwich", 50, 160),
            ("glucose", 15, 60),
            ("tin", 68, 45),
            ("banana", 27, 60),
            ("apple", 39, 40),
            ("cheese", 23, 30),
            ("beer", 52, 10),
            ("suntan cream", 11, 70),
            ("camera", 32, 30),
            ("t-shirt", 24, 15),
            ("trousers", 48, 10),
            ("umbrella", 73, 40),
            ("waterproof trousers", 42, 70),
            ("waterproof overclothes", 43, 75),
            ("note-case", 22, 80),
            ("sunglasses", 7, 20),
            ("towel", 18, 12),
            ("socks", 4, 50),
            ("book", 30, 10),
        ]
        .into_iter()
        .map(|(name, weight, value)| Item::new(name, weight, value))
        .collect();

        Self::new(items, 400)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns a copy of this catalog with a different capacity.
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Number of items, which is also the gene length of every chromosome.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parses a catalog from JSON of the form
    /// `{"items": [{"name": "map", "weight": 9, "value": 150}], "capacity": 400}`.
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GeneticError::Parse(e.to_string()))
    }

    /// Reads and parses a JSON catalog file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
