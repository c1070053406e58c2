pub mod aggregate;

pub use aggregate::{KatalogItem, KatalogItemDto};
