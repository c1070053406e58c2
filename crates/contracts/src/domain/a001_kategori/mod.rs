pub mod aggregate;

pub use aggregate::{Kategori, KategoriDto};
