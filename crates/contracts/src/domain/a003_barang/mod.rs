pub mod aggregate;

pub use aggregate::{
    Barang, CreateBarangDto, JenisMutasi, KategoriRef, MutasiStokDto, Stok, UpdateBarangDto,
    SATUAN_OPTIONS,
};
