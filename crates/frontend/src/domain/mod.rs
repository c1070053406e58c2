pub mod a001_kategori;
pub mod a002_supplier;
pub mod a003_barang;
pub mod a004_katalog_vendor;
pub mod a005_permintaan;
pub mod a006_notifikasi;
