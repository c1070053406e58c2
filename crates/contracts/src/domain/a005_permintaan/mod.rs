pub mod aggregate;
pub mod penawaran;

pub use aggregate::{
    ApprovalDto, CreatePermintaanDto, Permintaan, PermintaanItem, PermintaanItemDto,
    StatusPermintaan,
};
pub use penawaran::{cheapest, Penawaran};
