//! Wire types shared between the KSM back-office client and its REST backend,
//! plus the platform-independent list contract (filters, pagination,
//! envelope normalization) used by every list screen.

pub mod domain;
pub mod shared;
pub mod system;
