//! Fabric API client module
//!
//! The platform collaborator behind the storage accessor: a trait naming the
//! two capabilities the accessor needs, and an HTTP implementation of it.

mod client;
mod credentials;
pub mod models;
pub mod traits;

pub use client::FabricClient;
pub use credentials::TokenResolver;
pub use models::{FabricItem, FabricWorkspace, ListResponse};
pub use traits::PlatformClient;

#[cfg(test)]
pub use traits::MockPlatformClient;
