// SPDX-License-Identifier: MIT

//! Typed clients for the external managed services.

pub mod cdn;
pub mod identity;
pub mod store;

pub use cdn::CdnClient;
pub use identity::IdentityClient;
pub use store::CourseStore;
