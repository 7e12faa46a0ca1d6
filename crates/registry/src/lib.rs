//! # entityfilter-registry
//!
//! Read-only view of the host automation platform's entity registry.
//!
//! ## Responsibilities
//! - Model **registry entries**: the record the host keeps per registered
//!   entity (registry id, `domain.object_id` entity id, platform, area,
//!   disabled marker, timestamps)
//! - Expose the **domain** attribute that include filters are evaluated
//!   against
//! - Enforce entry invariants at construction time
//!
//! ## Dependency rule
//! This crate has **no internal dependencies** and performs no IO. The host
//! platform owns and supplies the records; nothing in this workspace mutates
//! an entry after construction — filters only ever receive `&RegistryEntry`.

pub mod entry;
pub mod error;
pub mod id;

pub use entry::{DisabledBy, RegistryEntry, RegistryEntryBuilder, Timestamp};
pub use error::RegistryError;
pub use id::RegistryId;
