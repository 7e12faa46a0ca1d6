//! Validation errors for registry-entry construction.

/// Failures raised when building or validating a
/// [`RegistryEntry`](crate::entry::RegistryEntry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The entity id was empty.
    #[error("entity id must not be empty")]
    EmptyEntityId,
    /// The entity id was not `domain.object_id` shaped.
    #[error("entity id `{0}` is not in `domain.object_id` form")]
    InvalidEntityId(String),
    /// The platform was empty.
    #[error("platform must not be empty")]
    EmptyPlatform,
}
