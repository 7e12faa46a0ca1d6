//! # entityfilter
//!
//! Include filters for grouping entities: a small predicate tree built once
//! from a group's configuration mapping and queried once per registry entry.
//!
//! ## Responsibilities
//! - Define the [`IncludeFilter`] predicate tree — domain leaves combined
//!   through AND/OR composites — and its
//!   [`is_valid`](filter::IncludeFilter::is_valid) query
//! - Build the tree from a configuration mapping via [`create_filter`],
//!   permissively: configuration shape never fails group setup
//!
//! ## Dependency rule
//! Depends on `entityfilter-registry` only. Building and querying a filter is
//! pure and synchronous — no IO, no clocks, no shared state. A built tree is
//! immutable and may be queried from any number of threads at once.
//!
//! ```
//! use entityfilter::create_filter;
//! use entityfilter_registry::RegistryEntry;
//!
//! let config = serde_json::json!({ "domain": ["sensor", "switch"] });
//! let filter = create_filter(&config);
//!
//! let entry = RegistryEntry::builder()
//!     .entity_id("sensor.outdoor_temperature")
//!     .platform("esphome")
//!     .build()?;
//! assert!(filter.is_valid(&entry));
//! # Ok::<(), entityfilter_registry::RegistryError>(())
//! ```

pub mod config;
pub mod filter;
pub mod operator;

pub use config::{CONF_DOMAIN, create_filter};
pub use filter::IncludeFilter;
pub use operator::FilterOperator;
