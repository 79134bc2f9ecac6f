/// The built-in OceanCare screens.
pub mod catalog;
/// Builder helpers for directive lists.
pub mod dsl;
/// Stable content fingerprints.
pub mod fingerprint;
/// Serializable screen schema.
pub mod model;
