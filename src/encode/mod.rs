/// PNG and in-memory sinks.
pub mod sink;
