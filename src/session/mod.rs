/// Rendering a screen set into a sink.
pub mod generate;
