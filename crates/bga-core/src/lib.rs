pub mod config;
pub mod logging;

pub mod batch;
pub mod fetch;
pub mod media;
pub mod naming;
pub mod nested_url;
pub mod resolver;
pub mod source;
pub mod template;
pub mod validate;

pub use resolver::{resolve_audio, AudioResolver, Resolution};
pub use source::{AudioArtifact, FieldMap, Source};
