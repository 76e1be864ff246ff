//! Priority-ordered resolution of one record across all configured sources.
//!
//! Sources are tried strictly in list order. Each attempt runs template
//! substitution, fetch, optional JSON indirection, and placeholder validation;
//! any failure abandons that source only. The first accepted payload wins and
//! no later source is contacted.

mod error;

pub use error::{SourceError, SourceFailure};

use crate::fetch::{parse_http_url, Fetch, FetchResult};
use crate::naming::create_file_name;
use crate::nested_url::find_url_in_bytes;
use crate::source::{AudioArtifact, FieldMap, Source};
use crate::template;
use crate::validate::Validator;

/// Outcome of a resolution run.
#[derive(Debug)]
pub enum Resolution {
    /// A source produced an accepted artifact.
    Found {
        /// Position of the winning source in the list.
        source_index: usize,
        artifact: AudioArtifact,
    },
    /// No source produced one; `failures` lists each attempt in order.
    Exhausted { failures: Vec<SourceFailure> },
}

impl Resolution {
    pub fn artifact(&self) -> Option<&AudioArtifact> {
        match self {
            Resolution::Found { artifact, .. } => Some(artifact),
            Resolution::Exhausted { .. } => None,
        }
    }

    pub fn into_artifact(self) -> Option<AudioArtifact> {
        match self {
            Resolution::Found { artifact, .. } => Some(artifact),
            Resolution::Exhausted { .. } => None,
        }
    }
}

/// Ordered source list bound to a fetcher.
///
/// Holds no mutable state; one instance can resolve any number of records.
#[derive(Debug, Clone)]
pub struct AudioResolver<F> {
    sources: Vec<Source>,
    fetcher: F,
    validator: Validator,
}

impl<F: Fetch> AudioResolver<F> {
    pub fn new(sources: Vec<Source>, fetcher: F) -> Self {
        Self {
            sources,
            fetcher,
            validator: Validator::default(),
        }
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Tries every source in order and returns the first accepted artifact.
    pub fn resolve_audio(&self, fields: &FieldMap, duplicate_on_empty: bool) -> Resolution {
        let mut failures = Vec::new();

        for (index, source) in self.sources.iter().enumerate() {
            match self.try_source(source, fields, duplicate_on_empty) {
                Ok(artifact) => {
                    tracing::debug!(
                        source = %source.name,
                        file = %artifact.file_name,
                        bytes = artifact.bytes.len(),
                        "source accepted"
                    );
                    return Resolution::Found {
                        source_index: index,
                        artifact,
                    };
                }
                Err(error) => {
                    tracing::debug!(source = %source.name, %error, "source failed");
                    failures.push(SourceFailure {
                        source_name: source.name.clone(),
                        error,
                    });
                }
            }
        }

        Resolution::Exhausted { failures }
    }

    /// One source attempt, start to finish.
    pub fn try_source(
        &self,
        source: &Source,
        fields: &FieldMap,
        duplicate_on_empty: bool,
    ) -> Result<AudioArtifact, SourceError> {
        let request = template::resolve(&source.url_template, fields, duplicate_on_empty);
        if parse_http_url(&request.url).is_err() {
            return Err(SourceError::Template(request.url));
        }

        let mut fetched = self.fetcher.fetch(&request.url)?;
        if fetched.is_json {
            fetched = self.follow_json(&fetched)?;
        }

        if !self.validator.is_valid(&fetched.payload) {
            return Err(SourceError::Rejected);
        }

        let extension = fetched.extension.unwrap_or_default();
        let file_name = create_file_name(&source.name, &request.used_keys, fields, &extension);
        Ok(AudioArtifact {
            file_name,
            bytes: fetched.payload,
        })
    }

    /// Locates the media URL in a JSON response and fetches it.
    fn follow_json(&self, wrapper: &FetchResult) -> Result<FetchResult, SourceError> {
        let nested = find_url_in_bytes(&wrapper.payload)?.ok_or(SourceError::NotFound)?;
        tracing::trace!(url = %nested, "following nested URL");
        let fetched = self.fetcher.fetch(&nested)?;
        if fetched.is_json {
            return Err(SourceError::NotFound);
        }
        Ok(fetched)
    }
}

/// Convenience form: resolve `fields` against `sources` with `fetcher`.
pub fn resolve_audio<F: Fetch>(
    fetcher: F,
    sources: &[Source],
    fields: &FieldMap,
    duplicate_on_empty: bool,
) -> Option<AudioArtifact> {
    AudioResolver::new(sources.to_vec(), fetcher)
        .resolve_audio(fields, duplicate_on_empty)
        .into_artifact()
}
