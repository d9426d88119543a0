//! Model loaders.

use crate::error::ZooResult;
use crate::repository::ModelRecord;
use model_zoo_core::ModelHandle;
use serde::{Deserialize, Serialize};
use url::Url;

/// Binds one [`ModelRecord`] to loading identity.
///
/// Owned by exactly one zoo; created at zoo initialization and read-only for
/// the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelLoader {
    record: ModelRecord,
}

impl ModelLoader {
    /// Creates a loader for a record.
    pub fn new(record: ModelRecord) -> Self {
        Self { record }
    }

    /// The bound record.
    pub fn record(&self) -> &ModelRecord {
        &self.record
    }

    /// Artifact name of the bound record.
    pub fn name(&self) -> &str {
        self.record.name()
    }

    /// The downloadable artifact locator for the bound record.
    pub fn locate(&self) -> ZooResult<Url> {
        self.record.artifact_uri()
    }

    /// A model handle for translator construction, carrying the record's
    /// identity as properties.
    pub fn handle(&self) -> ZooResult<ModelHandle> {
        let uri = self.locate()?;
        Ok(ModelHandle::new(self.record.name())
            .with_property("application", self.record.application().as_path())
            .with_property("group_id", self.record.group_id())
            .with_property("version", self.record.version())
            .with_property("artifact_uri", uri.as_str()))
    }
}
