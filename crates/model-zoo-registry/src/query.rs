//! Resolution criteria.

use crate::application::Application;
use crate::repository::ModelRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The criteria a model resolution runs against.
///
/// Group id and target engine are required; name and version are optional
/// filters matched by exact string equality when present. Version-range
/// resolution is an external collaborator concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelQuery {
    /// Application domain filter; [`Application::Undefined`] matches any
    application: Application,
    /// Group id to resolve within
    group_id: String,
    /// Artifact name filter
    name: Option<String>,
    /// Version filter, exact-string
    version: Option<String>,
    /// Target execution engine
    engine: String,
}

impl ModelQuery {
    /// Creates a query for a group and target engine.
    pub fn new(
        application: Application,
        group_id: impl Into<String>,
        engine: impl Into<String>,
    ) -> Self {
        Self {
            application,
            group_id: group_id.into(),
            name: None,
            version: None,
            engine: engine.into(),
        }
    }

    /// Filters by artifact name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filters by exact version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Application domain filter.
    pub fn application(&self) -> Application {
        self.application
    }

    /// Group id.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Artifact name filter, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Version filter, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Target engine name.
    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Returns `true` if a record satisfies every filter in this query.
    ///
    /// Absent name/version filters match anything; present filters match by
    /// exact string equality.
    pub fn matches(&self, record: &ModelRecord) -> bool {
        record.application().matches(self.application)
            && self.name.as_deref().map_or(true, |name| name == record.name())
            && self
                .version
                .as_deref()
                .map_or(true, |version| version == record.version())
    }
}

impl fmt::Display for ModelQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.application, self.group_id)?;
        if let Some(name) = &self.name {
            write!(f, "/{}", name)?;
        }
        if let Some(version) = &self.version {
            write!(f, "@{}", version)?;
        }
        write!(f, " on {}", self.engine)
    }
}
