//! Repositories and model locator records.
//!
//! A [`Repository`] is a named reference to an artifact store; a
//! [`ModelRecord`] is the immutable identity of one logical model within it.
//! Neither ever opens a connection: artifact byte retrieval belongs to an
//! external collaborator that receives the locator produced here.

use crate::application::Application;
use crate::error::{ZooError, ZooResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Credential policy attached to a repository reference.
///
/// Opaque to this crate; it rides along for the artifact-fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryAuth {
    /// Anonymous access
    #[default]
    None,
    /// Bearer token
    Token(String),
}

/// A named reference to an artifact repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Human-readable repository name
    name: String,
    /// Base URL artifact locators are joined onto
    base_url: Url,
    /// Credential policy
    auth: RepositoryAuth,
}

impl Repository {
    /// Creates an anonymous repository reference.
    pub fn new(name: impl Into<String>, base_url: Url) -> Self {
        Self {
            name: name.into(),
            base_url,
            auth: RepositoryAuth::None,
        }
    }

    /// Attaches a credential policy.
    pub fn with_auth(mut self, auth: RepositoryAuth) -> Self {
        self.auth = auth;
        self
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Credential policy.
    pub fn auth(&self) -> &RepositoryAuth {
        &self.auth
    }

    /// Creates the record identifying one logical model in this repository.
    pub fn model(
        &self,
        application: Application,
        group_id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> ModelRecord {
        ModelRecord {
            application,
            group_id: group_id.into(),
            name: name.into(),
            version: version.into(),
            repository: self.clone(),
        }
    }
}

/// The immutable identity of one logical model artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Application domain tag
    application: Application,
    /// Group id, dot-separated
    group_id: String,
    /// Artifact name
    name: String,
    /// Version string; matched by exact equality
    version: String,
    /// Owning repository
    repository: Repository,
}

impl ModelRecord {
    /// Application domain tag.
    pub fn application(&self) -> Application {
        self.application
    }

    /// Group id.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Artifact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Owning repository.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// The downloadable artifact locator: base URL joined with the
    /// group path (dots become slashes), artifact name, and version.
    pub fn artifact_uri(&self) -> ZooResult<Url> {
        let group_path = self.group_id.replace('.', "/");
        let relative = format!("{}/{}/{}/", group_path, self.name, self.version);

        let mut base = self.repository.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&relative)
            .map_err(|e| ZooError::InvalidRepositoryUri(format!("{}: {}", self.repository.name, e)))
    }
}

impl fmt::Display for ModelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}/{}@{}",
            self.application, self.group_id, self.name, self.version
        )
    }
}
