//! Model zoos.
//!
//! A zoo is a named collection of model loaders sharing a group id, plus the
//! set of execution engines its artifacts run on. Zoos are populated through
//! [`ModelZooBuilder`] and frozen by `build()`; the built value exposes only
//! read accessors, so concurrent lock-free reads are safe by construction.

use crate::error::{ZooError, ZooResult};
use crate::loader::ModelLoader;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// An immutable collection of model loaders for one group id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelZoo {
    /// Group id shared by every loader
    group_id: String,
    /// Engine names this zoo's artifacts run on
    engines: HashSet<String>,
    /// Loaders in registration order
    loaders: Vec<ModelLoader>,
}

impl ModelZoo {
    /// Starts building a zoo for a group id.
    pub fn builder(group_id: impl Into<String>) -> ModelZooBuilder {
        ModelZooBuilder {
            group_id: group_id.into(),
            engines: HashSet::new(),
            loaders: Vec::new(),
        }
    }

    /// Group id.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// Loaders, in registration order.
    pub fn loaders(&self) -> &[ModelLoader] {
        &self.loaders
    }

    /// Declared engine names.
    pub fn supported_engines(&self) -> &HashSet<String> {
        &self.engines
    }

    /// Set membership for a target engine.
    pub fn supports_engine(&self, engine: &str) -> bool {
        self.engines.contains(engine)
    }

    /// First loader with the given artifact name, in registration order.
    pub fn model_loader(&self, name: &str) -> Option<&ModelLoader> {
        self.loaders.iter().find(|loader| loader.name() == name)
    }
}

/// The mutable population phase of a [`ModelZoo`].
///
/// `build()` consumes the builder; there is no way to mutate a zoo after it.
#[derive(Debug)]
pub struct ModelZooBuilder {
    group_id: String,
    engines: HashSet<String>,
    loaders: Vec<ModelLoader>,
}

impl ModelZooBuilder {
    /// Declares a supported engine.
    pub fn engine(mut self, name: impl Into<String>) -> Self {
        self.engines.insert(name.into());
        self
    }

    /// Appends a loader.
    ///
    /// Every loader must belong to the zoo's group id; a mismatch fails with
    /// [`ZooError::GroupMismatch`].
    pub fn add_loader(mut self, loader: ModelLoader) -> ZooResult<Self> {
        if loader.record().group_id() != self.group_id {
            return Err(ZooError::GroupMismatch {
                expected: self.group_id.clone(),
                found: loader.record().group_id().to_string(),
            });
        }
        self.loaders.push(loader);
        Ok(self)
    }

    /// Freezes the zoo.
    pub fn build(self) -> ModelZoo {
        debug!(
            group_id = %self.group_id,
            loaders = self.loaders.len(),
            engines = self.engines.len(),
            "built model zoo"
        );
        ModelZoo {
            group_id: self.group_id,
            engines: self.engines,
            loaders: self.loaders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Application;
    use crate::repository::Repository;
    use url::Url;

    fn repository() -> Repository {
        Repository::new("central", Url::parse("https://mlrepo.example.org/").unwrap())
    }

    fn zoo() -> ModelZoo {
        let repo = repository();
        ModelZoo::builder("g1")
            .engine("EngineA")
            .add_loader(ModelLoader::new(repo.model(
                Application::ImageClassification,
                "g1",
                "mobilenet",
                "0.0.1",
            )))
            .unwrap()
            .add_loader(ModelLoader::new(repo.model(
                Application::ImageClassification,
                "g1",
                "resnet",
                "0.0.2",
            )))
            .unwrap()
            .build()
    }

    #[test]
    fn test_loaders_keep_registration_order() {
        let zoo = zoo();
        let names: Vec<&str> = zoo.loaders().iter().map(ModelLoader::name).collect();
        assert_eq!(names, ["mobilenet", "resnet"]);
    }

    #[test]
    fn test_engine_membership() {
        let zoo = zoo();
        assert!(zoo.supports_engine("EngineA"));
        assert!(!zoo.supports_engine("EngineB"));
    }

    #[test]
    fn test_foreign_loader_is_rejected() {
        let repo = repository();
        let foreign = ModelLoader::new(repo.model(
            Application::ImageClassification,
            "g2",
            "mobilenet",
            "0.0.1",
        ));

        let err = ModelZoo::builder("g1").add_loader(foreign).unwrap_err();
        match err {
            ZooError::GroupMismatch { expected, found } => {
                assert_eq!(expected, "g1");
                assert_eq!(found, "g2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_model_loader_by_name() {
        let zoo = zoo();
        assert_eq!(zoo.model_loader("resnet").unwrap().name(), "resnet");
        assert!(zoo.model_loader("bert").is_none());
    }
}
