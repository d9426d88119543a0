//! The process-wide zoo registry.
//!
//! Population and querying are separate phases, explicit in the types:
//! [`ZooRegistryBuilder`] is the single mutable path, expected to run once
//! during process initialization; `build()` freezes it into a
//! [`ZooRegistry`] that exposes only read accessors. The frozen value is
//! `Send + Sync` and safe for concurrent lock-free reads. Deployments that
//! must re-register at runtime rebuild a registry and swap the shared
//! handle; concurrent writers are out of scope here.

use crate::error::{ZooError, ZooResult};
use crate::loader::ModelLoader;
use crate::query::ModelQuery;
use crate::repository::ModelRecord;
use crate::zoo::ModelZoo;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// An immutable registry of model zoos keyed by group id.
#[derive(Debug, Clone, Default)]
pub struct ZooRegistry {
    zoos: HashMap<String, ModelZoo>,
}

impl ZooRegistry {
    /// Starts building a registry.
    pub fn builder() -> ZooRegistryBuilder {
        ZooRegistryBuilder {
            zoos: HashMap::new(),
        }
    }

    /// The zoo registered for a group id.
    pub fn zoo(&self, group_id: &str) -> Option<&ModelZoo> {
        self.zoos.get(group_id)
    }

    /// Registered group ids, sorted for deterministic iteration.
    pub fn group_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.zoos.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// A group's loaders, in registration order.
    pub fn list_loaders(&self, group_id: &str) -> ZooResult<&[ModelLoader]> {
        self.zoos
            .get(group_id)
            .map(ModelZoo::loaders)
            .ok_or_else(|| ZooError::UnknownGroup(group_id.to_string()))
    }

    /// Every record across all zoos, grouped by sorted group id.
    pub fn list_models(&self) -> Vec<&ModelRecord> {
        self.group_ids()
            .into_iter()
            .flat_map(|id| self.zoos[id].loaders())
            .map(ModelLoader::record)
            .collect()
    }

    /// Resolves a query to the first matching loader in registration order.
    ///
    /// Fails with [`ZooError::UnknownGroup`] when the group id was never
    /// registered, [`ZooError::EngineNotSupported`] when the zoo does not
    /// declare the target engine, and [`ZooError::NoMatchingModel`] when the
    /// scan finds no record satisfying the filters. Deterministic: identical
    /// queries against an unchanged registry return the same loader.
    #[instrument(skip(self))]
    pub fn resolve(&self, query: &ModelQuery) -> ZooResult<&ModelLoader> {
        let zoo = self
            .zoos
            .get(query.group_id())
            .ok_or_else(|| ZooError::UnknownGroup(query.group_id().to_string()))?;

        if !zoo.supports_engine(query.engine()) {
            return Err(ZooError::EngineNotSupported {
                engine: query.engine().to_string(),
                group_id: query.group_id().to_string(),
            });
        }

        let loader = zoo
            .loaders()
            .iter()
            .find(|loader| query.matches(loader.record()))
            .ok_or_else(|| ZooError::NoMatchingModel(query.to_string()))?;

        debug!(record = %loader.record(), "resolved model");
        Ok(loader)
    }
}

/// The mutable population phase of a [`ZooRegistry`].
#[derive(Debug, Default)]
pub struct ZooRegistryBuilder {
    zoos: HashMap<String, ModelZoo>,
}

impl ZooRegistryBuilder {
    /// Registers a zoo under its group id.
    ///
    /// Registration is expected to happen exactly once per zoo at process
    /// start; a second zoo with the same group id fails with
    /// [`ZooError::DuplicateGroupId`].
    pub fn register(&mut self, zoo: ModelZoo) -> ZooResult<()> {
        let group_id = zoo.group_id().to_string();
        if self.zoos.contains_key(&group_id) {
            return Err(ZooError::DuplicateGroupId(group_id));
        }
        debug!(group_id = %group_id, "registered model zoo");
        self.zoos.insert(group_id, zoo);
        Ok(())
    }

    /// Freezes the registry.
    pub fn build(self) -> ZooRegistry {
        ZooRegistry { zoos: self.zoos }
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

    fn registry() -> ZooRegistry {
        let repo = repository();
        let zoo = ModelZoo::builder("g1")
            .engine("EngineA")
            .add_loader(ModelLoader::new(repo.model(
                Application::ImageClassification,
                "g1",
                "mobilenet",
                "0.0.1",
            )))
            .unwrap()
            .build();

        let mut builder = ZooRegistry::builder();
        builder.register(zoo).unwrap();
        builder.build()
    }

    fn query() -> ModelQuery {
        ModelQuery::new(Application::ImageClassification, "g1", "EngineA")
            .with_name("mobilenet")
            .with_version("0.0.1")
    }

    #[test]
    fn test_resolve_exact_match() {
        let registry = registry();
        let loader = registry.resolve(&query()).unwrap();
        assert_eq!(loader.record().name(), "mobilenet");
        assert_eq!(loader.record().version(), "0.0.1");
    }

    #[test]
    fn test_resolve_unknown_group() {
        let registry = registry();
        let query = ModelQuery::new(Application::ImageClassification, "g2", "EngineA");

        assert!(matches!(
            registry.resolve(&query).unwrap_err(),
            ZooError::UnknownGroup(group) if group == "g2"
        ));
    }

    #[test]
    fn test_resolve_unsupported_engine() {
        let registry = registry();
        let query = ModelQuery::new(Application::ImageClassification, "g1", "EngineB");

        match registry.resolve(&query).unwrap_err() {
            ZooError::EngineNotSupported { engine, group_id } => {
                assert_eq!(engine, "EngineB");
                assert_eq!(group_id, "g1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_no_matching_model() {
        let registry = registry();
        let query = ModelQuery::new(Application::ImageClassification, "g1", "EngineA")
            .with_name("mobilenet")
            .with_version("9.9.9");

        assert!(matches!(
            registry.resolve(&query).unwrap_err(),
            ZooError::NoMatchingModel(_)
        ));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let registry = registry();
        let first = registry.resolve(&query()).unwrap().record().clone();
        let second = registry.resolve(&query()).unwrap().record().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_respects_registration_order() {
        let repo = repository();
        // Two loaders for the same application; only the versions differ.
        let zoo = ModelZoo::builder("g1")
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
                "mobilenet",
                "0.0.2",
            )))
            .unwrap()
            .build();

        let mut builder = ZooRegistry::builder();
        builder.register(zoo).unwrap();
        let registry = builder.build();

        let query = ModelQuery::new(Application::ImageClassification, "g1", "EngineA")
            .with_name("mobilenet");
        let resolved = registry.resolve(&query).unwrap();
        assert_eq!(resolved.record().version(), "0.0.1");
    }

    #[test]
    fn test_duplicate_group_id_is_rejected() {
        let mut builder = ZooRegistry::builder();
        builder
            .register(ModelZoo::builder("g1").engine("EngineA").build())
            .unwrap();

        let err = builder
            .register(ModelZoo::builder("g1").engine("EngineB").build())
            .unwrap_err();
        assert!(matches!(err, ZooError::DuplicateGroupId(group) if group == "g1"));
    }

    #[test]
    fn test_list_loaders_unknown_group() {
        let registry = registry();
        assert!(matches!(
            registry.list_loaders("g9").unwrap_err(),
            ZooError::UnknownGroup(_)
        ));
    }

    #[test]
    fn test_list_models_is_sorted_by_group() {
        let repo = repository();
        let mut builder = ZooRegistry::builder();
        for group in ["g2", "g1"] {
            let zoo = ModelZoo::builder(group)
                .engine("EngineA")
                .add_loader(ModelLoader::new(repo.model(
                    Application::ImageClassification,
                    group,
                    "mobilenet",
                    "0.0.1",
                )))
                .unwrap()
                .build();
            builder.register(zoo).unwrap();
        }
        let registry = builder.build();

        let groups: Vec<&str> = registry
            .list_models()
            .iter()
            .map(|record| record.group_id())
            .collect();
        assert_eq!(groups, ["g1", "g2"]);
    }
}
