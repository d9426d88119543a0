//! Shared fixtures for the integration suites.

use model_zoo_registry::{Application, ModelLoader, ModelZoo, Repository, ZooRegistry};
use url::Url;

/// Registry with zoo `g1` (engine `EngineA`) holding `mobilenet@0.0.1`.
pub fn mobilenet_registry() -> ZooRegistry {
    let repo = Repository::new("central", Url::parse("https://mlrepo.example.org/").unwrap());
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
