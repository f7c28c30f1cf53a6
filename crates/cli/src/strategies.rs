use versionbump_core::{ManifestStrategy, ProjectKind};
use versionbump_java::MavenManifest;
use versionbump_node::NpmManifest;

// strategy per project kind

pub fn get_strategy(kind: ProjectKind) -> Box<dyn ManifestStrategy> {
    match kind {
        ProjectKind::Quarkus => Box::new(MavenManifest::new()),
        ProjectKind::Angular => Box::new(NpmManifest::new()),
    }
}
