//! Directory discovery source tests

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lumber_application::constants::PROVIDER_RESOURCE;
use lumber_application::discovery::{
    ChainedSources, DirectorySources, ProviderRegistry, SourceLocator,
};
use tempfile::TempDir;

use crate::support::{BrokenSources, ClassBehaviour, StaticCatalog, StaticSources};

fn write_record(root: &Path, entry: &str, class: &str, priority: i32) {
    let path = root.join(entry).join(PROVIDER_RESOURCE);
    fs::create_dir_all(path.parent().expect("record has a parent")).expect("mkdir");
    fs::write(
        &path,
        format!("LoggerContextFactory = \"{class}\"\nApiVersion = \"2.0.0\"\nFactoryPriority = {priority}\n"),
    )
    .expect("write record");
}

#[test]
fn test_finds_records_in_sorted_order() {
    let dir = TempDir::new().expect("tempdir");
    write_record(dir.path(), "zeta-backend", "acme.Beta", 1);
    write_record(dir.path(), "alpha-backend", "acme.Alpha", 2);
    fs::write(dir.path().join("unrelated.toml"), "x = 1").expect("write");

    let sources = DirectorySources::new([dir.path()]).sources().expect("scan");
    assert_eq!(sources.len(), 2);
    assert!(sources[0].id.contains("alpha-backend"));
    assert!(sources[1].id.contains("zeta-backend"));
}

#[test]
fn test_missing_root_does_not_hide_other_roots() {
    let dir = TempDir::new().expect("tempdir");
    write_record(dir.path(), "lib", "acme.Alpha", 1);

    let locator = DirectorySources::new([dir.path().join("does-not-exist"), dir.path().to_path_buf()]);
    let sources = locator.sources().expect("scan");
    assert_eq!(sources.len(), 1);
}

#[test]
fn test_directory_records_feed_the_registry() {
    let dir = TempDir::new().expect("tempdir");
    write_record(dir.path(), "a", "acme.Alpha", 3);
    write_record(dir.path(), "b", "acme.Beta", 8);

    let catalog = StaticCatalog::new()
        .class("acme.Alpha", ClassBehaviour::Ok)
        .class("acme.Beta", ClassBehaviour::Ok);
    let registry = ProviderRegistry::new(
        Arc::new(DirectorySources::new([dir.path()])),
        Arc::new(catalog),
    );

    let found = registry.discover();
    assert_eq!(found.len(), 2);
    assert_eq!(found[1].class_name, "acme.Beta");
}

#[test]
fn test_directory_named_like_record_is_ignored() {
    let dir = TempDir::new().expect("tempdir");
    // A directory named like a record is not a record
    fs::create_dir_all(dir.path().join("broken").join(PROVIDER_RESOURCE)).expect("mkdir");
    write_record(dir.path(), "good", "acme.Alpha", 1);

    let catalog = StaticCatalog::new().class("acme.Alpha", ClassBehaviour::Ok);
    let registry = ProviderRegistry::new(
        Arc::new(DirectorySources::new([dir.path()])),
        Arc::new(catalog),
    );
    assert_eq!(registry.discover().len(), 1);
}

#[test]
fn test_chain_tolerates_failing_locator() {
    let chain = ChainedSources::new()
        .with(Arc::new(BrokenSources))
        .with(Arc::new(StaticSources::new().provider("s", "acme.Alpha", 1)));

    let sources = chain.sources().expect("chain never fails");
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].id, "s");
    assert!(chain.describe().contains("broken"));
}
