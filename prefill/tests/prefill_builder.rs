//! Integration tests driving the prefill builder through the public API,
//! using the in-memory storage adapter and the fixture generator factory.

use std::path::PathBuf;
use std::sync::Arc;

use rstest::rstest;

use demo_content::Lexicon;
use prefill::domain::ports::{FixtureRecordGeneratorFactory, GeneratorError};
use prefill::domain::{ContentTypeName, PrefillBuilder};
use prefill::outbound::{DemoRecordGeneratorFactory, InMemoryContentStorage};

fn names(raw: &[&str]) -> Vec<ContentTypeName> {
    raw.iter().copied().map(ContentTypeName::from).collect()
}

#[rstest]
#[tokio::test]
async fn mixed_batch_produces_consolidated_report() {
    // blog is empty, page is at the ceiling of 5.
    let storage = Arc::new(InMemoryContentStorage::default());
    storage.insert_content_type("blog", false);
    storage.insert_content_type("page", false);
    storage.set_record_count("page", 5);

    let factory = Arc::new(FixtureRecordGeneratorFactory::default());
    let builder = PrefillBuilder::new(storage, factory.clone(), 5);

    let report = builder
        .build(&names(&["blog", "page"]), 3, false)
        .await
        .expect("build succeeds");

    assert_eq!(factory.calls(), vec![(ContentTypeName::from("blog"), 3)]);
    let created = report
        .created()
        .get(&ContentTypeName::from("blog"))
        .expect("blog records");
    assert_eq!(created.len(), 3);
    assert!(report.warnings().contains_key(&ContentTypeName::from("page")));
    assert!(report.errors().is_empty());
}

#[rstest]
#[tokio::test]
async fn missing_schema_is_reported_per_type_and_batch_continues() {
    let storage = Arc::new(InMemoryContentStorage::default());
    storage.insert_content_type("showcases", false);
    storage.mark_schema_missing("showcases");
    storage.insert_content_type("blog", false);

    let factory = Arc::new(FixtureRecordGeneratorFactory::default());
    let builder = PrefillBuilder::new(storage, factory.clone(), 5);

    let report = builder
        .build(&names(&["showcases", "blog"]), 2, false)
        .await
        .expect("build succeeds");

    let message = report
        .errors()
        .get(&ContentTypeName::from("showcases"))
        .expect("schema error recorded");
    assert!(message.contains("database needs to be updated"));
    assert!(report.created().contains_key(&ContentTypeName::from("blog")));
}

#[rstest]
#[tokio::test]
async fn singletons_cap_at_one_record() {
    let storage = Arc::new(InMemoryContentStorage::default());
    storage.insert_content_type("about", true);

    let factory = Arc::new(FixtureRecordGeneratorFactory::default());
    let builder = PrefillBuilder::new(storage.clone(), factory.clone(), 5);

    let report = builder
        .build(&names(&["about"]), 5, false)
        .await
        .expect("build succeeds");
    let created = report
        .created()
        .get(&ContentTypeName::from("about"))
        .expect("about records");
    assert_eq!(created.len(), 1);

    // Once populated, the singleton is skipped with a warning.
    storage.set_record_count("about", 1);
    let second = builder
        .build(&names(&["about"]), 5, false)
        .await
        .expect("build succeeds");
    assert!(second.warnings().contains_key(&ContentTypeName::from("about")));
    assert!(second.created().is_empty());
    assert_eq!(factory.calls().len(), 1);
}

#[rstest]
#[tokio::test]
async fn transport_failure_returns_partial_report() {
    let storage = Arc::new(InMemoryContentStorage::default());
    for name in ["alpha", "beta", "gamma"] {
        storage.insert_content_type(name, false);
    }

    let factory = Arc::new(FixtureRecordGeneratorFactory::default());
    factory.fail_with(
        &ContentTypeName::from("beta"),
        GeneratorError::transport("connect timed out"),
    );
    let builder = PrefillBuilder::new(storage, factory, 5);

    let report = builder
        .build(&names(&["alpha", "beta", "gamma"]), 2, false)
        .await
        .expect("build returns partial report");

    assert!(report.created().contains_key(&ContentTypeName::from("alpha")));
    let message = report
        .errors()
        .get(&ContentTypeName::from("beta"))
        .expect("transport error recorded");
    assert!(message.contains("connection timeout"));
    assert!(!report.mentions(&ContentTypeName::from("gamma")));
}

#[rstest]
#[tokio::test]
async fn report_serializes_with_camel_case_and_processing_order() {
    let storage = Arc::new(InMemoryContentStorage::default());
    storage.insert_content_type("zeta", false);
    storage.set_record_count("zeta", 9);
    storage.insert_content_type("alpha", false);
    storage.set_record_count("alpha", 9);

    let factory = Arc::new(FixtureRecordGeneratorFactory::default());
    let builder = PrefillBuilder::new(storage, factory, 5);

    let report = builder
        .build(&names(&["zeta", "alpha"]), 1, false)
        .await
        .expect("build succeeds");

    let json = serde_json::to_string(&report).expect("serialize");
    assert!(json.contains("\"warnings\""));
    let zeta_position = json.find("zeta").expect("zeta present");
    let alpha_position = json.find("alpha").expect("alpha present");
    assert!(zeta_position < alpha_position, "processing order preserved");
}

#[rstest]
#[tokio::test]
async fn demo_generator_fills_empty_types_with_lexicon_content() {
    let storage = Arc::new(InMemoryContentStorage::default());
    storage.insert_content_type("entries", false);

    let lexicon_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("lexicon.json");
    let lexicon = Lexicon::from_file(&lexicon_path).expect("bundled lexicon parses");
    let factory = Arc::new(DemoRecordGeneratorFactory::new(lexicon, 2026));
    let builder = PrefillBuilder::new(storage, factory, 15);

    let report = builder
        .build(&names(&["entries"]), 4, false)
        .await
        .expect("build succeeds");

    let created = report
        .created()
        .get(&ContentTypeName::from("entries"))
        .expect("entries records");
    assert_eq!(created.len(), 4);
    for record in created {
        assert!(!record.title.is_empty());
        assert!(
            record
                .slug
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
        );
    }
}
