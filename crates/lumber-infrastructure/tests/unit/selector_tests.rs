//! Backend selection tests

use lumber_infrastructure::constants::FALLBACK_CLASS_NAME;
use lumber_infrastructure::manager::BackendCell;
use lumber_infrastructure::selector::Selection;
use tracing_test::traced_test;

use crate::support::{CountingSources, TestCatalog, selector};

#[test]
#[traced_test]
fn test_no_provider_degrades_to_fallback_once() {
    let (selector, sources) = selector(CountingSources::new(), TestCatalog::new());
    let cell = BackendCell::new();

    let (first, selected_here) = cell.initialize(&selector);
    assert!(selected_here);
    assert_eq!(first.selection, Selection::Fallback);
    assert_eq!(first.implementation_name(), FALLBACK_CLASS_NAME);

    for _ in 0..3 {
        let (again, selected_here) = cell.initialize(&selector);
        assert!(!selected_here);
        assert_eq!(again.selection, Selection::Fallback);
    }

    assert_eq!(sources.call_count(), 1);
    logs_assert(|lines: &[&str]| {
        let degraded = lines
            .iter()
            .filter(|line| line.contains("No logging backend could be discovered"))
            .count();
        match degraded {
            1 => Ok(()),
            n => Err(format!("expected one degraded-mode error, found {n}")),
        }
    });
}

#[test]
#[traced_test]
fn test_highest_priority_wins_and_candidates_are_listed() {
    let sources = CountingSources::new()
        .provider("test.Five", 5)
        .provider("test.Ten", 10)
        .provider("test.Two", 2);
    let catalog = TestCatalog::new()
        .class("test.Five")
        .class("test.Ten")
        .class("test.Two");
    let (selector, _) = selector(sources, catalog);

    let selected = selector.select();
    assert_eq!(selected.selection, Selection::Discovered);
    assert_eq!(selected.implementation_name(), "test.Ten");

    assert!(logs_contain("Multiple logging backends found"));
    assert!(logs_contain("test.Five (priority 5"));
    assert!(logs_contain("test.Ten (priority 10"));
    assert!(logs_contain("test.Two (priority 2"));
}

#[test]
fn test_single_provider_is_selected() {
    let (selector, _) = selector(
        CountingSources::new().provider("test.Only", -1),
        TestCatalog::new().class("test.Only"),
    );
    let selected = selector.select();
    assert_eq!(selected.selection, Selection::Discovered);
    assert_eq!(selected.implementation_name(), "test.Only");
}

#[test]
fn test_provider_that_cannot_be_created_is_skipped() {
    let sources = CountingSources::new()
        .provider("test.Working", 1)
        .provider("test.Missing", 50)
        .provider("test.Exploding", 40);
    let catalog = TestCatalog::new()
        .class("test.Working")
        .panicking("test.Exploding");
    let (selector, _) = selector(sources, catalog);

    assert_eq!(selector.select().implementation_name(), "test.Working");
}

#[test]
fn test_override_skips_discovery() {
    let (selector, sources) = selector(
        CountingSources::new().provider("test.Discovered", 100),
        TestCatalog::new().class("test.Discovered").class("test.Chosen"),
    );
    let selector = selector.with_override(Some("test.Chosen".to_string()));

    let selected = selector.select();
    assert_eq!(selected.selection, Selection::Override);
    assert_eq!(selected.implementation_name(), "test.Chosen");
    assert_eq!(sources.call_count(), 0);
}

#[test]
#[traced_test]
fn test_unknown_override_falls_through_to_discovery() {
    let (selector, sources) = selector(
        CountingSources::new().provider("test.Discovered", 3),
        TestCatalog::new().class("test.Discovered"),
    );
    let selector = selector.with_override(Some("test.NotLinked".to_string()));

    let selected = selector.select();
    assert_eq!(selected.selection, Selection::Discovered);
    assert_eq!(selected.implementation_name(), "test.Discovered");
    assert_eq!(sources.call_count(), 1);
    assert!(logs_contain("Unable to create the configured logging backend"));
}

#[test]
fn test_panicking_override_falls_through_to_fallback() {
    let (selector, _) = selector(
        CountingSources::new(),
        TestCatalog::new().panicking("test.Exploding"),
    );
    let selector = selector.with_override(Some("test.Exploding".to_string()));

    assert_eq!(selector.select().selection, Selection::Fallback);
}

#[test]
fn test_selection_display() {
    assert_eq!(Selection::Override.to_string(), "override");
    assert_eq!(Selection::Discovered.to_string(), "discovered");
    assert_eq!(Selection::Fallback.to_string(), "fallback");
}

#[test]
fn test_select_from_reuses_candidates() {
    let (selector, sources) = selector(
        CountingSources::new()
            .provider("test.Low", 1)
            .provider("test.High", 9),
        TestCatalog::new().class("test.Low").class("test.High"),
    );

    let candidates = selector.registry().discover();
    assert_eq!(sources.call_count(), 1);

    let selected = selector.select_from(&candidates);
    assert_eq!(selected.selection, Selection::Discovered);
    assert_eq!(selected.implementation_name(), "test.High");
    assert!(std::sync::Arc::ptr_eq(&selected.factory, &candidates[1].factory));
    assert_eq!(sources.call_count(), 1);

    assert_eq!(selector.select_from(&[]).selection, Selection::Fallback);
}
