//! Integration tests for the panel event -> action -> state -> view cycle

mod common;

use playroom_panel::panel::PanelEvent;
use playroom_panel::store::{PanelState, Store};
use playroom_panel::title::DocumentTitle;

use common::{sample_panel, RecordingSink};

/// Feed `event` through the panel into the store, like one UI interaction
fn interact(store: &mut Store, event: PanelEvent) {
    let action = sample_panel().action_for(event, store.state());
    store.dispatch(action);
}

#[test]
fn test_partial_width_filter_scenario() {
    let mut store = Store::default();
    interact(&mut store, PanelEvent::WidthToggled { width: 320, checked: true });
    interact(&mut store, PanelEvent::WidthToggled { width: 768, checked: true });

    let view = sample_panel().view(store.state(), None);
    assert!(view.widths.show_reset, "Clear should be offered for an applied filter");
    let checked: Vec<(u32, bool)> = view
        .widths
        .options
        .iter()
        .map(|row| (row.value, row.checked))
        .collect();
    assert_eq!(checked, vec![(320, true), (768, true), (1024, false)]);
}

#[test]
fn test_oversized_width_filter_is_ignored() {
    let state = PanelState {
        visible_widths: Some(vec![320, 768, 1024, 999]),
        ..Default::default()
    };
    let view = sample_panel().view(&state, None);

    assert!(!view.widths.show_reset);
    assert!(
        view.widths.options.iter().all(|row| !row.checked),
        "320 is present but the oversized filter must not select it"
    );
}

#[test]
fn test_repeated_theme_check_duplicates_entry() {
    let mut store = Store::default();
    interact(&mut store, PanelEvent::ThemeToggled { theme: "a".to_string(), checked: true });
    interact(&mut store, PanelEvent::ThemeToggled { theme: "a".to_string(), checked: true });

    assert_eq!(store.state().visible_themes(), &["a".to_string(), "a".to_string()]);

    let themes = sample_panel().view(store.state(), None).themes.unwrap();
    assert!(themes.show_reset);
    assert!(themes.options[0].checked);
    assert!(!themes.options[1].checked);
}

#[test]
fn test_check_then_uncheck_clears_selection() {
    let mut store = Store::default();
    interact(&mut store, PanelEvent::WidthToggled { width: 768, checked: true });
    interact(&mut store, PanelEvent::WidthToggled { width: 1024, checked: true });
    interact(&mut store, PanelEvent::WidthToggled { width: 1024, checked: false });

    assert_eq!(store.state().visible_widths(), &[768]);
    let view = sample_panel().view(store.state(), None);
    assert!(!view.widths.options[2].checked);
}

#[test]
fn test_clear_resets_any_filter() {
    let mut store = Store::new(PanelState {
        visible_widths: Some(vec![320, 320, 320, 320]),
        visible_themes: Some(vec!["b".to_string()]),
        title: None,
    });
    interact(&mut store, PanelEvent::WidthsCleared);
    interact(&mut store, PanelEvent::ThemesCleared);

    let view = sample_panel().view(store.state(), None);
    assert!(!view.widths.show_reset);
    assert!(!view.themes.as_ref().unwrap().show_reset);
    assert_eq!(store.revision(), 2);
}

#[test]
fn test_title_side_effect_lifecycle() {
    let mut store = Store::default();
    let mut sink = RecordingSink::default();
    let mut tracker = DocumentTitle::new();

    // Never touched: no side effect
    let view = sample_panel().view(store.state(), None);
    tracker.apply(&mut sink, view.document_title.as_deref());
    assert!(sink.titles.is_empty());

    // Touched and cleared: effect fires with the bare title
    interact(&mut store, PanelEvent::TitleEdited { title: String::new() });
    let view = sample_panel().view(store.state(), None);
    tracker.apply(&mut sink, view.document_title.as_deref());

    interact(&mut store, PanelEvent::TitleEdited { title: "Demo".to_string() });
    let view = sample_panel().view(store.state(), None);
    tracker.apply(&mut sink, view.document_title.as_deref());
    assert_eq!(view.title.value, "Demo");

    assert_eq!(sink.titles, vec!["Playroom", "Demo | Playroom"]);
}

#[test]
fn test_fallback_title_read_per_render() {
    let state = PanelState {
        title: Some(String::new()),
        ..Default::default()
    };
    let panel = sample_panel();

    let first = panel.view(&state, Some("Docs"));
    let second = panel.view(&state, Some("Components"));
    assert_eq!(first.document_title.as_deref(), Some("Docs | Playroom"));
    assert_eq!(second.document_title.as_deref(), Some("Components | Playroom"));
}

#[test]
fn test_view_serializes_for_hosts() {
    let view = sample_panel().view(&PanelState::default(), None);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["widths"]["heading"], "Widths");
    assert_eq!(json["themes"]["heading"], "Themes");
    assert_eq!(json["title"]["placeholder"], "Enter a title for this Playroom...");
    assert!(json["document_title"].is_null());
}
