//! Frames panel view model
//!
//! Turns a state snapshot into a [`PanelView`] and maps the renderer's
//! [`PanelEvent`]s back into store actions. Both directions go through the
//! same [`FilterController`] so the checked state and the "Clear" button
//! never disagree about whether a filter is applied.

mod event;
mod view;

pub use event::PanelEvent;
pub use view::{
    OptionRow, OptionSection, PanelView, TitleField, RESET_LABEL, THEMES_HEADING, TITLE_HEADING,
    TITLE_PLACEHOLDER, WIDTHS_HEADING,
};

use std::fmt::Display;

use crate::filter::{FilterController, InsertPolicy};
use crate::options::AvailableOptions;
use crate::store::{Action, PanelState};
use crate::title::document_title;

/// Panel bound to one session's available options
#[derive(Debug, Clone, Default)]
pub struct FramesPanel {
    available: AvailableOptions,
    insert_policy: InsertPolicy,
}

impl FramesPanel {
    pub fn new(available: AvailableOptions) -> Self {
        Self {
            available,
            insert_policy: InsertPolicy::default(),
        }
    }

    pub fn with_insert_policy(mut self, policy: InsertPolicy) -> Self {
        self.insert_policy = policy;
        self
    }

    pub fn available(&self) -> &AvailableOptions {
        &self.available
    }

    pub fn width_filter<'a>(&'a self, state: &'a PanelState) -> FilterController<'a, u32> {
        FilterController::new(&self.available.widths, state.visible_widths())
            .with_policy(self.insert_policy)
    }

    pub fn theme_filter<'a>(&'a self, state: &'a PanelState) -> FilterController<'a, String> {
        FilterController::new(&self.available.themes, state.visible_themes())
            .with_policy(self.insert_policy)
    }

    /// Derive the view for `state`. `fallback_title` is the configured
    /// title, read by the caller on every render.
    pub fn view(&self, state: &PanelState, fallback_title: Option<&str>) -> PanelView {
        let themes = self
            .available
            .has_themes()
            .then(|| section(THEMES_HEADING, &self.theme_filter(state)));

        PanelView {
            title: TitleField {
                heading: TITLE_HEADING,
                placeholder: TITLE_PLACEHOLDER,
                value: state.title().unwrap_or_default().to_string(),
            },
            widths: section(WIDTHS_HEADING, &self.width_filter(state)),
            themes,
            document_title: document_title(state.title(), fallback_title),
        }
    }

    /// The action a renderer event dispatches against `state`
    pub fn action_for(&self, event: PanelEvent, state: &PanelState) -> Action {
        match event {
            PanelEvent::TitleEdited { title } => Action::UpdateTitle { title },
            PanelEvent::WidthToggled { width, checked } => Action::UpdateVisibleWidths {
                widths: self.width_filter(state).toggle(&width, checked),
            },
            PanelEvent::WidthsCleared => Action::ResetVisibleWidths,
            PanelEvent::ThemeToggled { theme, checked } => Action::UpdateVisibleThemes {
                themes: self.theme_filter(state).toggle(&theme, checked),
            },
            PanelEvent::ThemesCleared => Action::ResetVisibleThemes,
        }
    }
}

fn section<T>(heading: &'static str, filter: &FilterController<'_, T>) -> OptionSection<T>
where
    T: PartialEq + Clone + Display,
{
    OptionSection {
        heading,
        show_reset: filter.is_active(),
        options: filter
            .selections()
            .map(|(value, checked)| OptionRow {
                value: value.clone(),
                label: value.to_string(),
                checked,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> FramesPanel {
        FramesPanel::new(AvailableOptions::new(
            vec![320, 768, 1024],
            vec!["light".to_string(), "dark".to_string()],
        ))
    }

    #[test]
    fn test_view_without_filter() {
        let view = panel().view(&PanelState::default(), None);
        assert!(!view.widths.show_reset);
        assert_eq!(view.widths.options.len(), 3);
        assert!(view.widths.options.iter().all(|row| !row.checked));
        assert_eq!(view.widths.options[0].label, "320");
        assert_eq!(view.title.value, "");
        assert_eq!(view.document_title, None);
    }

    #[test]
    fn test_view_with_partial_width_filter() {
        let state = PanelState {
            visible_widths: Some(vec![320, 768]),
            ..Default::default()
        };
        let view = panel().view(&state, None);
        assert!(view.widths.show_reset);
        let checked: Vec<u32> = view.widths.checked_values().copied().collect();
        assert_eq!(checked, vec![320, 768]);
    }

    #[test]
    fn test_view_hides_reset_for_oversized_filter() {
        let state = PanelState {
            visible_widths: Some(vec![320, 768, 1024, 999]),
            ..Default::default()
        };
        let view = panel().view(&state, None);
        assert!(!view.widths.show_reset);
        assert_eq!(view.widths.checked_values().count(), 0);
    }

    #[test]
    fn test_themes_section_hidden_without_real_themes() {
        let panel = FramesPanel::new(AvailableOptions::new(vec![320], vec![]));
        let view = panel.view(&PanelState::default(), None);
        assert!(view.themes.is_none());
    }

    #[test]
    fn test_theme_activity_counts_every_available_theme() {
        let panel = FramesPanel::new(AvailableOptions::new(
            vec![320],
            vec!["light".to_string(), crate::options::NO_THEME.to_string()],
        ));
        let state = PanelState {
            visible_themes: Some(vec!["light".to_string(), "light".to_string()]),
            ..Default::default()
        };
        let themes = panel.view(&state, None).themes.unwrap();
        assert!(themes.show_reset);
        assert!(themes.options[0].checked);
    }

    #[test]
    fn test_document_title_uses_fallback() {
        let state = PanelState {
            title: Some(String::new()),
            ..Default::default()
        };
        let view = panel().view(&state, Some("Design System"));
        assert_eq!(
            view.document_title.as_deref(),
            Some("Design System | Playroom")
        );
    }

    #[test]
    fn test_width_toggle_event_builds_update() {
        let state = PanelState {
            visible_widths: Some(vec![320]),
            ..Default::default()
        };
        let action = panel().action_for(
            PanelEvent::WidthToggled {
                width: 320,
                checked: true,
            },
            &state,
        );
        assert_eq!(
            action,
            Action::UpdateVisibleWidths {
                widths: vec![320, 320]
            }
        );
    }

    #[test]
    fn test_width_toggle_event_respects_dedupe_policy() {
        let state = PanelState {
            visible_widths: Some(vec![320]),
            ..Default::default()
        };
        let action = panel().with_insert_policy(InsertPolicy::Dedupe).action_for(
            PanelEvent::WidthToggled {
                width: 320,
                checked: true,
            },
            &state,
        );
        assert_eq!(action, Action::UpdateVisibleWidths { widths: vec![320] });
    }

    #[test]
    fn test_theme_uncheck_event_removes_theme() {
        let state = PanelState {
            visible_themes: Some(vec!["dark".to_string(), "light".to_string()]),
            ..Default::default()
        };
        let action = panel().action_for(
            PanelEvent::ThemeToggled {
                theme: "dark".to_string(),
                checked: false,
            },
            &state,
        );
        assert_eq!(
            action,
            Action::UpdateVisibleThemes {
                themes: vec!["light".to_string()]
            }
        );
    }

    #[test]
    fn test_clear_and_title_events() {
        let state = PanelState::default();
        assert_eq!(
            panel().action_for(PanelEvent::WidthsCleared, &state),
            Action::ResetVisibleWidths
        );
        assert_eq!(
            panel().action_for(PanelEvent::ThemesCleared, &state),
            Action::ResetVisibleThemes
        );
        assert_eq!(
            panel().action_for(
                PanelEvent::TitleEdited {
                    title: "x".to_string()
                },
                &state
            ),
            Action::UpdateTitle {
                title: "x".to_string()
            }
        );
    }
}
