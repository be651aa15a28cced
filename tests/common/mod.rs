//! Shared test utilities for frames panel integration tests

#![allow(dead_code)]

use playroom_panel::options::AvailableOptions;
use playroom_panel::panel::FramesPanel;
use playroom_panel::title::TitleSink;

/// Panel with three widths and two real themes
pub fn sample_panel() -> FramesPanel {
    FramesPanel::new(AvailableOptions::new(
        vec![320, 768, 1024],
        vec!["a".to_string(), "b".to_string()],
    ))
}

/// Title sink that records every title it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub titles: Vec<String>,
}

impl TitleSink for RecordingSink {
    fn set_document_title(&mut self, title: &str) {
        self.titles.push(title.to_string());
    }
}
