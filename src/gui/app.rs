//! Main application state for the frames panel window

use eframe::egui;

use crate::config::Config;
use crate::panel::FramesPanel;
use crate::store::{PanelState, Store};
use crate::title::{DocumentTitle, TitleSink};

use super::frames::render_frames_panel;
use super::theme::apply_theme;

/// Routes document title updates to the native window title
pub struct ViewportTitle<'a> {
    ctx: &'a egui::Context,
}

impl<'a> ViewportTitle<'a> {
    pub fn new(ctx: &'a egui::Context) -> Self {
        Self { ctx }
    }
}

impl TitleSink for ViewportTitle<'_> {
    fn set_document_title(&mut self, title: &str) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
    }
}

pub struct PlayroomApp {
    config: Config,
    panel: FramesPanel,
    store: Store,
    document_title: DocumentTitle,
}

impl PlayroomApp {
    pub fn new(config: Config, initial_state: PanelState) -> Self {
        let panel = config.frames_panel();
        Self {
            config,
            panel,
            store: Store::new(initial_state),
            document_title: DocumentTitle::new(),
        }
    }

    pub fn state(&self) -> &PanelState {
        self.store.state()
    }
}

impl eframe::App for PlayroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx);

        // Fallback title is read from config on every frame
        let view = self
            .panel
            .view(self.store.state(), self.config.fallback_title());

        self.document_title
            .apply(&mut ViewportTitle::new(ctx), view.document_title.as_deref());

        for event in render_frames_panel(ctx, &view) {
            let action = self.panel.action_for(event, self.store.state());
            self.store.dispatch(action);
        }
    }
}
