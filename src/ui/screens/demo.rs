use eframe::egui;
use tracing::info;

use crate::config::DemoConfig;
use crate::ui::components::control_strip::{ControlStrip, ControlStripOutput};
use crate::ui::components::wave_view::WaveView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibleView {
    Normal,
    RiseUp,
}

/// Two wave views, one visible at a time, switched from a control strip.
pub struct DemoApp {
    normal: WaveView,
    rise_up: WaveView,
    visible: VisibleView,
    rise_up_reset_level: f32,
}

impl DemoApp {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            normal: WaveView::new(config.normal.clone(), config.view_height),
            rise_up: WaveView::new(config.rise_up.clone(), config.view_height),
            visible: VisibleView::Normal,
            rise_up_reset_level: config.rise_up_reset_level,
        }
    }

    pub fn visible(&self) -> VisibleView {
        self.visible
    }

    pub fn normal(&self) -> &WaveView {
        &self.normal
    }

    pub fn rise_up(&self) -> &WaveView {
        &self.rise_up
    }

    pub fn rise_up_mut(&mut self) -> &mut WaveView {
        &mut self.rise_up
    }

    /// Switches the visible view. Selecting the view already shown does
    /// nothing; showing the rise-up view resets its water level.
    pub fn select(&mut self, view: VisibleView) {
        if self.visible == view {
            return;
        }
        self.visible = view;
        match view {
            VisibleView::Normal => self.rise_up.on_detach(),
            VisibleView::RiseUp => {
                self.normal.on_detach();
                self.rise_up
                    .model_mut()
                    .set_wave_line_height(self.rise_up_reset_level);
            }
        }
        info!(view = ?view, "switched demo wave view");
    }

    pub fn toggle_percent_text(&mut self) -> bool {
        self.rise_up.model_mut().toggle_show_percent_text()
    }

    pub fn apply(&mut self, output: ControlStripOutput) {
        if let Some(view) = output.select {
            self.select(view);
        }
        if output.toggle_percent_text {
            self.toggle_percent_text();
        }
    }

    fn visible_view(&self) -> &WaveView {
        match self.visible {
            VisibleView::Normal => &self.normal,
            VisibleView::RiseUp => &self.rise_up,
        }
    }

    fn visible_view_mut(&mut self) -> &mut WaveView {
        match self.visible {
            VisibleView::Normal => &mut self.normal,
            VisibleView::RiseUp => &mut self.rise_up,
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        let output = egui::TopBottomPanel::top("controls")
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ControlStrip {
                        visible: self.visible,
                        show_percent_text: self.rise_up.model().is_show_percent_text(),
                        percent: self.visible_view().model().percent(),
                    }
                    .show(ui)
                })
                .inner
            })
            .inner;
        self.apply(output);
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.visible_view_mut().show(ui);
        });
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_top_panel(ctx);
        self.show_main(ctx);
    }
}
