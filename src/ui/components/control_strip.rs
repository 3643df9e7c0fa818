use eframe::egui;

use crate::ui::screens::demo::VisibleView;

#[derive(Default, Debug, PartialEq, Eq)]
pub struct ControlStripOutput {
    pub select: Option<VisibleView>,
    pub toggle_percent_text: bool,
}

pub struct ControlStrip {
    pub visible: VisibleView,
    pub show_percent_text: bool,
    pub percent: Option<u32>,
}

impl ControlStrip {
    pub fn show(&self, ui: &mut egui::Ui) -> ControlStripOutput {
        let mut output = ControlStripOutput::default();
        if view_button(ui, "Normal", self.visible == VisibleView::Normal) {
            output.select = Some(VisibleView::Normal);
        }
        if view_button(ui, "Rise up", self.visible == VisibleView::RiseUp) {
            output.select = Some(VisibleView::RiseUp);
        }
        ui.separator();
        if percent_button(ui, self.show_percent_text) {
            output.toggle_percent_text = true;
        }
        ui.separator();
        level_badge(ui, self.percent);
        output
    }
}

fn view_button(ui: &mut egui::Ui, label: &str, selected: bool) -> bool {
    ui.selectable_label(selected, label).clicked()
}

fn percent_button(ui: &mut egui::Ui, showing: bool) -> bool {
    let label = if showing {
        "Hide Percent Text"
    } else {
        "Show Percent Text"
    };
    ui.button(label)
        .on_hover_text("Toggles the fill percentage on the rise-up wave.")
        .clicked()
}

fn level_badge(ui: &mut egui::Ui, percent: Option<u32>) {
    match percent {
        Some(value) => {
            let color = if value >= 100 {
                egui::Color32::from_rgb(30, 180, 80)
            } else {
                egui::Color32::from_rgb(80, 160, 255)
            };
            ui.colored_label(color, format!("Level {}%", value));
        }
        None => {
            ui.label("Level pending layout");
        }
    }
}
