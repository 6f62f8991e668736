//! Bulk-select popup: "select the first N rows" across pages.

use crate::state::{AppState, BulkInput};
use eframe::egui::{self, Color32, RichText};

pub fn render_bulk_select_window(ctx: &egui::Context, state: &mut AppState) {
    if !state.bulk_input.open {
        return;
    }

    let max = usize::try_from(state.total_records()).unwrap_or(usize::MAX);
    let busy = state.bulk_in_progress();
    let mut open = true;
    let mut submitted = false;

    egui::Window::new("Bulk Select Rows")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(250.0)
        .show(ctx, |ui| {
            ui.label(
                RichText::new("Select a specific number of rows across pages")
                    .small()
                    .color(Color32::GRAY),
            );
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Rows:");
                ui.add(egui::DragValue::new(&mut state.bulk_input.count).range(0..=max));
                ui.label(RichText::new(format!("of {}", max)).small());
            });
            ui.add_space(6.0);

            let valid = state.bulk_input.count > 0 && !busy;
            if ui
                .add_enabled(valid, egui::Button::new("Submit"))
                .clicked()
            {
                submitted = true;
            }
        });

    if submitted {
        let count = state.bulk_input.count;
        state.request_bulk_select(count);
        state.bulk_input = BulkInput::default();
    } else if !open {
        state.bulk_input.open = false;
    }
}
