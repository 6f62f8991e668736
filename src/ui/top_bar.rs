//! Top bar UI: app title, status, and request statistics.

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // App title
                ui.label(
                    RichText::new("Artwork Catalog")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                if state.loading() || state.bulk_in_progress() {
                    ui.spinner();
                }

                // Status text
                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(state.session_stats.format_summary())
                            .size(11.0)
                            .monospace()
                            .color(Color32::GRAY),
                    );
                    ui.separator();
                    ui.label(
                        RichText::new(format!("{} cached", state.paginator.cache().len()))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                });
            });
        });
}
