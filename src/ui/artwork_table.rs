//! Central panel: the current page of artworks with selection checkboxes.

use crate::catalog::ArtworkId;
use crate::state::AppState;
use eframe::egui::{self, Color32, RichText, ScrollArea};
use egui_phosphor::regular as icons;

const COLUMNS: &[&str] = &[
    "Title",
    "Place of Origin",
    "Artist",
    "Inscriptions",
    "Start Date",
    "End Date",
];

pub fn render_artwork_table(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Artworks");
        ui.separator();

        if state.current_page_data().is_empty() {
            render_empty(ui, state);
            return;
        }

        ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
            render_table(ui, state);
        });
    });
}

fn render_empty(ui: &mut egui::Ui, state: &AppState) {
    ui.add_space(20.0);
    ui.vertical_centered(|ui| {
        if state.loading() {
            ui.spinner();
            ui.label("Loading artworks...");
        } else {
            ui.label(RichText::new("No artworks found").color(Color32::GRAY));
        }
    });
}

fn render_table(ui: &mut egui::Ui, state: &mut AppState) {
    // Collected during the frame, applied after the grid releases its borrow
    let mut toggled: Vec<ArtworkId> = Vec::new();
    let mut toggle_page = false;
    let mut toggle_bulk_popup = false;

    let page_fully_selected = state.is_page_fully_selected();
    let bulk_busy = state.bulk_in_progress();

    egui::Grid::new("artwork_table")
        .striped(true)
        .num_columns(COLUMNS.len() + 1)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            // Header row: page checkbox and bulk-select trigger
            ui.horizontal(|ui| {
                let mut checked = page_fully_selected;
                if ui.add(egui::Checkbox::without_text(&mut checked)).changed() {
                    toggle_page = true;
                }

                if bulk_busy {
                    ui.spinner();
                } else if ui
                    .small_button(icons::CARET_DOWN)
                    .on_hover_text("Bulk selection options")
                    .clicked()
                {
                    toggle_bulk_popup = true;
                }
            });
            for column in COLUMNS {
                ui.label(RichText::new(*column).strong());
            }
            ui.end_row();

            for artwork in state.current_page_data() {
                let mut checked = state.is_selected(artwork.id);
                if ui.add(egui::Checkbox::without_text(&mut checked)).changed() {
                    toggled.push(artwork.id);
                }

                ui.add(egui::Label::new(RichText::new(artwork.display_title()).strong()).truncate());
                ui.label(artwork.display_origin());
                ui.add(egui::Label::new(artwork.display_artist()).truncate());
                ui.add(egui::Label::new(artwork.display_inscriptions()).truncate());
                ui.label(artwork.display_start_date());
                ui.label(artwork.display_end_date());
                ui.end_row();
            }
        });

    if toggle_page {
        state.toggle_current_page();
    }
    for id in toggled {
        state.toggle_selection(id);
    }
    if toggle_bulk_popup {
        state.bulk_input.open = !state.bulk_input.open;
    }
}
