//! Right panel UI: the selected artworks across all pages.

use crate::catalog::ArtworkId;
use crate::state::AppState;
use eframe::egui::{self, Color32, RichText, ScrollArea};
use egui_phosphor::regular as icons;

pub fn render_selection_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("selection_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(200.0)
        .max_width(420.0)
        .show(ctx, |ui| {
            let selected_count = state.selection.len();
            let nothing_selected = state.selection.is_empty();
            let mut removed: Option<ArtworkId> = None;
            let mut clear = false;

            ui.horizontal(|ui| {
                ui.heading(format!("Selected Artworks ({})", selected_count));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(!nothing_selected, egui::Button::new("Clear"))
                        .clicked()
                    {
                        clear = true;
                    }
                });
            });
            ui.separator();

            let view = state.selected_artworks_view();

            if nothing_selected {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("No rows selected yet").color(Color32::GRAY));
                });
            }

            let unloaded = selected_count.saturating_sub(view.len());

            ScrollArea::vertical().show(ui, |ui| {
                for artwork in view {
                    ui.horizontal(|ui| {
                        if ui
                            .small_button(icons::X)
                            .on_hover_text("Remove selection")
                            .clicked()
                        {
                            removed = Some(artwork.id);
                        }
                        ui.add(egui::Label::new(artwork.display_title()).truncate())
                            .on_hover_text(artwork.display_artist());
                    });
                }

                if unloaded > 0 {
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new(format!("{} selected row(s) not loaded yet", unloaded))
                            .small()
                            .color(Color32::GRAY),
                    );
                }
            });

            if let Some(id) = removed {
                state.remove_selection(id);
            }
            if clear {
                state.clear_selection();
            }
        });
}
