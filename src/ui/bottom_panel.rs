//! Bottom panel UI: page navigation.

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;
use std::ops::RangeInclusive;

/// Numbered page links shown around the current page.
const PAGE_LINKS: u32 = 5;

pub fn render_bottom_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::bottom("bottom_panel")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                render_page_controls(ui, state);

                ui.separator();

                ui.label(
                    RichText::new(format_range(state))
                        .size(12.0)
                        .color(Color32::GRAY),
                );
            });
        });
}

fn render_page_controls(ui: &mut egui::Ui, state: &mut AppState) {
    let page = state.current_page();
    let last = state.page_count().max(1);
    let mut target = None;

    if ui
        .add_enabled(page > 1, egui::Button::new(icons::CARET_DOUBLE_LEFT))
        .on_hover_text("First page")
        .clicked()
    {
        target = Some(1);
    }
    if ui
        .add_enabled(page > 1, egui::Button::new(icons::CARET_LEFT))
        .on_hover_text("Previous page")
        .clicked()
    {
        target = Some(page - 1);
    }

    for n in page_window(page, last) {
        let label = RichText::new(n.to_string()).monospace();
        if ui
            .add(egui::Button::new(label).selected(n == page))
            .clicked()
            && n != page
        {
            target = Some(n);
        }
    }

    if ui
        .add_enabled(page < last, egui::Button::new(icons::CARET_RIGHT))
        .on_hover_text("Next page")
        .clicked()
    {
        target = Some(page + 1);
    }
    if ui
        .add_enabled(page < last, egui::Button::new(icons::CARET_DOUBLE_RIGHT))
        .on_hover_text("Last page")
        .clicked()
    {
        target = Some(last);
    }

    if let Some(page) = target {
        state.on_page_change(page);
    }
}

/// Up to `PAGE_LINKS` consecutive pages centered on `current`,
/// shifted to stay within `1..=last`.
fn page_window(current: u32, last: u32) -> RangeInclusive<u32> {
    let last = last.max(1);
    let current = current.clamp(1, last);
    let span = PAGE_LINKS.min(last);

    let start = current
        .saturating_sub(PAGE_LINKS / 2)
        .clamp(1, last - span + 1);
    start..=start + span - 1
}

/// "Showing 13 to 24 of 100 artworks"
fn format_range(state: &AppState) -> String {
    let rows = state.current_page_data().len() as u64;
    if rows == 0 {
        return "No artworks".to_string();
    }
    let first = state.first() + 1;
    format!(
        "Showing {} to {} of {} artworks",
        first,
        first + rows - 1,
        state.total_records()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: u32, last: u32) -> Vec<u32> {
        page_window(current, last).collect()
    }

    #[test]
    fn test_page_window_centers_on_current() {
        assert_eq!(window(5, 9), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_window_shifts_at_edges() {
        assert_eq!(window(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(2, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(9, 9), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_page_window_few_pages() {
        assert_eq!(window(2, 3), vec![1, 2, 3]);
        assert_eq!(window(1, 0), vec![1]);
    }
}
