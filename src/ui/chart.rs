use eframe::egui::{self, ProgressBar, RichText, ScrollArea, Ui};

use crate::data::extract::{leading_value, FREQ_CEILING_HZ};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// EQ reference chart (central panel)
// ---------------------------------------------------------------------------

/// Render the chart in the central panel.
pub fn chart_panel(ui: &mut Ui, state: &mut AppState) {
    // egui persists per-header open state, so the expand-all toggle forces
    // every section for one frame via `open`; `default_open` only seeds
    // headers egui has not seen yet.
    let force_open = state.take_expand_override();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if state.visible_indices.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.heading("No instruments match the current filters");
                });
            }

            for &idx in &state.visible_indices {
                let entry = &state.dataset.entries[idx];

                let header = match state.dataset.category_of(&entry.instrument) {
                    Some(category) => RichText::new(&entry.instrument)
                        .strong()
                        .color(state.category_colors.color_for(category)),
                    None => RichText::new(&entry.instrument).strong(),
                };

                egui::CollapsingHeader::new(header)
                    .id_salt(&entry.instrument)
                    .default_open(state.expand_all)
                    .open(force_open)
                    .show(ui, |ui: &mut Ui| {
                        for clause in entry.clauses() {
                            // Clauses without a unit are annotations, not bands.
                            if !clause.contains("Hz") {
                                continue;
                            }
                            ui.label(format!("• {clause}"));

                            if let Some(hz) = leading_value(clause) {
                                if hz <= FREQ_CEILING_HZ {
                                    ui.add(
                                        ProgressBar::new(hz as f32 / FREQ_CEILING_HZ as f32)
                                            .text(format!("{hz} Hz")),
                                    );
                                }
                            }
                        }
                    });
            }

            ui.separator();
            tips(ui);
        });
}

/// The usage notes from the bottom of the chart, always visible.
fn tips(ui: &mut Ui) {
    ui.strong("Tips for using this guide");
    ui.label("These frequencies are approximate and may need adjustment based on:");
    ui.label("  • the specific instrument");
    ui.label("  • the player's style");
    ui.label("  • the recording environment");
    ui.label("  • the overall mix context");
    ui.label("Use your ears as the final judge.");
    ui.label("Make subtle adjustments rather than dramatic ones.");
}
