use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::extract::FREQ_CEILING_HZ;
use crate::state::AppState;

/// Slider step for the frequency bounds, Hz.
const FREQ_STEP: f64 = 100.0;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Category selector ----
    ui.strong("Instrument type");
    let current = state.filters.category.clone();
    let selected_text = current.clone().unwrap_or_else(|| "All".to_string());
    egui::ComboBox::from_id_salt("category")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_none(), "All").clicked() {
                state.set_category(None);
            }
            let categories: Vec<String> = state
                .dataset
                .categories
                .iter()
                .map(|g| g.name.clone())
                .collect();
            for name in categories {
                let is_selected = current.as_deref() == Some(name.as_str());
                let color = state.category_colors.color_for(&name);
                let label = RichText::new(&name).color(color);
                if ui.selectable_label(is_selected, label).clicked() {
                    state.set_category(Some(name));
                }
            }
        });

    ui.separator();

    // ---- Frequency range ----
    ui.strong("Frequency range (Hz)");
    let mut min = state.filters.freq_min;
    let mut max = state.filters.freq_max;

    let min_changed = ui
        .add(
            Slider::new(&mut min, 0..=FREQ_CEILING_HZ)
                .step_by(FREQ_STEP)
                .text("min"),
        )
        .changed();
    let max_changed = ui
        .add(
            Slider::new(&mut max, 0..=FREQ_CEILING_HZ)
                .step_by(FREQ_STEP)
                .text("max"),
        )
        .changed();

    if min_changed || max_changed {
        state.set_freq_range(min, max, min_changed);
    }

    ui.separator();
    ui.label(format!(
        "{} of {} instruments shown",
        state.visible_indices.len(),
        state.dataset.len()
    ));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open chart…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Built-in chart").clicked() {
                state.reset_to_builtin();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} instruments, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        ui.separator();

        if ui
            .selectable_label(state.expand_all, "Expand all")
            .clicked()
        {
            state.set_expand_all(!state.expand_all);
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open chart")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} instruments in {} categories",
                    dataset.len(),
                    dataset.categories.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load chart: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
