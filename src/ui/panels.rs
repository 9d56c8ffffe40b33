use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one multiselect per configured column.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filtros");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No hay datos cargados.");
        return;
    }

    let columns = state.filter_columns();
    if columns.is_empty() {
        ui.label("Ninguna columna de filtro en este archivo.");
        return;
    }

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for col in &columns {
                let all_values = state.options(col);

                // Show count of selected / total in the header
                let n_selected = state.filters.get(col).map_or(0, |s| s.len());
                let n_total = all_values.len();
                let header_text = format!("{col}  ({n_selected}/{n_total})");

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(col)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("Todos").clicked() {
                                state.select_all(col);
                            }
                            if ui.small_button("Ninguno").clicked() {
                                state.select_none(col);
                            }
                        });

                        // Re-borrow after potential mutation from Todos/Ninguno
                        let selected = state.filters.entry(col.clone()).or_default();

                        for val in &all_values {
                            let text = RichText::new(val.to_string())
                                .color(state.color_map.color_for(val));

                            let mut checked = selected.contains(val);
                            if ui.checkbox(&mut checked, text).changed() {
                                if checked {
                                    selected.insert(val.clone());
                                } else {
                                    selected.remove(val);
                                }
                                changed = true;
                            }
                        }
                    });
            }
        });

    // Recompute the view after any checkbox changes.
    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Archivo", |ui: &mut Ui| {
            if ui.button("Abrir…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Recargar").clicked() {
                state.reload();
                ui.close_menu();
            }
            let can_export = state.dataset.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Exportar filtrados…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} · {} registros cargados, {} visibles",
                state.config.data_path.display(),
                format_count(ds.len()),
                format_count(state.view.filtered.len())
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

/// `12345` → `12,345`.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Abrir hoja de cálculo")
        .add_filter("Hojas de cálculo", &["xlsx", "xlsm", "xlsb", "xls", "ods"])
        .add_filter("Otros formatos", &["csv", "parquet", "pq", "json"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}

/// The "download" action: pick a destination and write the filtered rows.
pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Descargar Excel filtrado")
        .set_file_name(&state.config.export_file_name)
        .add_filter("Excel", &["xlsx"])
        .save_file();

    if let Some(path) = file {
        state.export_to(&path);
    }
}
