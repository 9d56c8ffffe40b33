use eframe::egui::{self, Align, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CellValue, Table};

const ROW_HEIGHT: f32 = 18.0;
const MAX_TABLE_HEIGHT: f32 = 360.0;

// ---------------------------------------------------------------------------
// Filtered data table (central panel)
// ---------------------------------------------------------------------------

/// Virtualized view of every filtered row and column.
pub fn data_table(ui: &mut Ui, table: &Table) {
    if table.columns.is_empty() {
        ui.label("El archivo no tiene columnas.");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("data_table_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(Layout::left_to_right(Align::Center))
                .columns(Column::auto().at_least(60.0).clip(true), table.columns.len())
                .max_scroll_height(MAX_TABLE_HEIGHT)
                .header(ROW_HEIGHT + 4.0, |mut header| {
                    for name in &table.columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, table.len(), |mut row| {
                        let cells = &table.rows[row.index()];
                        for cell in cells {
                            row.col(|ui: &mut Ui| {
                                let text = cell.to_string();
                                if matches!(cell, CellValue::Integer(_) | CellValue::Float(_)) {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                                        ui.label(text);
                                    });
                                } else {
                                    ui.label(text);
                                }
                            });
                        }
                    });
                });
        });
}
