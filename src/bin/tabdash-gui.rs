/*!
 * GUI application for tabdash - tabular data charting and summary dashboard
 *
 * A cross-platform desktop application providing an intuitive interface for:
 * - Opening a tabular file (CSV/TSV/JSON)
 * - Picking grouping/value axes and filtering category values
 * - Generating charts, viewing summary statistics, and exporting data
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use tabdash::select::{self, Selection};
use tabdash::viz::{ChartStyle, Theme};
use tabdash::{Table, ingest, stats, storage, viz};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 640.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Tabular Dashboard - tabdash"),
        ..Default::default()
    };

    eframe::run_native(
        "Tabular Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashApp::new()))),
    )
}

/// Main application state
struct DashApp {
    // Loaded file (one table per file; replaced on a new open)
    table: Option<Table>,
    file_label: String,

    // Selection state, rebuilt on widget changes
    x_axis: String,
    y_axis: String,
    keep: Vec<(String, bool)>,
    style: ChartStyle,
    theme: Theme,

    // Output options
    output_path: String,
    chart_format: ChartFormat,
    chart_width: u32,
    chart_height: u32,
    export_rows: bool,
    export_format: ExportFormat,

    // UI state
    is_loading: bool,
    status_message: String,
    error_message: String,

    // Background operation
    operation_receiver: Option<mpsc::Receiver<OperationResult>>,
}

#[derive(Debug, Clone, PartialEq)]
enum ChartFormat {
    Png,
    Svg,
}

#[derive(Debug, Clone, PartialEq)]
enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug)]
enum OperationResult {
    Success(String),
    Error(String),
}

impl DashApp {
    fn new() -> Self {
        // Default to user's home directory for output
        let home_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .to_string_lossy()
            .to_string();

        Self {
            table: None,
            file_label: String::new(),

            x_axis: String::new(),
            y_axis: String::new(),
            keep: Vec::new(),
            style: ChartStyle::Bar,
            theme: Theme::Light,

            output_path: home_dir,
            chart_format: ChartFormat::Png,
            chart_width: 1000,
            chart_height: 600,
            export_rows: false,
            export_format: ExportFormat::Csv,

            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            operation_receiver: None,
        }
    }

    fn open_file(&mut self, path: PathBuf) {
        match ingest::load_file(&path) {
            Ok(table) => {
                self.file_label = format!(
                    "{} ({} rows, {} columns)",
                    path.display(),
                    table.n_rows(),
                    table.n_cols()
                );
                self.reset_selection(&table);
                self.table = Some(table);
                self.error_message.clear();
                self.status_message.clear();
            }
            Err(err) => {
                // Blocking parse error: no partial table is kept around.
                self.table = None;
                self.file_label.clear();
                self.error_message = format!("Could not load file: {}", err);
            }
        }
    }

    /// Default selection for a freshly loaded table: first categorical and
    /// first numeric column, every category value kept.
    fn reset_selection(&mut self, table: &Table) {
        self.x_axis = table
            .categorical_columns()
            .first()
            .map(|s| s.to_string())
            .unwrap_or_default();
        self.y_axis = table
            .numeric_columns()
            .first()
            .map(|s| s.to_string())
            .unwrap_or_default();
        self.rebuild_keep(table);
    }

    fn rebuild_keep(&mut self, table: &Table) {
        self.keep = select::distinct_values(table, &self.x_axis)
            .map(|values| values.into_iter().map(|v| (v, true)).collect())
            .unwrap_or_default();
    }

    fn current_selection(&self) -> Selection {
        Selection {
            categorical_axis: self.x_axis.clone(),
            numeric_axis: self.y_axis.clone(),
            keep: self
                .keep
                .iter()
                .filter(|(_, on)| *on)
                .map(|(v, _)| v.clone())
                .collect(),
            style: self.style,
        }
    }

    fn validate_inputs(&self) -> Result<(), String> {
        if self.output_path.trim().is_empty() {
            return Err("Please specify an output directory".to_string());
        }
        if !(200..=3000).contains(&self.chart_width) || !(200..=3000).contains(&self.chart_height)
        {
            return Err("Chart dimensions must be between 200 and 3000 pixels".to_string());
        }
        Ok(())
    }

    fn start_operation(&mut self, table: &Table) {
        if let Err(err) = self.validate_inputs() {
            self.error_message = err;
            return;
        }
        let table = table.clone();

        self.is_loading = true;
        self.error_message.clear();
        self.status_message = "Rendering chart...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.operation_receiver = Some(receiver);

        // Clone the data we need for the background thread
        let selection = self.current_selection();
        let theme = self.theme;
        let config = OperationConfig {
            output_path: self.output_path.clone(),
            chart_format: self.chart_format.clone(),
            chart_width: self.chart_width,
            chart_height: self.chart_height,
            export_rows: self.export_rows,
            export_format: self.export_format.clone(),
        };

        thread::spawn(move || {
            let result = perform_operation(table, selection, theme, config);
            let _ = sender.send(result);
        });
    }

    fn check_operation_result(&mut self) {
        let result = match &self.operation_receiver {
            Some(receiver) => receiver.try_recv().ok(),
            None => None,
        };
        if let Some(result) = result {
            self.is_loading = false;
            self.operation_receiver = None;

            match result {
                OperationResult::Success(message) => {
                    self.status_message = message;
                    self.error_message.clear();
                }
                OperationResult::Error(error) => {
                    self.error_message = error;
                    self.status_message.clear();
                }
            }
        }
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed background operations
        self.check_operation_result();

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        ctx.set_visuals(match self.theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Tabular Dashboard");
                ui.add_space(10.0);

                // File section
                ui.group(|ui| {
                    ui.label("Data File");
                    ui.add_space(5.0);
                    ui.horizontal(|ui| {
                        if ui.button("Open file").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("tabular data", &["csv", "tsv", "json"])
                                .pick_file()
                            {
                                self.open_file(path);
                            }
                        }
                        if self.file_label.is_empty() {
                            ui.label("no file loaded");
                        } else {
                            ui.label(&self.file_label);
                        }
                    });
                });

                ui.add_space(10.0);

                // Take the table out while the selection widgets borrow self.
                let table = self.table.take();
                if let Some(table) = &table {
                    if !table.has_chartable_axes() {
                        ui.colored_label(
                            egui::Color32::RED,
                            "This file has no usable axis pair: charting needs at least one \
                             categorical and one numeric column.",
                        );
                    } else {
                        self.selection_ui(ui, table);
                        ui.add_space(10.0);
                        self.output_ui(ui);
                        ui.add_space(15.0);

                        // Action buttons
                        ui.horizontal(|ui| {
                            if ui
                                .add_enabled(!self.is_loading, egui::Button::new("Render Chart"))
                                .clicked()
                            {
                                self.start_operation(table);
                            }
                            if self.is_loading {
                                ui.spinner();
                                ui.label("Processing...");
                            }
                        });

                        ui.add_space(10.0);
                        self.summary_ui(ui, table);
                    }
                }
                if self.table.is_none() {
                    self.table = table;
                }

                ui.add_space(10.0);

                // Status messages
                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });
    }
}

impl DashApp {
    fn selection_ui(&mut self, ui: &mut egui::Ui, table: &Table) {
        ui.group(|ui| {
            ui.label("Filters & Chart Type");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label("X axis:");
                let mut changed = false;
                egui::ComboBox::from_id_salt("x_axis")
                    .selected_text(&self.x_axis)
                    .show_ui(ui, |ui| {
                        for name in table.categorical_columns() {
                            if ui
                                .selectable_value(&mut self.x_axis, name.to_string(), name)
                                .changed()
                            {
                                changed = true;
                            }
                        }
                    });
                if changed {
                    self.rebuild_keep(table);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Y axis:");
                egui::ComboBox::from_id_salt("y_axis")
                    .selected_text(&self.y_axis)
                    .show_ui(ui, |ui| {
                        for name in table.numeric_columns() {
                            ui.selectable_value(&mut self.y_axis, name.to_string(), name);
                        }
                    });
            });

            ui.label("Filter by X:");
            ui.horizontal_wrapped(|ui| {
                for (value, on) in &mut self.keep {
                    ui.checkbox(on, value.as_str());
                }
            });

            ui.horizontal(|ui| {
                ui.label("Chart type:");
                for style in ChartStyle::ALL {
                    ui.radio_value(&mut self.style, style, style.label());
                }
            });

            ui.horizontal(|ui| {
                ui.label("Theme:");
                ui.radio_value(&mut self.theme, Theme::Light, Theme::Light.label());
                ui.radio_value(&mut self.theme, Theme::Dark, Theme::Dark.label());
            });
        });
    }

    fn output_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Output Options");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.label("Output path:");
                ui.text_edit_singleline(&mut self.output_path);
                if ui.button("Browse").clicked() {
                    if let Some(path) = rfd::FileDialog::new().pick_folder() {
                        self.output_path = path.to_string_lossy().to_string();
                    }
                }
            });

            ui.horizontal(|ui| {
                ui.label("Chart format:");
                ui.radio_value(&mut self.chart_format, ChartFormat::Png, "PNG");
                ui.radio_value(&mut self.chart_format, ChartFormat::Svg, "SVG");
            });

            ui.horizontal(|ui| {
                ui.label("Dimensions:");
                ui.add(egui::DragValue::new(&mut self.chart_width).range(200..=3000));
                ui.label("×");
                ui.add(egui::DragValue::new(&mut self.chart_height).range(200..=3000));
                ui.label("pixels");
            });

            ui.checkbox(&mut self.export_rows, "Also save the filtered rows");
            if self.export_rows {
                ui.horizontal(|ui| {
                    ui.label("Data format:");
                    ui.radio_value(&mut self.export_format, ExportFormat::Csv, "CSV");
                    ui.radio_value(&mut self.export_format, ExportFormat::Json, "JSON");
                });
            }
        });
    }

    /// Insight summary, recomputed on every widget change. Empty or invalid
    /// selections show no statistics.
    fn summary_ui(&mut self, ui: &mut egui::Ui, table: &Table) {
        let selection = self.current_selection();
        let summary = select::filter_view(table, &selection)
            .ok()
            .as_ref()
            .and_then(stats::summarize);
        if let Some(summary) = summary {
            ui.group(|ui| {
                ui.label("Insight Summary");
                ui.add_space(5.0);
                for line in summary.lines(&selection.numeric_axis) {
                    ui.label(line);
                }
            });
        }
    }
}

#[derive(Debug)]
struct OperationConfig {
    output_path: String,
    chart_format: ChartFormat,
    chart_width: u32,
    chart_height: u32,
    export_rows: bool,
    export_format: ExportFormat,
}

fn perform_operation(
    table: Table,
    selection: Selection,
    theme: Theme,
    config: OperationConfig,
) -> OperationResult {
    let view = match select::filter_view(&table, &selection) {
        Ok(view) => view,
        Err(err) => return OperationResult::Error(format!("Invalid selection: {}", err)),
    };

    let output_dir = PathBuf::from(&config.output_path);
    let mut output_files = Vec::new();

    let chart_extension = match config.chart_format {
        ChartFormat::Png => "png",
        ChartFormat::Svg => "svg",
    };
    let chart_path = output_dir.join(format!("tabdash_chart.{}", chart_extension));

    // A failed chart export is reported to the user; the app keeps running
    // and the summary block stays usable.
    match viz::render_chart(
        &view,
        selection.style,
        theme,
        &chart_path,
        config.chart_width,
        config.chart_height,
    ) {
        Ok(()) => output_files.push(chart_path.to_string_lossy().to_string()),
        Err(err) => return OperationResult::Error(format!("Chart export failed: {}", err)),
    }

    if config.export_rows {
        let (name, result) = match config.export_format {
            ExportFormat::Csv => {
                let p = output_dir.join("tabdash_data.csv");
                (p.clone(), storage::save_csv(&view, &p))
            }
            ExportFormat::Json => {
                let p = output_dir.join("tabdash_data.json");
                (p.clone(), storage::save_json(&view, &p))
            }
        };
        if let Err(err) = result {
            return OperationResult::Error(format!("Failed to save data: {}", err));
        }
        output_files.push(name.to_string_lossy().to_string());
    }

    let mut message = format!("Charted {} rows.", view.n_rows());
    if !output_files.is_empty() {
        message.push_str(&format!("\n\nFiles created:\n{}", output_files.join("\n")));
    }
    OperationResult::Success(message)
}
