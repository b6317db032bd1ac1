// Main application state and UI rendering logic for the SMART report viewer

// Import reusable card widgets and status colours
use crate::gui::{stat_card, status_color};
// Import the report parser and health records
use smart_report_viewer::{DiskHealthRecord, SmartStatus, parse_report};
// Import egui for UI rendering
use eframe::egui;
// Arc for cheap cloning of parsed records
use std::sync::Arc;
// Structured logging
use tracing::{info, warn};

/// Main application state for the eframe app.
/// Holds the raw report text, the parsed records and UI selection.
pub struct AppState {
    /// Parsed devices wrapped in Arc for efficient cloning
    records: Vec<Arc<DiskHealthRecord>>,

    /// Index of currently selected record
    selected: usize,

    /// Raw smartctl output being viewed (editable in the input panel)
    input: String,

    /// Whether the paste panel is expanded
    show_input: bool,

    /// Whether a parse has run since the input last changed
    parsed: bool,

    /// Error from loading or vetting the report, if any
    last_error: Option<String>,
}

impl AppState {
    /// Creates a new application state instance.
    /// Sets light theme and parses the preloaded report, if one was given.
    ///
    /// # Arguments
    /// * `cc` - eframe creation context containing egui context
    /// * `report` - captured smartctl output loaded at start-up
    /// * `error` - load or collector error to display instead of records
    pub fn new(cc: &eframe::CreationContext<'_>, report: Option<String>, error: Option<String>) -> Self {
        // Configure light theme for consistent appearance
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let mut s = Self {
            records: Vec::new(),
            selected: 0,
            show_input: report.is_none(),
            input: report.unwrap_or_default(),
            parsed: false,
            last_error: error,
        };

        if s.last_error.is_none() && !s.input.trim().is_empty() {
            s.reparse();
        }

        s
    }

    /// Re-runs the parser over the current input text.
    /// Keeps the selection when it is still in range.
    fn reparse(&mut self) {
        self.last_error = None;
        self.records = parse_report(&self.input).into_iter().map(Arc::new).collect();
        self.parsed = true;

        if self.selected >= self.records.len() {
            self.selected = 0;
        }

        if self.records.is_empty() {
            warn!("no device sections found in report");
        } else {
            info!(devices = self.records.len(), "report parsed");
        }
    }

    /// Collapsible panel with a text box for pasting smartctl output.
    fn input_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("input_panel").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let toggle = if self.show_input { "Hide report text" } else { "Paste report" };
                if ui.button(toggle).clicked() {
                    self.show_input = !self.show_input;
                }
                if ui.button("Parse").clicked() {
                    self.reparse();
                }
                if ui.button("Clear").clicked() {
                    self.input.clear();
                    self.records.clear();
                    self.selected = 0;
                    self.parsed = false;
                    self.last_error = None;
                }
            });

            if self.show_input {
                ui.add_space(6.0);
                egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                    let edit = egui::TextEdit::multiline(&mut self.input)
                        .code_editor()
                        .desired_rows(10)
                        .desired_width(f32::INFINITY)
                        .hint_text("== SMART info for /dev/sda ==\n...");
                    if ui.add(edit).changed() {
                        self.parsed = false;
                    }
                });
            }
            ui.add_space(6.0);
        });
    }

    /// Left sidebar: one selectable card per device.
    fn device_list(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("device_panel")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.heading(egui::RichText::new("Devices").size(18.0).strong());
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (i, rec) in self.records.iter().enumerate() {
                        let is_selected = self.selected == i;

                        // Change appearance based on selection state
                        let frame = if is_selected {
                            egui::Frame::none()
                                .fill(egui::Color32::from_rgb(220, 235, 255))
                                .stroke(egui::Stroke::new(2.0, egui::Color32::from_rgb(70, 130, 220)))
                                .rounding(8.0)
                                .inner_margin(12.0)
                        } else {
                            egui::Frame::none()
                                .fill(egui::Color32::from_rgb(250, 250, 250))
                                .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(220)))
                                .rounding(8.0)
                                .inner_margin(12.0)
                        };

                        let response = frame.show(ui, |ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(format!("/dev/{}", rec.device_name)).strong().size(14.0));
                                ui.add_space(2.0);
                                ui.label(
                                    egui::RichText::new(&rec.model)
                                        .size(11.0)
                                        .color(egui::Color32::from_gray(100)),
                                );
                                ui.add_space(4.0);
                                ui.horizontal(|ui| {
                                    ui.label(egui::RichText::new("●").color(status_color(rec.smart_status)).size(12.0));
                                    ui.label(egui::RichText::new(rec.smart_status.to_string()).size(11.0));
                                });
                            });
                        });

                        if response.response.interact(egui::Sense::click()).clicked() {
                            self.selected = i;
                        }

                        ui.add_space(8.0);
                    }
                });

                if let Some(err) = &self.last_error {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(10.0);
                    ui.colored_label(egui::Color32::RED, err);
                }
            });
    }
}

impl eframe::App for AppState {
    /// Main UI update function called every frame.
    /// Renders the input panel, the device list and the selected record.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.input_panel(ctx);
        self.device_list(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(245, 247, 250)))
            .show(ctx, |ui| {
                if self.records.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            if let Some(err) = &self.last_error {
                                ui.heading("Report could not be used");
                                ui.add_space(8.0);
                                ui.label(err);
                            } else if self.parsed {
                                // An empty parse is not a healthy host
                                ui.heading("No devices found");
                                ui.add_space(8.0);
                                ui.label("The text contains no \"== SMART info for /dev/<name> ==\" sections");
                            } else {
                                ui.heading("No report loaded");
                                ui.add_space(8.0);
                                ui.label("Paste smartctl output above and press Parse");
                            }
                        });
                    });
                    return;
                }

                let rec = self.records[self.selected].as_ref();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(20.0);

                    // Header card with model info and status badge
                    ui.horizontal(|ui| {
                        ui.add_space(20.0);
                        egui::Frame::none()
                            .fill(egui::Color32::WHITE)
                            .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(230)))
                            .rounding(12.0)
                            .inner_margin(10.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width() - 40.0);

                                ui.horizontal(|ui| {
                                    ui.vertical(|ui| {
                                        ui.heading(egui::RichText::new(&rec.model).size(22.0));
                                        ui.add_space(4.0);
                                        ui.horizontal(|ui| {
                                            let grey = egui::Color32::from_gray(100);
                                            ui.label(egui::RichText::new(&rec.capacity).size(16.0).color(grey));
                                            ui.label(egui::RichText::new("•").color(egui::Color32::from_gray(150)));
                                            ui.label(egui::RichText::new(rec.media_type.to_string()).size(16.0).color(grey));
                                        });
                                    });

                                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                        egui::Frame::none()
                                            .fill(status_color(rec.smart_status))
                                            .rounding(8.0)
                                            .inner_margin(egui::vec2(20.0, 10.0))
                                            .show(ui, |ui| {
                                                ui.label(
                                                    egui::RichText::new(rec.smart_status.to_string())
                                                        .color(egui::Color32::WHITE)
                                                        .size(22.0)
                                                        .strong(),
                                                );
                                            });
                                    });
                                });
                            });
                        ui.add_space(20.0);
                    });

                    ui.add_space(12.0);

                    let card_width = 283.0;
                    let card_spacing = 11.0;
                    let card_height = 75.0;

                    ui.horizontal(|ui| {
                        ui.add_space(20.0);

                        let health_color = match rec.overall_health.as_str() {
                            "PASSED" => status_color(SmartStatus::Ok),
                            "FAILED" => status_color(SmartStatus::Bad),
                            _ => status_color(SmartStatus::Unknown),
                        };
                        stat_card(ui, card_width, card_height, "Self-assessment", &rec.overall_health, health_color);

                        ui.add_space(card_spacing);

                        stat_card(
                            ui,
                            card_width,
                            card_height,
                            "Power on hours",
                            &rec.power_on_hours,
                            egui::Color32::from_rgb(168, 85, 247),
                        );

                        ui.add_space(card_spacing);

                        stat_card(
                            ui,
                            card_width,
                            card_height,
                            "Power cycles",
                            &rec.power_cycles,
                            egui::Color32::from_rgb(59, 130, 246),
                        );
                    });

                    ui.add_space(15.0);

                    // Verbatim smartctl output for this device
                    ui.horizontal(|ui| {
                        ui.add_space(20.0);
                        egui::Frame::none()
                            .fill(egui::Color32::WHITE)
                            .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(220)))
                            .rounding(10.0)
                            .inner_margin(15.0)
                            .show(ui, |ui| {
                                ui.set_width(ui.available_width() - 40.0);
                                egui::CollapsingHeader::new(egui::RichText::new("Full smartctl output").size(14.0).strong())
                                    .id_salt(("full_output", self.selected))
                                    .show(ui, |ui| {
                                        ui.label(egui::RichText::new(rec.full_output.trim()).monospace().size(11.0));
                                    });
                            });
                        ui.add_space(20.0);
                    });

                    ui.add_space(15.0);
                });
            });
    }
}
