    use eframe::egui;
    use smart_report_viewer::SmartStatus;

    /// Badge and dot colour for a health verdict.
    pub fn status_color(status: SmartStatus) -> egui::Color32 {
        match status {
            SmartStatus::Ok => egui::Color32::from_rgb(16, 185, 129),
            SmartStatus::Warning => egui::Color32::from_rgb(245, 158, 11),
            SmartStatus::Bad => egui::Color32::from_rgb(239, 68, 68),
            SmartStatus::Unknown => egui::Color32::from_gray(150),
        }
    }

    pub fn stat_card(ui: &mut egui::Ui, width: f32, height: f32, label: &str, value: &str, color: egui::Color32) {
        egui::Frame::none()
            .fill(egui::Color32::WHITE)
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(230)))
            .rounding(10.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(width);
                ui.set_height(height);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(label)
                            .size(11.0)
                            .color(egui::Color32::from_gray(120)),
                    );
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(value).size(22.0).color(color).strong());
                });
            });
    }
