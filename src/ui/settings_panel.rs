use eframe::egui;

use crate::ui::settings::AppSettings;

pub fn draw_settings_panel(ctx: &egui::Context, settings: &mut AppSettings) {
    egui::SidePanel::left("settings")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Settings");
            ui.separator();

            ui.label("UI Scale");
            ui.add(egui::Slider::new(
                &mut settings.ui_scale,
                AppSettings::UI_SCALE_RANGE,
            ));

            ui.label("Output language");
            ui.text_edit_singleline(&mut settings.output_language);

            ui.separator();
            ui.collapsing("Connection", |ui| {
                ui.label("API base URL");
                ui.text_edit_singleline(&mut settings.api_base_url);

                ui.label("Request timeout (s)");
                ui.add(egui::DragValue::new(&mut settings.request_timeout_secs).range(5..=600));

                ui.small("Connection changes apply after a restart.");
            });
        });
}
