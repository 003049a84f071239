use eframe::egui;
use crate::gui::app::DpsCalculatorApp;
use crate::utils::auto_save_app_settings;

const HEADING_COLOR: egui::Color32 = egui::Color32::from_rgb(56, 189, 248);
const CURRENT_DPS_COLOR: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);
const MAX_DPS_COLOR: egui::Color32 = egui::Color32::from_rgb(163, 230, 53);

impl eframe::App for DpsCalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.zoom_applied {
            ctx.set_zoom_factor(self.settings.text_scale);
            ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(window_level(
                self.settings.always_on_top,
            )));
            self.zoom_applied = true;
        }

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(4.0);
                ui.small(
                    "This tool is not affiliated with or endorsed by Grinding Gear Games. \
                     Path of Exile and Path of Exile 2 are trademarks or registered \
                     trademarks of Grinding Gear Games.",
                );
                ui.add_space(4.0);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.heading(egui::RichText::new("Path of Exile 2 DPS Calculator").color(HEADING_COLOR));
                ui.label("Quickly and easily calculate DPS for Path of Exile 1/2 (PoE 1/2).");
                ui.add_space(8.0);
                ui.label("Press CTRL + C on the weapon in-game to copy its data, then paste it here.");
            });

            ui.add_space(6.0);

            let response = ui.add_sized(
                [ui.available_width(), 220.0],
                egui::TextEdit::multiline(&mut self.input).hint_text("Enter weapon data"),
            );
            if response.changed() {
                self.reparse();
            }

            if let Some(error) = self.error {
                ui.colored_label(egui::Color32::from_rgb(248, 113, 113), error);
            }

            if let Some(weapon) = self.weapon.clone() {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(format!("Current DPS: {}", weapon.current_dps))
                            .size(22.0)
                            .color(CURRENT_DPS_COLOR),
                    );
                    ui.label(
                        egui::RichText::new(format!("Max DPS on 20% Quality: ~{}", weapon.max_dps))
                            .size(22.0)
                            .color(MAX_DPS_COLOR),
                    );
                    ui.add_space(6.0);
                    ui.small(format!(
                        "Base Damage: {}-{}   Attack Speed: {}   Quality: +{}%",
                        weapon.base_min_damage,
                        weapon.base_max_damage,
                        weapon.attack_speed,
                        weapon.quality
                    ));
                });
            }

            ui.add_space(10.0);
            ui.separator();
            if ui.button(if self.show_options { "Hide Options" } else { "Options" }).clicked() {
                self.show_options = !self.show_options;
            }

            if self.show_options {
                self.show_options_row(ctx, ui);
            }
        });
    }
}

impl DpsCalculatorApp {
    fn show_options_row(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let mut settings_changed = false;

        ui.horizontal(|ui| {
            ui.label("Text scale:");
            let mut scale = self.settings.text_scale;
            if ui
                .add(egui::Slider::new(&mut scale, 0.5..=2.0).step_by(0.1))
                .changed()
            {
                self.settings.set_text_scale(scale);
                ctx.set_zoom_factor(self.settings.text_scale);
                settings_changed = true;
            }
        });

        if ui
            .checkbox(&mut self.settings.always_on_top, "Always on top")
            .changed()
        {
            ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(window_level(
                self.settings.always_on_top,
            )));
            settings_changed = true;
        }

        if settings_changed {
            auto_save_app_settings(&self.settings);
        }
    }
}

fn window_level(always_on_top: bool) -> egui::WindowLevel {
    if always_on_top {
        egui::WindowLevel::AlwaysOnTop
    } else {
        egui::WindowLevel::Normal
    }
}
