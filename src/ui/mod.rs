use crate::app::ConverterApp;
use crate::constants::SIZE_HINT_MB;
use crate::state::FlowState;
use eframe::egui;

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_status();
        self.collect_file_input(ctx);

        // Custom dark theme styling
        let mut style = (*ctx.style()).clone();
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        style.spacing.item_spacing = egui::vec2(10.0, 10.0);

        style.visuals.dark_mode = true;
        style.visuals.window_fill = egui::Color32::from_gray(20);
        style.visuals.panel_fill = egui::Color32::from_gray(25);
        style.visuals.faint_bg_color = egui::Color32::from_gray(30);
        style.visuals.extreme_bg_color = egui::Color32::from_gray(15);

        ctx.set_style(style);
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(egui::Color32::from_gray(15)).inner_margin(15.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(
                        egui::RichText::new("📑 PDF to PowerPoint Converter")
                            .size(26.0)
                            .color(egui::Color32::WHITE)
                            .strong(),
                    );
                    ui.label(
                        egui::RichText::new(
                            "Transform your PDF files into editable PowerPoint presentations",
                        )
                        .size(14.0)
                        .color(egui::Color32::from_rgb(150, 150, 150)),
                    );
                });
            });

        egui::TopBottomPanel::bottom("controls")
            .frame(egui::Frame::none().fill(egui::Color32::from_gray(15)).inner_margin(15.0))
            .show(ctx, |ui| {
                self.show_main_controls(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            self.show_drop_zone(ui);
            ui.add_space(15.0);
            self.show_status_card(ui);
        });

        if self.session.in_flight() {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                crate::constants::STATUS_POLL_INTERVAL_MS,
            ));
        }
    }
}

impl ConverterApp {
    /// Pull dragged/dropped files from the raw frame input.
    fn collect_file_input(&mut self, ctx: &egui::Context) {
        self.is_dragging = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.is_dragging = false;
            self.handle_dropped(&dropped);
        }
    }

    fn show_drop_zone(&mut self, ui: &mut egui::Ui) {
        let stroke = if self.is_dragging {
            egui::Stroke::new(2.0, egui::Color32::from_rgb(80, 140, 255))
        } else {
            egui::Stroke::new(1.0, egui::Color32::from_gray(60))
        };

        let fill = if self.is_dragging {
            egui::Color32::from_rgba_premultiplied(30, 50, 90, 200)
        } else {
            egui::Color32::from_gray(30)
        };

        let response = egui::Frame::none()
            .fill(fill)
            .stroke(stroke)
            .rounding(10.0)
            .inner_margin(40.0)
            .show(ui, |ui| {
                ui.set_min_height(140.0);
                ui.vertical_centered(|ui| {
                    if let Some(candidate) = self.session.candidate() {
                        ui.label(egui::RichText::new("📄").size(48.0));
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new(&candidate.name)
                                .size(16.0)
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                        ui.label(
                            egui::RichText::new(candidate.size_display())
                                .size(13.0)
                                .color(egui::Color32::GRAY),
                        );
                    } else {
                        ui.label(egui::RichText::new("⬆").size(48.0).color(egui::Color32::GRAY));
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("Drop your PDF here or click to browse")
                                .size(16.0)
                                .color(egui::Color32::WHITE),
                        );
                        ui.label(
                            egui::RichText::new(format!("PDF files up to {}MB", SIZE_HINT_MB))
                                .size(13.0)
                                .color(egui::Color32::GRAY),
                        );
                    }
                });
            })
            .response;

        if response.interact(egui::Sense::click()).clicked() {
            self.browse();
        }
    }

    fn show_status_card(&mut self, ui: &mut egui::Ui) {
        if let Some(notice) = self.session.notice() {
            egui::Frame::none()
                .fill(egui::Color32::from_rgba_premultiplied(200, 50, 50, 50))
                .rounding(8.0)
                .inner_margin(15.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(notice).color(egui::Color32::LIGHT_RED));
                    });
                });
        } else if self.session.state() == FlowState::Success {
            let size = self
                .session
                .artifact()
                .map(|a| a.size_display())
                .unwrap_or_default();
            egui::Frame::none()
                .fill(egui::Color32::from_rgba_premultiplied(50, 200, 50, 50))
                .rounding(8.0)
                .inner_margin(15.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(format!("✅ Conversion complete ({})", size))
                                .color(egui::Color32::LIGHT_GREEN),
                        );
                    });
                });
        }
    }

    fn show_main_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(10.0);

            let converting = self.session.in_flight();

            let convert_button = egui::Button::new(
                egui::RichText::new("🔄 Convert to PowerPoint").size(16.0),
            )
            .min_size(egui::vec2(220.0, 45.0));

            if ui
                .add_enabled(self.session.can_submit(), convert_button)
                .clicked()
            {
                self.start_conversion();
            }

            if converting {
                ui.add_space(10.0);
                ui.spinner();
                ui.label(
                    egui::RichText::new("Converting...").color(egui::Color32::LIGHT_GRAY),
                );
            }

            ui.add_space(20.0);

            if self.session.state().is_success() {
                let download_button = egui::Button::new(
                    egui::RichText::new("⬇ Download PowerPoint").size(16.0),
                )
                .min_size(egui::vec2(220.0, 45.0));

                if ui.add(download_button).clicked() {
                    self.download();
                }

                ui.add_space(20.0);
            }

            let clear_button = egui::Button::new(egui::RichText::new("🗑 Clear").size(16.0))
                .min_size(egui::vec2(120.0, 45.0));

            if ui.add_enabled(!converting, clear_button).clicked() {
                self.clear();
            }

            ui.add_space(10.0);
        });
    }
}
