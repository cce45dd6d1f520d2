use super::{can_submit, render, DisplayModel, ResumeMatcher};
use crate::utils::format_size;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(161, 89, 225);

impl ResumeMatcher {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Custom Job Description Match");
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("Compare your resume against any job posting")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(20.0);
                self.render_resume_picker(ui);

                ui.add_space(10.0);
                ui.group(|ui| {
                    ui.label("Job description");
                    ui.add_space(4.0);
                    let text_edit =
                        egui::TextEdit::multiline(self.upload.job_description_mut())
                            .desired_rows(6)
                            .desired_width(ui.available_width())
                            .hint_text("Paste job description here...");
                    ui.add(text_edit);
                });

                ui.add_space(20.0);
                self.render_actions(ui);

                if let Some(model) = render(&self.result) {
                    ui.add_space(20.0);
                    render_results(ui, &model);
                }
            });
        });

        self.render_notice(ctx);
    }

    fn render_resume_picker(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                if ui.button("📄 Select Resume (PDF)").clicked() {
                    if let Some(path) = FileDialog::new().add_filter("PDF", &["pdf"]).pick_file()
                    {
                        self.select_resume(&path);
                    }
                }
                if let Some(resume) = self.upload.resume() {
                    ui.label(format!(
                        "Selected: {} ({})",
                        resume.file_name,
                        format_size(resume.len())
                    ));
                }
            });
        });
    }

    fn render_actions(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            let submitting = self.is_submitting();

            ui.add_enabled_ui(!submitting, |ui| {
                let button = egui::Button::new("Match with Custom Job")
                    .min_size(egui::vec2(200.0, 40.0));
                let response = ui.add(button);
                let response = if can_submit(&self.upload) {
                    response
                } else {
                    response.on_hover_text("Select a resume and paste a job description first")
                };
                if response.clicked() {
                    // Validation failures surface through the notice window.
                    let _ = self.submit();
                }
            });

            if submitting {
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Matching...");
                });
            }

            ui.add_space(5.0);
            if ui.button("🗑 Clear All").clicked() {
                self.reset();
            }
        });
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice() else {
            return;
        };
        let message = notice.message.clone();

        let mut acknowledged = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(Color32::from_rgb(220, 50, 50), message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            self.acknowledge_notice();
        }
    }
}

fn render_results(ui: &mut egui::Ui, model: &DisplayModel) {
    ui.group(|ui| {
        ui.label(RichText::new("Custom Job Match").heading().color(ACCENT));
        ui.add_space(8.0);
        ui.label(RichText::new(model.score_line()).strong());

        ui.add_space(8.0);
        ui.label(RichText::new("Matched Keywords").strong());
        ui.label(model.matched_text.as_str());

        ui.add_space(8.0);
        ui.label(RichText::new("Suggested Keywords").strong());
        ui.label(model.suggested_text.as_str());
    });
}
