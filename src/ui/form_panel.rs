use eframe::egui;
use std::sync::mpsc::Sender;

use crate::engine::protocol::EngineCommand;
use crate::model::fields::Field;
use crate::model::genre::WritingGenre;
use crate::ui::app::{PendingAction, UiState};

/// Fields in the left column; the rest go right.
const LEFT_COLUMN_LEN: usize = 4;

pub fn draw_form_panel(ctx: &egui::Context, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            draw_credential(ui, state, cmd_tx);
            ui.separator();

            draw_genre(ui, state);
            ui.add_space(6.0);
            draw_fields(ui, state);
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                let busy = state.is_busy();
                if ui.add_enabled(!busy, egui::Button::new("Generate")).clicked() {
                    let cmd = EngineCommand::Generate {
                        credential: state.credential.clone(),
                        genre: state.genre,
                        fields: state.fields.clone(),
                    };
                    state.dispatch(cmd_tx, PendingAction::Generate, cmd);
                }

                if busy {
                    ui.spinner();
                }
            });

            if let Some(error) = &state.error {
                ui.colored_label(egui::Color32::from_rgb(220, 80, 80), error);
            }

            if !state.result.is_empty() {
                ui.separator();
                draw_result(ui, state);
                ui.separator();
                draw_revision(ui, state, cmd_tx);
            }
        });
    });
}

/* =========================
   Sections
   ========================= */

fn draw_credential(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.label("API key");
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.credential)
                .password(true)
                .hint_text("Paste your API key"),
        );

        let enabled = !state.is_busy() && !state.credential.is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Check key")).clicked() {
            let cmd = EngineCommand::TestConnection {
                credential: state.credential.clone(),
            };
            state.dispatch(cmd_tx, PendingAction::ConnectionCheck, cmd);
        }
    });

    if let Some(status) = &state.connection_status {
        ui.small(status);
    }
}

fn draw_genre(ui: &mut egui::Ui, state: &mut UiState) {
    egui::ComboBox::from_label("Genre")
        .selected_text(state.genre.label())
        .show_ui(ui, |ui| {
            for genre in WritingGenre::ALL {
                ui.selectable_value(&mut state.genre, genre, genre.label());
            }
        });
}

fn draw_fields(ui: &mut egui::Ui, state: &mut UiState) {
    let (left, right) = Field::ALL.split_at(LEFT_COLUMN_LEN);

    ui.columns(2, |cols| {
        for (col, fields) in cols.iter_mut().zip([left, right]) {
            for field in fields {
                col.label(field.label());
                col.add(
                    egui::TextEdit::singleline(state.fields.get_mut(*field))
                        .hint_text(field.hint())
                        .desired_width(f32::INFINITY),
                );
            }
        }
    });
}

fn draw_result(ui: &mut egui::Ui, state: &UiState) {
    let caption = state
        .result
        .kind()
        .map(|k| k.caption())
        .unwrap_or("Generated text");
    ui.label(caption);

    let mut text = state.result.text();
    ui.add(
        egui::TextEdit::multiline(&mut text)
            .desired_rows(12)
            .desired_width(f32::INFINITY),
    );

    if ui.small_button("Copy").clicked() {
        ui.ctx().copy_text(state.result.text().to_string());
    }
}

fn draw_revision(ui: &mut egui::Ui, state: &mut UiState, cmd_tx: &Sender<EngineCommand>) {
    ui.label("Requested changes");
    ui.add(
        egui::TextEdit::multiline(&mut state.feedback)
            .hint_text("Describe what should change…")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    if ui
        .add_enabled(!state.is_busy(), egui::Button::new("Revise"))
        .clicked()
    {
        let cmd = EngineCommand::Revise {
            credential: state.credential.clone(),
            feedback: state.feedback.clone(),
        };
        state.dispatch(cmd_tx, PendingAction::Revise, cmd);
    }
}
