use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;

use crate::engine::engine::Engine;
use crate::engine::llm_client::GeminiClient;
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::engine::session::GenerationSession;
use crate::model::fields::StructuredFields;
use crate::model::genre::WritingGenre;
use crate::model::result::GenerationResult;
use crate::ui::form_panel::draw_form_panel;
use crate::ui::settings::AppSettings;
use crate::ui::settings_io::save_settings;
use crate::ui::settings_panel::draw_settings_panel;

/* =========================
   UI State
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Generate,
    Revise,
    ConnectionCheck,
}

#[derive(Default)]
pub struct UiState {
    /// Lives in memory only.
    pub credential: String,
    pub genre: WritingGenre,
    pub fields: StructuredFields,
    pub feedback: String,

    /// Mirror of the engine's session result.
    pub result: GenerationResult,

    pub error: Option<String>,
    pub connection_status: Option<String>,
    pub pending: Option<PendingAction>,

    pub show_settings: bool,
}

impl UiState {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Queues a command unless one is already running.
    pub fn dispatch(
        &mut self,
        cmd_tx: &mpsc::Sender<EngineCommand>,
        action: PendingAction,
        cmd: EngineCommand,
    ) {
        if self.is_busy() {
            return;
        }

        if cmd_tx.send(cmd).is_err() {
            tracing::error!("engine thread is gone");
            self.error = Some("The generation worker stopped. Please restart the app.".into());
            return;
        }

        self.pending = Some(action);
    }

    pub fn apply_response(&mut self, resp: EngineResponse) {
        match resp {
            EngineResponse::ActionFinished { outcome, result } => {
                let action = self.pending.take();
                self.result = result;

                match outcome {
                    Ok(()) => {
                        self.error = None;
                        if action == Some(PendingAction::Revise) {
                            self.feedback.clear();
                        }
                    }
                    Err(err) => self.error = Some(err.to_string()),
                }
            }

            EngineResponse::ConnectionChecked(outcome) => {
                self.pending = None;
                self.connection_status = Some(match outcome {
                    Ok(status) => status,
                    Err(err) => err.to_string(),
                });
            }
        }
    }
}

/* =========================
   App
   ========================= */

pub struct WriterApp {
    pub(crate) ui: UiState,
    settings: AppSettings,
    saved_settings: AppSettings,

    cmd_tx: mpsc::Sender<EngineCommand>,
    resp_rx: mpsc::Receiver<EngineResponse>,
}

impl WriterApp {
    pub fn new(settings: AppSettings) -> Result<Self> {
        let client = GeminiClient::new(&settings.api_base_url, settings.request_timeout())?;
        let session = GenerationSession::new(client, settings.output_language.clone());

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();

        std::thread::Builder::new()
            .name("generation-engine".into())
            .spawn(move || {
                let mut engine = Engine::new(cmd_rx, resp_tx, session);
                engine.run();
            })?;

        Ok(Self {
            ui: UiState::default(),
            saved_settings: settings.clone(),
            settings,
            cmd_tx,
            resp_rx,
        })
    }

    fn persist_settings_if_changed(&mut self, ctx: &egui::Context) {
        let editing =
            ctx.input(|i| i.pointer.any_down()) || ctx.memory(|m| m.focused().is_some());

        let Some(settings) = commit_settings(&mut self.settings, &self.saved_settings, editing)
        else {
            return;
        };

        if settings.output_language != self.saved_settings.output_language {
            let cmd = EngineCommand::SetLanguage(settings.output_language.clone());
            if self.cmd_tx.send(cmd).is_err() {
                tracing::error!("engine thread is gone");
            }
        }

        save_settings(&settings);
        self.saved_settings = settings;
    }
}

/// Sanitizes edited settings once the user stops editing. Returns what should
/// be written, or `None` when nothing differs from the saved copy.
fn commit_settings(
    current: &mut AppSettings,
    saved: &AppSettings,
    editing: bool,
) -> Option<AppSettings> {
    if editing || *current == *saved {
        return None;
    }

    *current = current.clone().sanitized();
    (*current != *saved).then(|| current.clone())
}

/* =========================
   egui App
   ========================= */

impl eframe::App for WriterApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        while let Ok(resp) = self.resp_rx.try_recv() {
            self.ui.apply_response(resp);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Five Ws Writer");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.ui.show_settings, "⚙ Settings");
                });
            });
        });

        if self.ui.show_settings {
            draw_settings_panel(ctx, &mut self.settings);
        }

        draw_form_panel(ctx, &mut self.ui, &self.cmd_tx);

        self.persist_settings_if_changed(ctx);

        if self.ui.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
