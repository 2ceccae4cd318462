use std::time::{Duration, Instant};

use arboard::Clipboard;
use client_core::{
    format::{chunk_lines, BINARY_LINE_WIDTH, HEX_LINE_WIDTH},
    lifecycle::OperationLifecycle,
    validate::{clean_ciphertext_hex, validate_plaintext, ValidationError},
    view::{char_count_label, input_height, DerivedView, EMPTY_PLACEHOLDER},
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{MAX_CIPHERTEXT_HEX_CHARS, MAX_PLAINTEXT_CHARS};
use shared::protocol::{DecryptResponse, EncryptResponse};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

/// How long a banner stays up before auto-dismissing.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePane {
    Encrypt,
    Decrypt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotificationKind {
    Success,
    Error,
}

/// The single transient banner; a new notification replaces whatever is
/// currently shown.
#[derive(Debug, Clone)]
struct Notification {
    kind: NotificationKind,
    message: String,
    shown_at: Instant,
}

impl Notification {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTIFICATION_TTL
    }
}

/// Display-ready encrypt results, chunked at the fixed line widths. Built
/// whole from one response and swapped in atomically.
#[derive(Debug, Clone, Default)]
struct EncryptOutputs {
    cipher_hex: String,
    cipher_binary: String,
    padded_hex: String,
}

impl EncryptOutputs {
    fn from_response(response: &EncryptResponse) -> Self {
        Self {
            cipher_hex: chunk_lines(&response.cipher_hex, HEX_LINE_WIDTH),
            cipher_binary: chunk_lines(&response.cipher_binary, BINARY_LINE_WIDTH),
            padded_hex: chunk_lines(&response.padded_hex, HEX_LINE_WIDTH),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct DecryptOutputs {
    decrypted: String,
    ascii_str: String,
    binary: String,
    padded_hex: String,
}

impl DecryptOutputs {
    fn from_response(response: &DecryptResponse) -> Self {
        Self {
            decrypted: or_placeholder(&response.decrypted),
            ascii_str: or_placeholder(&response.ascii_str),
            binary: or_placeholder(&response.binary),
            padded_hex: chunk_lines(&response.padded_hex, HEX_LINE_WIDTH),
        }
    }
}

fn or_placeholder(s: &str) -> String {
    if s.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        s.to_string()
    }
}

struct EncryptPane {
    input: String,
    key_hex: String,
    derived: DerivedView,
    outputs: Option<EncryptOutputs>,
    lifecycle: OperationLifecycle,
}

impl EncryptPane {
    fn new() -> Self {
        Self {
            input: String::new(),
            key_hex: String::new(),
            derived: DerivedView::of(""),
            outputs: None,
            lifecycle: OperationLifecycle::new(),
        }
    }

    fn refresh_views(&mut self) {
        self.derived = DerivedView::of(&self.input);
    }

    fn clear(&mut self) {
        self.input.clear();
        self.key_hex.clear();
        self.outputs = None;
        self.refresh_views();
    }
}

struct DecryptPane {
    input: String,
    key_hex: String,
    char_count: usize,
    outputs: Option<DecryptOutputs>,
    lifecycle: OperationLifecycle,
}

impl DecryptPane {
    fn new() -> Self {
        Self {
            input: String::new(),
            key_hex: String::new(),
            char_count: 0,
            outputs: None,
            lifecycle: OperationLifecycle::new(),
        }
    }

    // The decrypt count ignores whitespace, matching what would be sent.
    fn refresh_views(&mut self) {
        self.char_count = stripped_char_count(&self.input);
    }

    fn clear(&mut self) {
        self.input.clear();
        self.key_hex.clear();
        self.outputs = None;
        self.refresh_views();
    }
}

pub struct WorkbenchApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    active_pane: ActivePane,
    encrypt: EncryptPane,
    decrypt: DecryptPane,

    notification: Option<Notification>,
    scroll_to_encrypt_output: bool,
    scroll_to_decrypt_output: bool,
    // Hex picked up from the cipher output, applied to the decrypt pane on
    // the frame after the tab switch.
    pending_handoff: Option<String>,
}

impl WorkbenchApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            active_pane: ActivePane::Encrypt,
            encrypt: EncryptPane::new(),
            decrypt: DecryptPane::new(),
            notification: None,
            scroll_to_encrypt_output: false,
            scroll_to_decrypt_output: false,
            pending_handoff: None,
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|notification| notification.is_expired(now))
        {
            self.notification = None;
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::EncryptFinished(result) => {
                    match result {
                        Ok(response) => {
                            self.encrypt.outputs = Some(EncryptOutputs::from_response(&response));
                            self.encrypt.lifecycle.resolve_success();
                            self.scroll_to_encrypt_output = true;
                            self.notify(Notification::success("Encryption successful!"));
                        }
                        Err(failure) => {
                            // Outputs stay as they were; only the banner changes.
                            self.encrypt.lifecycle.resolve_failure();
                            self.notify(Notification::error(failure.notification_text()));
                        }
                    }
                    self.encrypt.lifecycle.reset();
                }
                UiEvent::DecryptFinished(result) => {
                    match result {
                        Ok(response) => {
                            self.decrypt.outputs = Some(DecryptOutputs::from_response(&response));
                            self.decrypt.lifecycle.resolve_success();
                            self.scroll_to_decrypt_output = true;
                            self.notify(Notification::success("Decryption successful!"));
                        }
                        Err(failure) => {
                            self.decrypt.lifecycle.resolve_failure();
                            self.notify(Notification::error(failure.notification_text()));
                        }
                    }
                    self.decrypt.lifecycle.reset();
                }
                UiEvent::WorkerStartupFailed(message) => {
                    self.notify(Notification::error(format!(
                        "Backend worker failed: {message}"
                    )));
                }
            }
        }
    }

    fn apply_pending_handoff(&mut self) {
        if let Some(hex) = self.pending_handoff.take() {
            self.decrypt.input = hex;
            self.decrypt.refresh_views();
            self.notify(Notification::success("Ciphertext copied to decrypt tab"));
        }
    }

    fn submit_encrypt(&mut self) {
        if let Err(err) = validate_plaintext(&self.encrypt.input) {
            self.notify(Notification::error(validation_message(
                ActivePane::Encrypt,
                err,
            )));
            return;
        }
        if !self.encrypt.lifecycle.begin_submit() {
            return;
        }

        let command = BackendCommand::Encrypt {
            plaintext: self.encrypt.input.clone(),
            key_hex: optional_key(&self.encrypt.key_hex),
        };
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, command) {
            self.encrypt.lifecycle.reset();
            self.notify(Notification::error(message));
        }
    }

    fn submit_decrypt(&mut self) {
        let cleaned = match clean_ciphertext_hex(&self.decrypt.input) {
            Ok(cleaned) => cleaned,
            Err(err) => {
                self.notify(Notification::error(validation_message(
                    ActivePane::Decrypt,
                    err,
                )));
                return;
            }
        };
        if !self.decrypt.lifecycle.begin_submit() {
            return;
        }

        let command = BackendCommand::Decrypt {
            ciphertext_hex: cleaned,
            key_hex: optional_key(&self.decrypt.key_hex),
        };
        if let Err(message) = dispatch_backend_command(&self.cmd_tx, command) {
            self.decrypt.lifecycle.reset();
            self.notify(Notification::error(message));
        }
    }

    fn start_handoff(&mut self) {
        let Some(outputs) = &self.encrypt.outputs else {
            return;
        };
        if let Some(hex) = handoff_hex(&outputs.cipher_hex) {
            self.active_pane = ActivePane::Decrypt;
            self.pending_handoff = Some(hex);
        }
    }

    fn copy_output(&mut self, ctx: &egui::Context, text: &str) {
        if text.trim().is_empty() {
            self.notify(Notification::error("Nothing to copy"));
            return;
        }
        copy_text_best_effort(ctx, text);
        self.notify(Notification::success("Copied to clipboard!"));
    }

    fn show_tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.active_pane, ActivePane::Encrypt, "🔒 Encrypt");
            ui.selectable_value(&mut self.active_pane, ActivePane::Decrypt, "🔓 Decrypt");
        });
    }

    fn show_notification_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(notification) = self.notification.clone() {
            let (fill, stroke) = match notification.kind {
                NotificationKind::Success => (
                    egui::Color32::from_rgb(43, 88, 56),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(94, 160, 115)),
                ),
                NotificationKind::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new(&notification.message).color(egui::Color32::WHITE),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.notification = None;
                            }
                        });
                    });
                });
        }
    }

    fn show_encrypt_pane(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Plaintext").strong());
        let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
        let height = auto_input_height(content_rows(&self.encrypt.input), row_height);
        let input = ui.add_sized(
            [ui.available_width(), height],
            egui::TextEdit::multiline(&mut self.encrypt.input)
                .font(egui::TextStyle::Monospace)
                .hint_text("Text to encrypt"),
        );
        if input.changed() {
            self.encrypt.refresh_views();
        }
        ui.horizontal(|ui| {
            ui.small(self.encrypt.derived.char_count_label());
            ui.small(
                egui::RichText::new(format!("service limit {MAX_PLAINTEXT_CHARS} characters"))
                    .weak(),
            );
        });

        ui.add_space(4.0);
        ui.label(egui::RichText::new("Key (hex, optional)").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.encrypt.key_hex)
                .font(egui::TextStyle::Monospace)
                .hint_text("Leave empty to use the service demo key"),
        );

        ui.add_space(8.0);
        let ascii = self.encrypt.derived.ascii_preview();
        let binary = self.encrypt.derived.binary_preview();
        preview_block(ui, "ASCII codes", &ascii);
        preview_block(ui, "Binary", &binary);

        ui.horizontal(|ui| {
            let busy = self.encrypt.lifecycle.is_in_flight();
            let button = egui::Button::new(encrypt_button_label(busy));
            if ui
                .add_enabled(self.encrypt.lifecycle.control_enabled(), button)
                .clicked()
            {
                self.submit_encrypt();
            }
            if ui.button("Clear").clicked() {
                self.encrypt.clear();
            }
        });

        ui.add_space(8.0);
        ui.separator();
        let outputs = self.encrypt.outputs.clone().unwrap_or_default();
        let group = ui.group(|ui| {
            let cipher_hex = output_block(ui, "Cipher (hex)", &outputs.cipher_hex);
            let hex_double_clicked = cipher_hex.body.double_clicked();
            cipher_hex
                .body
                .on_hover_text("Double-click to send to the decrypt tab");
            if cipher_hex.copy_clicked {
                self.copy_output(ui.ctx(), &outputs.cipher_hex);
            }
            if hex_double_clicked {
                self.start_handoff();
                ui.ctx().request_repaint();
            }

            let cipher_binary = output_block(ui, "Cipher (binary)", &outputs.cipher_binary);
            if cipher_binary.copy_clicked {
                self.copy_output(ui.ctx(), &outputs.cipher_binary);
            }

            let padded_hex = output_block(ui, "Padded plaintext (hex)", &outputs.padded_hex);
            if padded_hex.copy_clicked {
                self.copy_output(ui.ctx(), &outputs.padded_hex);
            }
        });
        if self.scroll_to_encrypt_output {
            group.response.scroll_to_me(Some(egui::Align::Min));
            self.scroll_to_encrypt_output = false;
        }
    }

    fn show_decrypt_pane(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Ciphertext (hex)").strong());
        let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
        let height = auto_input_height(content_rows(&self.decrypt.input), row_height);
        let input = ui.add_sized(
            [ui.available_width(), height],
            egui::TextEdit::multiline(&mut self.decrypt.input)
                .font(egui::TextStyle::Monospace)
                .hint_text("Hex to decrypt"),
        );
        if input.changed() {
            self.decrypt.refresh_views();
        }
        ui.horizontal(|ui| {
            ui.small(char_count_label(self.decrypt.char_count));
            ui.small(
                egui::RichText::new(format!(
                    "service limit {MAX_CIPHERTEXT_HEX_CHARS} hex characters"
                ))
                .weak(),
            );
        });

        ui.add_space(4.0);
        ui.label(egui::RichText::new("Key (hex, optional)").strong());
        ui.add(
            egui::TextEdit::singleline(&mut self.decrypt.key_hex)
                .font(egui::TextStyle::Monospace)
                .hint_text("Leave empty to use the service demo key"),
        );

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let busy = self.decrypt.lifecycle.is_in_flight();
            let button = egui::Button::new(decrypt_button_label(busy));
            if ui
                .add_enabled(self.decrypt.lifecycle.control_enabled(), button)
                .clicked()
            {
                self.submit_decrypt();
            }
            if ui.button("Clear").clicked() {
                self.decrypt.clear();
            }
        });

        ui.add_space(8.0);
        ui.separator();
        let outputs = self.decrypt.outputs.clone().unwrap_or_default();
        let group = ui.group(|ui| {
            let decrypted = output_block(ui, "Decrypted text", &outputs.decrypted);
            if decrypted.copy_clicked {
                self.copy_output(ui.ctx(), &outputs.decrypted);
            }
            let ascii = output_block(ui, "ASCII codes", &outputs.ascii_str);
            if ascii.copy_clicked {
                self.copy_output(ui.ctx(), &outputs.ascii_str);
            }
            let binary = output_block(ui, "Binary", &outputs.binary);
            if binary.copy_clicked {
                self.copy_output(ui.ctx(), &outputs.binary);
            }
            let padded_hex = output_block(ui, "Padded plaintext (hex)", &outputs.padded_hex);
            if padded_hex.copy_clicked {
                self.copy_output(ui.ctx(), &outputs.padded_hex);
            }
        });
        if self.scroll_to_decrypt_output {
            group.response.scroll_to_me(Some(egui::Align::Min));
            self.scroll_to_decrypt_output = false;
        }
    }
}

impl eframe::App for WorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        // A handoff queued during the previous frame lands after the tab
        // switch has been rendered.
        self.apply_pending_handoff();
        self.expire_notification(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_tab_bar(ui);
            ui.add_space(4.0);
            self.show_notification_banner(ui);
            ui.add_space(4.0);
            ui.separator();
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.active_pane {
                    ActivePane::Encrypt => self.show_encrypt_pane(ui),
                    ActivePane::Decrypt => self.show_decrypt_pane(ui),
                });
        });

        // Completion events and the banner TTL arrive without user input.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

struct OutputBlockResponse {
    body: egui::Response,
    copy_clicked: bool,
}

fn output_block(ui: &mut egui::Ui, title: &str, text: &str) -> OutputBlockResponse {
    let mut copy_clicked = false;
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(title).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            copy_clicked = ui.small_button("📋 Copy").clicked();
        });
    });
    let body = ui.add(
        egui::Label::new(egui::RichText::new(text).monospace())
            .wrap()
            .sense(egui::Sense::click()),
    );
    ui.add_space(6.0);
    OutputBlockResponse { body, copy_clicked }
}

fn preview_block(ui: &mut egui::Ui, title: &str, text: &str) {
    ui.label(egui::RichText::new(title).strong());
    ui.add(egui::Label::new(egui::RichText::new(text).monospace()).wrap());
    ui.add_space(6.0);
}

fn copy_text_best_effort(ctx: &egui::Context, text: &str) {
    let primary = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string()));
    if let Err(err) = primary {
        tracing::debug!("system clipboard unavailable, using egui fallback: {err}");
        ctx.copy_text(text.to_string());
    }
}

fn encrypt_button_label(in_flight: bool) -> &'static str {
    if in_flight {
        "⏳ Encrypting..."
    } else {
        "🔒 Encrypt"
    }
}

fn decrypt_button_label(in_flight: bool) -> &'static str {
    if in_flight {
        "⏳ Decrypting..."
    } else {
        "🔓 Decrypt"
    }
}

/// Displayed cipher hex with its line breaks stripped; `None` when there is
/// nothing to hand off.
fn handoff_hex(display: &str) -> Option<String> {
    let hex: String = display.chars().filter(|ch| !ch.is_whitespace()).collect();
    (!hex.is_empty()).then_some(hex)
}

fn optional_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn stripped_char_count(input: &str) -> usize {
    input.chars().filter(|ch| !ch.is_whitespace()).count()
}

fn content_rows(text: &str) -> usize {
    text.lines().count().max(1) + usize::from(text.ends_with('\n'))
}

fn auto_input_height(rows: usize, row_height: f32) -> f32 {
    input_height(rows as f32 * row_height + 16.0)
}

fn validation_message(pane: ActivePane, err: ValidationError) -> String {
    match err {
        ValidationError::EmptyInput => match pane {
            ActivePane::Encrypt => "Please enter some text to encrypt",
            ActivePane::Decrypt => "Please enter ciphertext to decrypt",
        }
        .to_string(),
        ValidationError::InvalidHexChars => {
            "Invalid hex format. Only 0-9, a-f, A-F allowed".to_string()
        }
        ValidationError::OddHexLength => "Hex string must have even length".to_string(),
    }
}
