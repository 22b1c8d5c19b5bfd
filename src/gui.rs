//! the search form: two inputs, two buttons and a read-only result area.
use crate::{
    download_and_store, render_download, render_search, search_local, Book, BookError, CResult,
    Config,
};
use eframe::{App, NativeOptions};
use tokio::runtime::Runtime;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::warn;

pub const WINDOW_TITLE: &str = "Gutenberg Book Search";

/// an error waiting to be shown in a popup.
struct Popup {
    heading: &'static str,
    message: String,
}

struct BookSearchApp {
    config: Config,
    runtime: Runtime,
    title_input: String,
    url_input: String,
    result_text: String,
    pending: Option<oneshot::Receiver<CResult<Book>>>,
    popup: Option<Popup>,
}

impl BookSearchApp {
    fn new(_cc: &eframe::CreationContext<'_>, config: Config, runtime: Runtime) -> Self {
        Self {
            config,
            runtime,
            title_input: String::new(),
            url_input: String::new(),
            result_text: String::new(),
            pending: None,
            popup: None,
        }
    }

    fn show_error(&mut self, heading: &'static str, err: &BookError) {
        warn!("{}: {}", heading, err);
        self.popup = Some(Popup {
            heading,
            message: err.to_string(),
        });
    }

    fn search_local(&mut self) {
        match search_local(&self.config, &self.title_input) {
            Ok(outcome) => self.result_text = render_search(&outcome),
            Err(e @ BookError::Input(_)) => self.show_error("Input Error", &e),
            Err(e) => self.show_error("Database Error", &e),
        }
    }

    fn search_url(&mut self) {
        let url = self.url_input.trim().to_string();
        if url.is_empty() {
            self.show_error("Input Error", &BookError::Input("Please enter a URL.".into()));
            return;
        }
        let (snd, rcv) = oneshot::channel();
        let config = self.config.clone();
        self.runtime.spawn(async move {
            let result = download_and_store(config, &url).await;
            snd.send(result).unwrap_or(());
        });
        self.pending = Some(rcv);
    }

    fn poll_pending(&mut self) {
        let Some(rcv) = self.pending.as_mut() else {
            return;
        };
        let result = match rcv.try_recv() {
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(BookError::Gui("download task stopped".into())),
            Ok(result) => result,
        };
        self.pending = None;
        match result {
            Ok(book) => self.result_text = render_download(&book),
            Err(e) => self.show_error("Download Error", &e),
        }
    }

    fn popup_window(&mut self, ctx: &egui::Context) {
        let mut close = false;
        if let Some(popup) = &self.popup {
            egui::Window::new(popup.heading)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(popup.message.as_str());
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
        }
        if close {
            self.popup = None;
        }
    }
}

impl App for BookSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        let busy = self.pending.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label("Search by Book Title:");
                ui.add(egui::TextEdit::singleline(&mut self.title_input).desired_width(400.0));
                if ui.button("Search Local DB").clicked() {
                    self.search_local();
                }
                ui.add_space(8.0);

                ui.label("Add Book by Gutenberg URL:");
                ui.add(egui::TextEdit::singleline(&mut self.url_input).desired_width(400.0));
                if ui
                    .add_enabled(!busy, egui::Button::new("Download and Store"))
                    .clicked()
                {
                    self.search_url();
                }
                if busy {
                    ui.spinner();
                }
                ui.add_space(8.0);

                egui::ScrollArea::vertical()
                    .id_source("result_scroll")
                    .show(ui, |ui| {
                        let mut s_display = self.result_text.clone();
                        ui.add(
                            egui::TextEdit::multiline(&mut s_display)
                                .font(egui::TextStyle::Monospace)
                                .desired_rows(15)
                                .desired_width(480.0)
                                .interactive(false),
                        );
                    });
            });
        });

        self.popup_window(ctx);
        if self.pending.is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

/// opens the window and blocks until it is closed.
pub fn run_gui(config: Config) -> CResult<()> {
    let runtime = Runtime::new()?;
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 520.0])
            .with_min_inner_size([420.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Box::new(BookSearchApp::new(cc, config, runtime))),
    )
    .map_err(|e| BookError::Gui(e.to_string()))
}
