use iced::widget::{row, stack};
use iced::{event, window, Element, Event, Subscription, Task, Theme};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, error, info, warn};

mod api;
mod config;
mod error;
mod logging;
mod state;
mod ui;
mod upload;

use api::DetectionBackend;
use state::data::{DiagnosisResult, PickedFile, Preview};
use state::guide::Onboarding;
use state::settings::{FlagStore, MemoryStore, SettingsStore};
use state::workflow::{Completion, DetectionWorkflow, RequestToken};

/// How long a notification stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Top-level screens reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Detection,
}

/// A non-blocking notification banner
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Main application state
struct PlantCare {
    screen: Screen,
    /// Upload, analysis and result for the detection screen
    workflow: DetectionWorkflow,
    /// Onboarding guide and the store holding its "shown" flag
    onboarding: Onboarding<Box<dyn FlagStore>>,
    /// Where analyses go; Err holds the reason the endpoint is unusable
    backend: Result<DetectionBackend, String>,
    /// A file is being dragged over the window
    drop_hover: bool,
    /// The current drag gesture already delivered its file
    drop_taken: bool,
    toasts: Vec<Toast>,
    next_toast_id: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),

    /// User clicked the upload area
    PickImage,
    /// File dialog closed (None when cancelled)
    ImagePicked(Option<PickedFile>),
    FileHovered(bool),
    FileDropped(PathBuf),
    /// A dropped file was read from disk
    FileRead(Result<PickedFile, String>),
    /// Background preview derivation finished
    PreviewReady(RequestToken, Result<Preview, String>),
    ClearImage,

    /// User clicked "Analisis Sekarang"
    Analyze,
    /// Detection call finished
    AnalysisComplete(RequestToken, Result<DiagnosisResult, String>),

    GuideShow,
    GuideNext,
    GuidePrev,
    GuideSkip,
    GuideDismiss,

    DismissToast(u64),
}

impl PlantCare {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = config::load();

        let store: Box<dyn FlagStore> = match SettingsStore::open_default() {
            Ok(store) => Box::new(store),
            Err(e) => {
                warn!("{}; onboarding progress will not be saved", e);
                Box::new(MemoryStore::default())
            }
        };

        let backend = DetectionBackend::from_settings(&config.api).map_err(|e| {
            error!("{}", e);
            e.to_string()
        });
        if let Ok(backend) = &backend {
            info!("Detection backend: {}", backend.describe());
        }

        (PlantCare::with_parts(store, backend), Task::none())
    }

    /// Build the initial state around an already opened store and backend
    fn with_parts(store: Box<dyn FlagStore>, backend: Result<DetectionBackend, String>) -> Self {
        PlantCare {
            screen: Screen::Dashboard,
            workflow: DetectionWorkflow::new(),
            onboarding: Onboarding::new(store),
            backend,
            drop_hover: false,
            drop_taken: false,
            toasts: Vec::new(),
            next_toast_id: 0,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(screen) => {
                if screen == Screen::Detection && self.screen != Screen::Detection {
                    self.onboarding.on_screen_visit();
                }
                self.screen = screen;
                Task::none()
            }
            Message::PickImage => Task::perform(upload::pick_image(), Message::ImagePicked),
            Message::ImagePicked(Some(file)) => self.select(file),
            Message::ImagePicked(None) => Task::none(),
            Message::FileRead(Err(e)) => {
                warn!("Could not load image: {}", e);
                self.notify(e)
            }
            Message::FileHovered(hovering) => {
                // winit reports every hovered file before the first drop
                self.drop_hover = hovering;
                self.drop_taken = false;
                Task::none()
            }
            Message::FileDropped(path) => {
                if self.accept_drop(&path) {
                    Task::perform(upload::read_dropped(path), Message::FileRead)
                } else {
                    Task::none()
                }
            }
            Message::FileRead(Ok(file)) => self.select(file),
            Message::PreviewReady(token, outcome) => {
                let preview = outcome.unwrap_or_else(|e| {
                    error!("Preview derivation failed: {}", e);
                    Preview {
                        handle: iced::widget::image::Handle::from_bytes(Vec::new()),
                        dimensions: None,
                    }
                });
                self.workflow.preview_ready(token, preview);
                Task::none()
            }
            Message::ClearImage => {
                self.workflow.clear();
                Task::none()
            }
            Message::Analyze => {
                let Some(request) = self.workflow.analyze() else {
                    return Task::none();
                };
                let token = request.token;

                match &self.backend {
                    Ok(backend) => {
                        let backend = backend.clone();
                        Task::perform(
                            async move {
                                backend
                                    .detect(request.file)
                                    .await
                                    .map_err(|e| e.to_string())
                            },
                            move |outcome| Message::AnalysisComplete(token, outcome),
                        )
                    }
                    Err(reason) => Task::done(Message::AnalysisComplete(token, Err(reason.clone()))),
                }
            }
            Message::AnalysisComplete(token, outcome) => match self.workflow.finish(token, outcome) {
                Completion::Failed(notification) => self.notify(notification.message),
                Completion::Diagnosed | Completion::Stale => Task::none(),
            },
            Message::GuideShow => {
                self.onboarding.show();
                Task::none()
            }
            Message::GuideNext => {
                self.onboarding.next();
                Task::none()
            }
            Message::GuidePrev => {
                self.onboarding.prev();
                Task::none()
            }
            Message::GuideSkip => {
                self.onboarding.skip();
                Task::none()
            }
            Message::GuideDismiss => {
                self.onboarding.dismiss();
                Task::none()
            }
            Message::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
                Task::none()
            }
        }
    }

    /// Only the first file of a drag gesture is considered, and only on the
    /// detection screen when it looks like an image
    fn accept_drop(&mut self, path: &Path) -> bool {
        self.drop_hover = false;
        if std::mem::replace(&mut self.drop_taken, true) {
            debug!("Ignoring extra dropped file {}", path.display());
            return false;
        }
        if self.screen != Screen::Detection {
            return false;
        }
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        if !upload::looks_like_image(&name) {
            info!("Ignoring dropped non-image file {}", path.display());
            return false;
        }
        true
    }

    /// Start a selection and derive its preview in the background
    fn select(&mut self, file: PickedFile) -> Task<Message> {
        let bytes = file.bytes.clone();
        let token = self.workflow.select(file);
        Task::perform(upload::preview::derive_preview(bytes), move |preview| {
            Message::PreviewReady(token, preview)
        })
    }

    /// Show a banner and schedule its removal
    fn notify(&mut self, message: impl Into<String>) -> Task<Message> {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
        });
        debug!("Toast {} shown", id);

        Task::perform(
            async move { tokio::time::sleep(TOAST_DURATION).await },
            move |_| Message::DismissToast(id),
        )
    }

    /// The guide dialog is drawn over the whole window
    fn shows_guide(&self) -> bool {
        self.screen == Screen::Detection && self.onboarding.guide().is_open()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.screen {
            Screen::Dashboard => ui::dashboard::view(),
            Screen::Detection => {
                let server = match &self.backend {
                    Ok(backend) => backend.describe(),
                    Err(reason) => reason.clone(),
                };
                ui::detection::view(&self.workflow, self.drop_hover, server)
            }
        };

        let mut body: Element<Message> = row![ui::sidebar(self.screen), page].into();

        // The modal covers the sidebar too, so the screen cannot change under it
        if self.shows_guide() {
            body = ui::modal(
                body,
                ui::guide::view(self.onboarding.guide()),
                Message::GuideDismiss,
            );
        }

        if self.toasts.is_empty() {
            body
        } else {
            stack![body, ui::toasts(&self.toasts)].into()
        }
    }

    /// Listen for files dragged onto the window
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered(true)),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHovered(false)),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        ui::style::theme()
    }
}

fn main() -> iced::Result {
    if let Err(e) = logging::init() {
        eprintln!("PlantCare: {}", e);
    }

    iced::application("PlantCare AI", PlantCare::update, PlantCare::view)
        .subscription(PlantCare::subscription)
        .theme(PlantCare::theme)
        .window_size((1200.0, 820.0))
        .centered()
        .run_with(PlantCare::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::settings::FlagStore;
    use state::workflow::ANALYSIS_FAILED;

    fn app(backend: Result<DetectionBackend, String>) -> PlantCare {
        PlantCare::with_parts(Box::new(MemoryStore::default()), backend)
    }

    fn unreachable_backend() -> Result<DetectionBackend, String> {
        Err("Invalid detection endpoint ftp://x: unsupported scheme".to_string())
    }

    fn leaf(name: &str) -> PickedFile {
        PickedFile {
            name: name.to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    fn preview() -> Preview {
        Preview {
            handle: iced::widget::image::Handle::from_bytes(Vec::new()),
            dimensions: Some((4, 4)),
        }
    }

    /// Select `name` and land its preview, leaving the workflow ready
    fn ready(app: &mut PlantCare, name: &str) {
        let token = app.workflow.select(leaf(name));
        let _ = app.update(Message::PreviewReady(token, Ok(preview())));
        assert!(app.workflow.can_analyze());
    }

    #[test]
    fn test_failed_analysis_shows_one_toast() {
        let mut app = app(unreachable_backend());
        ready(&mut app, "daun.jpg");

        let _ = app.update(Message::Analyze);
        let token = app.workflow.in_flight().unwrap();
        let _ = app.update(Message::AnalysisComplete(token, Err("refused".to_string())));

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, ANALYSIS_FAILED);
        assert!(app.workflow.selected().is_some());
        assert!(!app.workflow.is_analyzing());
    }

    #[test]
    fn test_stale_completion_shows_no_toast() {
        let mut app = app(Ok(DetectionBackend::Demo));
        ready(&mut app, "daun.jpg");

        let _ = app.update(Message::Analyze);
        let stale = app.workflow.in_flight().unwrap();
        let _ = app.update(Message::FileRead(Ok(leaf("tomat.png"))));
        let _ = app.update(Message::AnalysisComplete(stale, Err("refused".to_string())));

        assert!(app.toasts.is_empty());
        assert_eq!(app.workflow.pending_name(), Some("tomat.png"));
    }

    #[test]
    fn test_dismiss_toast_removes_banner() {
        let mut app = app(unreachable_backend());
        let _ = app.update(Message::FileRead(Err("Gagal membaca a.jpg".to_string())));
        let _ = app.update(Message::FileRead(Err("Gagal membaca b.jpg".to_string())));
        let first = app.toasts[0].id;

        let _ = app.update(Message::DismissToast(first));

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "Gagal membaca b.jpg");
    }

    #[test]
    fn test_entering_detection_opens_guide_until_skipped() {
        let mut app = app(unreachable_backend());

        let _ = app.update(Message::Navigate(Screen::Detection));
        assert!(app.shows_guide());
        assert_eq!(app.onboarding.guide().step_index(), 0);

        let _ = app.update(Message::GuideSkip);
        assert!(!app.onboarding.guide().is_open());

        let _ = app.update(Message::Navigate(Screen::Dashboard));
        let _ = app.update(Message::Navigate(Screen::Detection));
        assert!(!app.shows_guide());
    }

    #[test]
    fn test_guide_opened_from_dashboard_is_not_drawn() {
        let mut app = app(unreachable_backend());
        let _ = app.update(Message::GuideShow);

        assert!(app.onboarding.guide().is_open());
        assert!(!app.shows_guide());
    }

    #[test]
    fn test_guide_checked_only_when_entering_detection() {
        let mut app = app(unreachable_backend());
        let _ = app.update(Message::Navigate(Screen::Detection));
        let _ = app.update(Message::GuideNext);
        let _ = app.update(Message::GuideDismiss);

        // Re-selecting the current screen is not a visit
        let _ = app.update(Message::Navigate(Screen::Detection));
        assert!(!app.onboarding.guide().is_open());

        let _ = app.update(Message::Navigate(Screen::Dashboard));
        assert!(!app.onboarding.guide().is_open());
    }

    #[test]
    fn test_drop_outside_detection_is_ignored() {
        let mut app = app(unreachable_backend());
        let _ = app.update(Message::FileHovered(true));

        assert!(!app.accept_drop(Path::new("/tmp/daun.jpg")));
        assert!(!app.drop_hover);
    }

    #[test]
    fn test_only_first_dropped_file_counts() {
        let mut app = app(unreachable_backend());
        app.screen = Screen::Detection;

        let _ = app.update(Message::FileHovered(true));
        assert!(app.accept_drop(Path::new("/tmp/daun.jpg")));
        assert!(!app.accept_drop(Path::new("/tmp/tomat.png")));

        // A new gesture starts with a hover
        let _ = app.update(Message::FileHovered(true));
        assert!(app.accept_drop(Path::new("/tmp/tomat.png")));
    }

    #[test]
    fn test_non_image_drop_is_ignored() {
        let mut app = app(unreachable_backend());
        app.screen = Screen::Detection;

        let _ = app.update(Message::FileHovered(true));
        assert!(!app.accept_drop(Path::new("/tmp/catatan.txt")));
        // The gesture's first file was not an image, so the rest are skipped
        assert!(!app.accept_drop(Path::new("/tmp/daun.jpg")));
    }

    #[test]
    fn test_flagged_store_keeps_guide_closed() {
        let mut store = MemoryStore::default();
        store.set_flag(state::guide::GUIDE_SHOWN_KEY, true).unwrap();
        let mut app = PlantCare::with_parts(Box::new(store), unreachable_backend());

        let _ = app.update(Message::Navigate(Screen::Detection));

        assert!(!app.onboarding.guide().is_open());
    }
}
