use iced::keyboard::{self, key, Key, Modifiers};
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{time, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use dermabar_gallery::config::{Layout, ThemeChoice, ViewerConfig};
use dermabar_gallery::gallery::catalog::{self, Catalog, ImportResult};
use dermabar_gallery::gallery::loader::{self, LoadedPair};
use dermabar_gallery::gallery::{Bounds, ComparisonSlider, PointerEvent};
use dermabar_gallery::motion::{self, Granularity, Motion, Token};

mod ui;

const HEADING: &str = "Real Results, Real Transformations";

/// Divider step for Shift+Arrow, in percent
const NUDGE_STEP: f32 = 5.0;

/// Frame interval while the heading reveal runs
const FRAME: Duration = Duration::from_millis(16);

/// Load state of one item's image pair
#[derive(Debug, Clone)]
pub enum PairSlot {
    Loading,
    Ready(LoadedPair),
    Failed(String),
}

/// Main application state
struct Gallery {
    config: ViewerConfig,
    /// The comparison widget's state
    slider: ComparisonSlider,
    /// Decoded pairs by item id
    pairs: HashMap<u32, PairSlot>,
    motion: Motion,
    heading: Vec<Token>,
    /// Last frame time seen by the reveal
    now: Instant,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Normalized mouse/touch input from the comparison canvas
    Pointer(PointerEvent, Bounds),
    Next,
    Previous,
    /// Pagination dot clicked
    JumpTo(usize),
    /// Move the divider by a number of percentage points
    Nudge(f32),
    /// Background decode of an item's pair finished
    PairLoaded(u32, Result<LoadedPair, String>),
    /// User clicked "Open Catalog"
    OpenCatalog,
    /// User clicked "Save Catalog"
    SaveCatalog,
    /// User clicked "Import Folder"
    ImportFolder,
    /// Background folder import completed
    ImportComplete(Result<ImportResult, String>),
    ToggleLayout,
    ToggleTheme,
    Tick(Instant),
}

impl Gallery {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = ViewerConfig::load_or_default();

        let (catalog, status) = match &config.catalog {
            Some(path) => match Catalog::load(path) {
                Ok(catalog) => {
                    let status = format!("Ready. {} transformations from {}.", catalog.len(), path.display());
                    (catalog, status)
                }
                Err(e) => {
                    tracing::warn!("⚠️  Could not open catalog {}: {}", path.display(), e);
                    (Catalog::builtin(), format!("Could not open {} ({}). Showing the showcase.", path.display(), e))
                }
            },
            None => (Catalog::builtin(), "Showing the built-in showcase.".to_string()),
        };

        // Reveal sequencing is set up once here and owned by the app
        let now = Instant::now();
        let mut motion = Motion::init(config.motion);
        motion.start(now);

        tracing::info!("🎨 Gallery initialized with {} transformations", catalog.len());

        let mut gallery = Gallery {
            config,
            slider: ComparisonSlider::new(catalog.into_items()),
            pairs: HashMap::new(),
            motion,
            heading: motion::split(HEADING, Granularity::Words),
            now,
            status,
        };
        let task = gallery.request_visible();

        (gallery, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pointer(event, bounds) => {
                self.slider.handle(event, bounds);
                Task::none()
            }
            Message::Next => {
                self.slider.next();
                self.request_visible()
            }
            Message::Previous => {
                self.slider.previous();
                self.request_visible()
            }
            Message::JumpTo(index) => {
                if let Err(e) = self.slider.jump_to(index) {
                    tracing::error!("{}", e);
                }
                self.request_visible()
            }
            Message::Nudge(delta) => {
                self.slider.nudge(delta);
                Task::none()
            }
            Message::PairLoaded(id, result) => {
                let slot = match result {
                    Ok(pair) => PairSlot::Ready(pair),
                    Err(e) => {
                        tracing::warn!("⚠️  Could not load pair {}: {}", id, e);
                        PairSlot::Failed(e)
                    }
                };
                // Evicted while decoding: the result is no longer wanted
                match self.pairs.get_mut(&id) {
                    Some(entry) => *entry = slot,
                    None => tracing::debug!("Dropping decoded pair {} (no longer visible)", id),
                }
                Task::none()
            }
            Message::OpenCatalog => {
                let file = FileDialog::new()
                    .set_title("Open Gallery Catalog")
                    .add_filter("Catalog", &["json"])
                    .pick_file();

                let Some(path) = file else {
                    return Task::none();
                };

                match Catalog::load(&path) {
                    Ok(catalog) => {
                        self.status = format!("✅ Opened {} transformations from {}.", catalog.len(), path.display());
                        self.config.catalog = Some(path);
                        self.save_config();
                        self.set_catalog(catalog)
                    }
                    Err(e) => {
                        self.status = format!("⚠️  Could not open {}: {}", path.display(), e);
                        Task::none()
                    }
                }
            }
            Message::SaveCatalog => {
                let file = FileDialog::new()
                    .set_title("Save Gallery Catalog")
                    .add_filter("Catalog", &["json"])
                    .set_file_name("catalog.json")
                    .save_file();

                if let Some(path) = file {
                    let saved = Catalog::new(self.slider.items().to_vec()).and_then(|c| c.save(&path));
                    self.status = match saved {
                        Ok(()) => {
                            self.config.catalog = Some(path.clone());
                            self.save_config();
                            format!("💾 Saved catalog to {}.", path.display())
                        }
                        Err(e) => format!("⚠️  Could not save catalog: {}", e),
                    };
                }
                Task::none()
            }
            Message::ImportFolder => {
                // Show the native folder picker dialog
                let folder = FileDialog::new()
                    .set_title("Select Folder with Before/After Photos")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    self.status = format!("Importing from {}...", folder_path.display());
                    return Task::perform(
                        catalog::import_folder_async(folder_path),
                        Message::ImportComplete,
                    );
                }

                Task::none()
            }
            Message::ImportComplete(Ok(result)) => {
                self.status = format!(
                    "✅ Import complete! Found {} pairs, skipped {} unpaired images.",
                    result.paired_count, result.skipped_count
                );
                if result.catalog.is_empty() {
                    return Task::none();
                }
                // An imported folder is not a file yet; "Save Catalog" makes it one
                self.config.catalog = None;
                self.save_config();
                self.set_catalog(result.catalog)
            }
            Message::ImportComplete(Err(e)) => {
                self.status = format!("⚠️  Import failed: {}", e);
                Task::none()
            }
            Message::ToggleLayout => {
                self.config.layout = self.config.layout.toggled();
                self.save_config();
                Task::none()
            }
            Message::ToggleTheme => {
                self.config.theme = self.config.theme.toggled();
                self.save_config();
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let slot = self.slider.current().and_then(|item| self.pairs.get(&item.id));

        let layout_label = match self.config.layout {
            Layout::Reveal => "Side by Side",
            Layout::SideBySide => "Slider",
        };
        let theme_label = match self.config.theme {
            ThemeChoice::Light => "Dark Theme",
            ThemeChoice::Dark => "Light Theme",
        };

        let toolbar = row![
            button("Open Catalog").on_press(Message::OpenCatalog).padding(10),
            button("Import Folder").on_press(Message::ImportFolder).padding(10),
            button("Save Catalog").on_press(Message::SaveCatalog).padding(10),
            button(layout_label).on_press(Message::ToggleLayout).padding(10),
            button(theme_label).on_press(Message::ToggleTheme).padding(10),
        ]
        .spacing(10);

        let content: Column<Message> = column![
            ui::gallery::heading(&self.heading, &self.motion, self.now),
            text("See the difference our expert treatments make. Every client is unique, and so are their results.")
                .size(18),
            ui::gallery::comparison(&self.slider, slot, self.config.layout),
            ui::gallery::disclaimer(),
            toolbar,
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .max_width(1200)
        .align_x(Alignment::Center);

        scrollable(container(content).width(Length::Fill).center_x(Length::Fill)).into()
    }

    fn theme(&self) -> Theme {
        match self.config.theme {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(handle_key);

        if self.motion.is_running(self.heading.len(), self.now) {
            Subscription::batch([keys, time::every(FRAME).map(Message::Tick)])
        } else {
            keys
        }
    }

    /// Start decoding the shown item and the next one, unless already cached.
    /// Pairs for any other item are dropped.
    fn request_visible(&mut self) -> Task<Message> {
        let wanted = visible_ids(&self.slider);
        retain_pairs(&mut self.pairs, &wanted);

        let tasks: Vec<_> = wanted
            .into_iter()
            .filter_map(|id| {
                if self.pairs.contains_key(&id) {
                    return None;
                }
                let item = self.slider.items().iter().find(|item| item.id == id)?.clone();
                self.pairs.insert(id, PairSlot::Loading);
                Some(Task::perform(loader::load_pair(item), move |result| {
                    Message::PairLoaded(id, result)
                }))
            })
            .collect();

        Task::batch(tasks)
    }

    fn set_catalog(&mut self, catalog: Catalog) -> Task<Message> {
        self.pairs.clear();
        self.slider.replace_items(catalog.into_items());
        self.request_visible()
    }

    fn save_config(&self) {
        if let Err(e) = self.config.persist() {
            tracing::warn!("⚠️  Could not save viewer config: {}", e);
        }
    }
}

/// Ids of the shown item and the one after it (prefetch)
fn visible_ids(slider: &ComparisonSlider) -> Vec<u32> {
    let len = slider.len();
    let current = slider.active_index();
    let mut ids: Vec<u32> = slider.current().map(|item| item.id).into_iter().collect();
    if len > 1 {
        ids.push(slider.items()[(current + 1) % len].id);
    }
    ids
}

/// Keep only the decoded pairs in `wanted`
fn retain_pairs(pairs: &mut HashMap<u32, PairSlot>, wanted: &[u32]) {
    let before = pairs.len();
    pairs.retain(|id, _| wanted.contains(id));
    if pairs.len() < before {
        tracing::debug!("Evicted {} decoded pairs", before - pairs.len());
    }
}

fn handle_key(key: Key, modifiers: Modifiers) -> Option<Message> {
    match key.as_ref() {
        Key::Named(key::Named::ArrowLeft) if modifiers.shift() => Some(Message::Nudge(-NUDGE_STEP)),
        Key::Named(key::Named::ArrowRight) if modifiers.shift() => Some(Message::Nudge(NUDGE_STEP)),
        Key::Named(key::Named::ArrowLeft) => Some(Message::Previous),
        Key::Named(key::Named::ArrowRight) => Some(Message::Next),
        Key::Named(key::Named::Home) => Some(Message::JumpTo(0)),
        _ => None,
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,dermabar_gallery=debug"));
    fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    iced::application("Dermabar Results Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .subscription(Gallery::subscription)
        .centered()
        .run_with(Gallery::new)
}
