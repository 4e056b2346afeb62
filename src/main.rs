use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length, Task, Theme};
use rfd::FileDialog;

mod config;
mod media;
mod rater;
mod state;
mod ui;

use config::AppConfig;
use media::{DecodedImage, LoadError};
use rater::{ProcessRater, Rater, Verdict};
use state::history::History;
use state::rating::{Generation, RatingState};

/// Main application state
struct SafeView {
    /// The location typed into the box (path, file:// path, or URL)
    location: String,
    /// The currently displayed image
    image: Option<DecodedImage>,
    /// The rating display state machine
    rating: RatingState,
    /// Generation of the most recent rating request
    generation: Generation,
    /// The external classifier to launch
    rater: ProcessRater,
    /// The rating history database
    history: History,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the location box
    LocationChanged(String),
    /// User pressed Enter or clicked "Load"
    Submit,
    /// User clicked "Browse…"
    BrowseImage,
    /// Background load finished (fetch + decode)
    ImageLoaded(Result<DecodedImage, LoadError>),
    /// A rater came back for some generation
    RatingComplete {
        generation: Generation,
        verdict: Verdict,
    },
}

impl SafeView {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();

        // Write a template config on first run so the rater is discoverable
        if !AppConfig::config_path().exists() {
            if let Err(e) = config.save() {
                eprintln!("⚠️  Could not write default config: {}", e);
            }
        }

        let rater = ProcessRater::new(config.rater_program.clone(), config.rater_args.clone());

        // If this fails, we panic because the app cannot function without its database
        let history = History::new()
            .expect("Failed to initialize rating history. Check permissions and disk space.");

        let rating_count = history.rating_count().unwrap_or(0);
        println!(
            "🛡️  SafeView initialized, rater '{}', {} ratings in {}",
            rater.program(),
            rating_count,
            history.path().display()
        );

        if let Some(last) = history.recent(1).unwrap_or_default().first() {
            println!("🕘 Last verdict was '{}' for {}", last.verdict, last.path);
        }

        let status = format!("Ready. {} ratings recorded.", rating_count);

        (
            SafeView {
                location: String::new(),
                image: None,
                rating: RatingState::Idle,
                generation: 0,
                rater,
                history,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LocationChanged(value) => {
                self.location = value;
                Task::none()
            }

            Message::Submit => self.submit(),

            Message::BrowseImage => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Select an Image")
                    .add_filter("Images", &["jpg", "jpeg", "png", "gif", "bmp", "webp"])
                    .pick_file();

                if let Some(path) = picked {
                    self.location = path.to_string_lossy().to_string();
                    return self.submit();
                }

                Task::none()
            }

            Message::ImageLoaded(Ok(image)) => {
                self.status = format!(
                    "{} ({}x{})",
                    image.path.display(),
                    image.width,
                    image.height
                );

                // The pending placeholder must be visible before the rater is
                // launched, so the state flips here, in the update cycle
                self.generation += 1;
                let generation = self.generation;
                self.rating.begin(generation);

                let rater = self.rater.clone();
                let path = image.path.clone();
                self.image = Some(image);

                Task::perform(async move { rater.rate(&path).await }, move |verdict| {
                    Message::RatingComplete {
                        generation,
                        verdict,
                    }
                })
            }

            Message::ImageLoaded(Err(e)) => {
                eprintln!("⚠️  Load failed: {}", e);
                self.image = None;
                self.rating = RatingState::Idle;
                self.status = format!("⚠️  {}", e);
                Task::none()
            }

            Message::RatingComplete { generation, verdict } => {
                if self.rating.complete(generation, verdict.clone()) {
                    println!("✅ Rating complete: {}", verdict);

                    if let Some(image) = &self.image {
                        if let Err(e) = self.history.record(&image.path, &verdict) {
                            eprintln!("⚠️  Could not record rating: {}", e);
                        }
                    }
                } else {
                    // A newer submission superseded this one while its rater
                    // was still running
                    println!("⏳ Discarded stale rating for generation {}", generation);
                }

                Task::none()
            }
        }
    }

    /// Kick off a load for whatever is in the location box
    fn submit(&mut self) -> Task<Message> {
        let location = self.location.trim().to_string();
        if location.is_empty() {
            return Task::none();
        }

        self.status = format!("Loading {} ...", location);

        Task::perform(media::load(location), Message::ImageLoaded)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let controls = row![
            text_input("Image path or http:// URL", &self.location)
                .on_input(Message::LocationChanged)
                .on_submit(Message::Submit)
                .padding(8),
            button("Load").on_press(Message::Submit).padding(8),
            button("Browse…").on_press(Message::BrowseImage).padding(8),
        ]
        .spacing(8);

        let content = column![
            controls,
            ui::viewer::image_view(self.image.as_ref()),
            ui::viewer::rating_bar(&self.rating),
            text(&self.status).size(14),
        ]
        .spacing(12)
        .padding(12);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("SafeView", SafeView::update, SafeView::view)
        .theme(SafeView::theme)
        .window_size((720.0, 560.0))
        .centered()
        .run_with(SafeView::new)
}
