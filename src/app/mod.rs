// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the compare panels.
//!
//! The `App` owns one [`ComparePanel`] per compare post, the localization
//! bundle and the diagnostics collector. It routes panel messages by index
//! and turns panel effects into diagnostic events.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Source};

use crate::config::{self, ThemeMode};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector};
use crate::domain::compare::RevealFraction;
use crate::i18n::fluent::I18n;
use crate::media::load_feed_async;
use crate::ui::compare::{ComparePanel, PanelSettings};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    panels: Vec<ComparePanel>,
    settings: PanelSettings,
    theme_mode: ThemeMode,
    diagnostics: DiagnosticsCollector,
    diagnostics_out: Option<PathBuf>,
    /// Localized startup problem (config or feed), shown above the panels.
    notice: Option<String>,
    /// True while the feed file is being read.
    feed_pending: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("panels", &self.panels.len())
            .field("feed_pending", &self.feed_pending)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings. Close requests are intercepted so the
/// diagnostics report can be written first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and localization, builds panels for a CLI image pair and
    /// kicks off feed or image loading.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let settings = PanelSettings {
            initial_fraction: flags
                .fraction
                .map_or_else(|| config.compare.reveal_fraction(), RevealFraction::new),
            keyboard_steps: config.compare.keyboard_steps(),
        };

        let mut diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());
        let notice = config_warning.map(|key| {
            diagnostics.log_warning(format!("config: {key}"));
            i18n.tr(&key)
        });

        let mut app = App {
            i18n,
            panels: Vec::new(),
            settings,
            theme_mode: config.general.theme_mode,
            diagnostics,
            diagnostics_out: flags.diagnostics_out,
            notice,
            feed_pending: false,
        };

        let task = match flags.source {
            Source::None => Task::none(),
            Source::Pair(pair) => {
                app.panels.push(ComparePanel::from_pair(pair, app.settings));
                app.load_all_images()
            }
            Source::Feed(path) => {
                app.feed_pending = true;
                let handle = app.diagnostics.handle();
                Task::perform(
                    async move {
                        let result = load_feed_async(path).await;
                        if let Ok(selection) = &result {
                            handle.log_state(AppStateEvent::FeedLoaded {
                                compare_posts: selection.posts.len(),
                            });
                        }
                        result
                    },
                    Message::FeedLoaded,
                )
            }
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.panels.as_slice() {
            [only] => match only.caption() {
                Some(caption) => {
                    self.i18n
                        .tr_with_text("window-title-with-caption", "caption", caption)
                }
                None => self.i18n.tr("window-title"),
            },
            _ => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Starts decoding the images of every panel.
    fn load_all_images(&self) -> Task<Message> {
        Task::batch(self.panels.iter().enumerate().map(|(index, panel)| {
            panel
                .load_images()
                .map(move |message| Message::Compare { index, message })
        }))
    }
}
