// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery, localization and
//! settings.
//!
//! The `App` struct owns the [`GalleryController`] for the lifetime of the
//! window. Nothing is persisted: every launch starts on the first artwork.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, ImageAsset, LabelKey};
use crate::config::{self, Config};
use crate::domain::gallery::{Gallery, GalleryController};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::svg;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Gallery with resolved image handles, as shown on screen.
pub type ScreenGallery = Gallery<Option<svg::Handle>, LabelKey>;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: GalleryController<Option<svg::Handle>, LabelKey>,
    /// Light or Dark; `System` is resolved once in [`App::new`].
    theme_mode: ThemeMode,
    colors: ColorScheme,
    /// i18n key of a warning raised while starting up (e.g. unreadable config).
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.controller.current_index())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Everything `App::new` needs, prepared once before the event loop starts.
#[derive(Debug, Clone)]
pub struct Startup {
    pub lang: Option<String>,
    pub config: Config,
    pub config_warning: Option<String>,
    pub gallery: ScreenGallery,
}

impl Startup {
    /// Loads the config and resolves the catalog images.
    pub fn prepare(flags: Flags) -> Result<Self> {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let gallery = resolve_images(catalog::gallery()?);
        Ok(Self {
            lang: flags.lang,
            config,
            config_warning,
            gallery,
        })
    }
}

/// Turns embedded asset names into SVG handles. Missing assets become `None`
/// and are rendered as a placeholder.
pub fn resolve_images(gallery: Gallery<ImageAsset, LabelKey>) -> ScreenGallery {
    gallery.map_images(|asset| match catalog::image_bytes(asset) {
        Some(bytes) => Some(svg::Handle::from_memory(bytes)),
        None => {
            tracing::warn!(%asset, "artwork image is not embedded");
            None
        }
    })
}

/// Builds the window settings from the config.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.clamped_size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Translates a startup failure into the language the app would have used.
pub fn localized_error(flags: &Flags, err: &Error) -> String {
    let (config, _) = config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
    I18n::new(flags.lang.clone(), &config).tr(err.i18n_key())
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    let startup = Startup::prepare(flags)?;
    let window = window_settings(&startup.config);

    // iced 0.14 requires a `Fn` boot function; each call starts from a fresh copy
    let boot = move || (App::new(startup.clone()), Task::none());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Initializes application state on the first artwork.
    pub fn new(startup: Startup) -> Self {
        let i18n = I18n::new(startup.lang, &startup.config);
        let theme_mode = startup.config.general.theme_mode.resolve();
        tracing::debug!(?theme_mode, "resolved theme");

        Self {
            i18n,
            controller: GalleryController::new(startup.gallery),
            theme_mode,
            colors: ColorScheme::for_mode(theme_mode),
            notice: startup.config_warning,
        }
    }

    pub fn controller(&self) -> &GalleryController<Option<svg::Handle>, LabelKey> {
        &self.controller
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let artwork = self.i18n.tr(self.controller.current().title.as_str());
        format!("{artwork} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(message) => {
                // Any interaction dismisses the startup notice
                self.notice = None;
                gallery::update(message, &mut self.controller);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
