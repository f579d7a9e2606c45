// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the viewer window.
//!
//! The `App` owns the [`ViewerWindow`] and turns the effects it reports
//! (quit, resize, navigate, fullscreen) into iced tasks. Decoding and file
//! queries run off the UI thread; each load carries a generation number so
//! results for a file the user already navigated away from are dropped.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::media::file_info::load_file_info_async;
use crate::media::image::load_image_async;
use crate::media::FileInfo;
use crate::navigation::ImageList;
use crate::ui::viewer_window::{Effect, ViewerWindow, WindowOptions};
use iced::{window, Color, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root iced application state.
pub struct App {
    pub i18n: I18n,
    window: ViewerWindow,
    window_id: Option<window::Id>,
    /// Resize requested before the native window reported its id.
    pending_resize: Option<Size>,
    images: ImageList,
    current: Option<PathBuf>,
    file_info: Option<FileInfo>,
    fullscreen: bool,
    load_generation: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.current)
            .field("fullscreen", &self.fullscreen)
            .field("load_generation", &self.load_generation)
            .finish()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let config = config::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config, using defaults: {}", err);
        Config::default()
    });
    let settings = ViewerWindow::new(WindowOptions::from_config(&config)).window_settings();

    let boot = move || App::new(flags.clone(), &config);

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .style(App::style)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let mut window = ViewerWindow::new(WindowOptions::from_config(config));
        window.show_all();

        let mut app = App {
            i18n: I18n::new(flags.lang, config),
            window,
            window_id: None,
            pending_resize: None,
            images: ImageList::new(),
            current: None,
            file_info: None,
            fullscreen: false,
            load_generation: 0,
        };

        let task = match flags.file_path {
            Some(path) => app.open(path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        if let Some(info) = &self.file_info {
            return info.title(&self.i18n);
        }

        self.current
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.i18n.tr("window-title"))
    }

    fn style(&self, _theme: &Theme) -> iced::theme::Style {
        // The stage paints its own translucent background.
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: Color::WHITE,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Window(message) => {
                let effect = self.window.handle(message, Instant::now());
                self.apply(effect)
            }
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                match self.pending_resize.take() {
                    Some(size) => window::resize(id, size),
                    None => Task::none(),
                }
            }
            Message::ImageLoaded { generation, result } => {
                if generation != self.load_generation {
                    log::debug!("dropping stale image load #{generation}");
                    return Task::none();
                }
                let effect = match result {
                    Ok(data) => self.window.set_file(data),
                    Err(err) => self.window.set_load_error(err),
                };
                self.apply(effect)
            }
            Message::FileInfoLoaded { generation, result } => {
                if generation == self.load_generation {
                    self.file_info = result
                        .map_err(|err| log::warn!("Failed to read file info: {}", err))
                        .ok();
                }
                Task::none()
            }
            Message::FileDropped(path) => self.open(path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.window.view(&self.i18n).map(Message::Window)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(
                self.window.is_animating(),
                self.window.has_pending_timers(),
            ),
        ])
    }

    fn apply(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Quit => iced::exit(),
            Effect::Resize(size) => self.resize(size),
            Effect::Navigate(direction) => match self.images.step(direction) {
                Some(path) => self.load(path),
                None => Task::none(),
            },
            Effect::ToggleFullscreen => self.toggle_fullscreen(),
        }
    }

    fn resize(&mut self, size: Size) -> Task<Message> {
        // Applied again when leaving fullscreen.
        if self.fullscreen {
            return Task::none();
        }

        log::debug!("resizing window to {}x{}", size.width, size.height);
        match self.window_id {
            Some(id) => window::resize(id, size),
            None => {
                self.pending_resize = Some(size);
                Task::none()
            }
        }
    }

    fn toggle_fullscreen(&mut self) -> Task<Message> {
        let Some(id) = self.window_id else {
            return Task::none();
        };

        self.fullscreen = !self.fullscreen;
        if self.fullscreen {
            window::set_mode(id, window::Mode::Fullscreen)
        } else {
            window::set_mode(id, window::Mode::Windowed)
                .chain(window::resize(id, self.window.fit_size()))
        }
    }

    /// Shows `path` and makes its directory the navigation list.
    fn open(&mut self, path: PathBuf) -> Task<Message> {
        self.images = ImageList::scan_directory(&path).unwrap_or_else(|err| {
            log::warn!("Failed to scan directory of {}: {}", path.display(), err);
            ImageList::new()
        });
        self.load(path)
    }

    fn load(&mut self, path: PathBuf) -> Task<Message> {
        self.load_generation += 1;
        let generation = self.load_generation;
        self.current = Some(path.clone());
        self.file_info = None;

        let image = Task::perform(load_image_async(path.clone()), move |result| {
            Message::ImageLoaded { generation, result }
        });
        let info = Task::perform(load_file_info_async(path), move |result| {
            Message::FileInfoLoaded { generation, result }
        });

        Task::batch([image, info])
    }
}
