// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the preview, the crop
//! frame, and the vignette control.
//!
//! The `App` struct owns the editing stack and wires the components into the
//! Iced loop. Components that observe stack state live behind `Rc<RefCell>`
//! so the stack's sinks can deliver to them without owning them; all stack
//! mutations happen here, in the update path, never inside a component while
//! it is borrowed.

mod message;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, TICK_INTERVAL_MS};
use crate::error::{Error, Result};
use crate::media::{self, render};
use crate::stack::{self, EditingStack};
use crate::ui::controls::vignette;
use crate::ui::overlay;
use crate::ui::preview;
use iced::{Element, Subscription, Task, Theme};
use image_rs::DynamicImage;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    stack: EditingStack,
    preview: Rc<RefCell<preview::State>>,
    vignette: Rc<RefCell<vignette::State>>,
    crop_frame: overlay::State,
    /// Whether the vignette control panel is open. While it is, the crop
    /// frame stays out of the way and the press-to-compare area is active.
    vignette_open: bool,
    theme: Theme,
    last_tick: Option<Instant>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("stack", &self.stack)
            .field("vignette_open", &self.vignette_open)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous image
    /// loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            log::warn!("failed to load config: {error}");
            config::Config::default()
        });

        let theme = match config.theme.as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        };

        let mut stack = EditingStack::new(flags.file_path.map(PathBuf::from));
        let preview = Rc::new(RefCell::new(preview::State::new()));
        let vignette = Rc::new(RefCell::new(vignette::State::new()));
        stack::bind(&mut stack, &preview);
        stack::bind(&mut stack, &vignette);

        let mut app = App {
            stack,
            preview,
            vignette,
            crop_frame: overlay::State::new(config.guide_hide_delay()),
            vignette_open: false,
            theme,
            last_tick: None,
        };

        let task = app.begin_loading(config.preview_edge());
        (app, task)
    }

    /// Starts the stack and spawns the decode task, once.
    fn begin_loading(&mut self, preview_edge: u32) -> Task<Message> {
        let Some(path) = self.stack.source().map(std::path::Path::to_path_buf) else {
            return Task::none();
        };
        if !self.stack.start() {
            return Task::none();
        }
        Task::perform(load_source(path, preview_edge), Message::SourceLoaded)
    }

    pub fn title(&self) -> String {
        match self
            .stack
            .source()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
        {
            Some(name) => format!("{name} - Penumbra"),
            None => "Penumbra".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Runs the animation tick only while a fade is actually in flight.
    pub fn subscription(&self) -> Subscription<Message> {
        let animating = self.preview.borrow().is_animating() || self.crop_frame.is_animating();
        if animating {
            iced::time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::render(self)
    }
}

/// Decodes and downscales the source image off the UI loop.
async fn load_source(path: PathBuf, max_edge: u32) -> Result<Box<DynamicImage>> {
    tokio::task::spawn_blocking(move || {
        let image = media::load_image(&path)?;
        Ok(Box::new(render::downscale_for_preview(&image, max_edge)))
    })
    .await
    .map_err(|error| Error::Io(error.to_string()))?
}

/// Builds the window settings.
fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::controls::vignette::Event;
    use image_rs::RgbaImage;

    fn loaded_app() -> App {
        let (mut app, _task) = App::new(Flags::default());
        app.stack.start();
        app.stack
            .finish_loading(DynamicImage::ImageRgba8(RgbaImage::new(8, 8)));
        app
    }

    #[test]
    fn new_app_binds_both_observers() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.stack.sink_count(), 2);
    }

    #[test]
    fn vignette_flow_updates_stack_and_panel_state() {
        let mut app = loaded_app();
        app.update(Message::OpenVignette);
        assert!(app.vignette_open);

        app.update(Message::Vignette(vignette::Message::SliderMoved(0.5)));
        let loaded = app.stack.state().loaded.clone().unwrap();
        assert!(loaded.current_edit.filters.has_effects());

        // The slider echo keeps the control at the mapped position.
        assert!((app.vignette.borrow().position() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn cancel_reverts_and_closes_the_panel() {
        let mut app = loaded_app();
        app.update(Message::OpenVignette);
        app.update(Message::Vignette(vignette::Message::SliderMoved(0.8)));
        app.update(Message::Vignette(vignette::Message::Cancel));

        assert!(!app.vignette_open);
        let loaded = app.stack.state().loaded.clone().unwrap();
        assert!(!loaded.current_edit.filters.has_effects());
        // The echo also snapped the slider back to neutral.
        assert!(app.vignette.borrow().position().abs() < 1e-5);
    }

    #[test]
    fn done_commits_the_edit() {
        let mut app = loaded_app();
        app.update(Message::OpenVignette);
        app.update(Message::Vignette(vignette::Message::SliderMoved(0.8)));
        app.update(Message::Vignette(vignette::Message::Done));

        assert!(!app.vignette_open);
        assert_eq!(app.stack.history_len(), 1);
    }

    #[test]
    fn apply_event_neutral_clears_parameter() {
        let mut app = loaded_app();
        app.apply_vignette_event(Event::SetVignette(0.3));
        assert!(app.stack.state().loaded.clone().unwrap().current_edit.filters.has_effects());

        app.apply_vignette_event(Event::SetVignette(0.0));
        assert!(!app
            .stack
            .state()
            .loaded
            .clone()
            .unwrap()
            .current_edit
            .filters
            .has_effects());
    }

    #[test]
    fn ticks_advance_overlay_fades() {
        let mut app = loaded_app();
        app.crop_frame.handle(overlay::Message::AdjustmentBegan);
        assert!(app.crop_frame.is_animating());

        let start = Instant::now();
        for i in 0..200 {
            app.update(Message::Tick(start + Duration::from_millis(16 * i)));
        }
        assert!(!app.crop_frame.is_animating());
        assert!((app.crop_frame.guide_alpha() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn failed_load_clears_loading_state() {
        let (mut app, _task) = App::new(Flags {
            file_path: Some("/nonexistent/missing.png".into()),
        });
        app.update(Message::SourceLoaded(Err(Error::Io("missing".into()))));

        assert!(!app.stack.state().is_loading);
        assert!(app.stack.state().loaded.is_none());
    }
}
