// SPDX-License-Identifier: MPL-2.0
//! The viewer window: a translucent stage hosting one image and a toolbar.
//!
//! The window owns a [`Stage`] (the surface every actor is drawn on), the
//! [`ToolbarActor`] pinned near the bottom edge and at most one
//! [`ImageActor`]. Setting a new file replaces the image actor and asks the
//! host to resize the window around it. Pointer motion over the image drives
//! the toolbar fade.
//!
//! Outward requests (quit, resize, navigate, fullscreen) are returned as
//! [`Effect`]s; the application turns them into runtime tasks.

use crate::config::{
    Config, IMAGE_ALIGN_Y, STAGE_OPACITY, TOOLBAR_BOTTOM_OFFSET, TOOLBAR_HEIGHT, TOOLBAR_WIDTH,
    VIEW_MIN,
};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::navigation::Direction;
use crate::ui::animation::{ActorId, AnimationScheduler, MainLoopTimers, Tweener};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::layout::{
    self, AlignConstraint, Axis, BindConstraint, Constraint, Fit, FitBounds,
};
use crate::ui::state::ToolbarHideDelay;
use crate::ui::styles;
use crate::ui::toolbar;
use crate::ui::toolbar_fade::{FadeState, FadeTiming, Motion, ToolbarFade};
use iced::alignment::Horizontal;
use iced::widget::image::{self, Image};
use iced::widget::{container, mouse_area, pin, text, Column, Stack};
use iced::{keyboard, window, Color, ContentFit, Element, Length, Point, Size};
use std::time::Instant;

/// Animation target for the toolbar's opacity.
pub const TOOLBAR_ACTOR: ActorId = ActorId(1);

/// Options the window is created with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOptions {
    pub always_on_top: bool,
    pub hide_delay: ToolbarHideDelay,
    pub bounds: FitBounds,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            always_on_top: true,
            hide_delay: ToolbarHideDelay::default(),
            bounds: FitBounds::default(),
        }
    }
}

impl WindowOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            always_on_top: config.window.always_on_top,
            hide_delay: ToolbarHideDelay::from_config(config.toolbar.hide_delay_ms),
            ..Self::default()
        }
    }
}

/// The compositing surface filling the window's content area.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    size: Size,
    background: Color,
}

impl Stage {
    fn new(size: Size) -> Self {
        Self {
            size,
            background: Color {
                a: opacity::from_u8(STAGE_OPACITY),
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }
}

/// Toolbar overlay: centered horizontally, a fixed distance above the
/// stage's bottom edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolbarActor {
    size: Size,
    x: AlignConstraint,
    y: BindConstraint,
}

impl ToolbarActor {
    fn new(stage: &Stage) -> Self {
        Self {
            size: Size::new(TOOLBAR_WIDTH, TOOLBAR_HEIGHT),
            x: AlignConstraint::x(0.5),
            y: BindConstraint::new(Axis::Y, stage.size.height - TOOLBAR_BOTTOM_OFFSET),
        }
    }

    fn follow_stage_height(&mut self, height: f32) {
        self.y.set_offset(height - TOOLBAR_BOTTOM_OFFSET);
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn position(&self, stage: &Stage) -> Point {
        layout::resolve_position(
            &[Constraint::Align(self.x), Constraint::Bind(self.y)],
            stage.size,
            self.size,
        )
    }
}

#[derive(Debug, Clone)]
pub enum ImageContent {
    Texture(image::Handle),
    /// Placeholder for a file that could not be decoded.
    LoadError(Error),
}

/// The picture on the stage, drawn at its fitted size.
#[derive(Debug, Clone)]
pub struct ImageActor {
    content: ImageContent,
    natural: Size,
    size: Size,
    constraints: [Constraint; 2],
    reactive: bool,
}

impl ImageActor {
    fn new(content: ImageContent, natural: Size, size: Size) -> Self {
        Self {
            content,
            natural,
            size,
            constraints: [
                Constraint::Align(AlignConstraint::x(0.5)),
                Constraint::Align(AlignConstraint::y(IMAGE_ALIGN_Y)),
            ],
            reactive: true,
        }
    }

    fn texture(data: ImageData, fit: &Fit) -> Self {
        let natural = data.natural_size();
        Self::new(ImageContent::Texture(data.handle), natural, fit.image)
    }

    fn placeholder(error: Error) -> Self {
        let size = Size::new(sizing::PLACEHOLDER_WIDTH, sizing::PLACEHOLDER_HEIGHT);
        Self::new(ImageContent::LoadError(error), size, size)
    }

    #[must_use]
    pub fn content(&self) -> &ImageContent {
        &self.content
    }

    #[must_use]
    pub fn natural_size(&self) -> Size {
        self.natural
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    #[must_use]
    pub fn is_reactive(&self) -> bool {
        self.reactive
    }

    #[must_use]
    pub fn position(&self, stage: &Stage) -> Point {
        layout::resolve_position(&self.constraints, stage.size, self.size)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    CloseRequested,
    KeyPressed(keyboard::Key),
    /// Pointer moved over the image actor.
    PointerMoved,
    /// The window's content area changed size.
    StageResized(Size),
    /// Frame or timer tick carrying the current time.
    Frame(Instant),
    Toolbar(toolbar::Message),
}

/// Requests the window makes of its host application.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Terminate the application. Emitted at most once per window.
    Quit,
    /// Resize the window's content area.
    Resize(Size),
    Navigate(Direction),
    ToggleFullscreen,
}

#[derive(Debug)]
pub struct ViewerWindow {
    options: WindowOptions,
    stage: Stage,
    toolbar: ToolbarActor,
    image: Option<ImageActor>,
    /// Whether the toolbar is drawn above the image.
    toolbar_raised: bool,
    fade: ToolbarFade,
    animations: Tweener,
    timers: MainLoopTimers,
    fit_size: Size,
    visible: bool,
    quit_requested: bool,
}

impl ViewerWindow {
    #[must_use]
    pub fn new(options: WindowOptions) -> Self {
        let stage = Stage::new(Size::new(VIEW_MIN, VIEW_MIN));
        let toolbar = ToolbarActor::new(&stage);

        let mut animations = Tweener::new();
        animations.set_value(TOOLBAR_ACTOR, 0.0);

        let timing = FadeTiming {
            hide_delay: options.hide_delay,
            ..FadeTiming::default()
        };

        Self {
            options,
            fit_size: stage.size,
            stage,
            toolbar,
            image: None,
            toolbar_raised: false,
            fade: ToolbarFade::new(TOOLBAR_ACTOR, timing),
            animations,
            timers: MainLoopTimers::new(),
            visible: false,
            quit_requested: false,
        }
    }

    /// Native window settings: undecorated, transparent, stage-sized.
    #[must_use]
    pub fn window_settings(&self) -> window::Settings {
        window::Settings {
            size: self.stage.size,
            decorations: false,
            transparent: true,
            resizable: false,
            level: if self.options.always_on_top {
                window::Level::AlwaysOnTop
            } else {
                window::Level::Normal
            },
            exit_on_close_request: false,
            ..window::Settings::default()
        }
    }

    /// Makes the stage contents visible.
    pub fn show_all(&mut self) {
        self.visible = true;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows a decoded image, replacing the previous one, and returns the
    /// window resize it needs.
    pub fn set_file(&mut self, data: ImageData) -> Effect {
        let fit = layout::fit_window(data.natural_size(), &self.options.bounds);
        log::debug!(
            "showing {}x{} image at {}x{}",
            data.width,
            data.height,
            fit.image.width,
            fit.image.height
        );
        self.replace_image(ImageActor::texture(data, &fit), fit.window)
    }

    /// Replaces the image with a placeholder describing `error`.
    pub fn set_load_error(&mut self, error: Error) -> Effect {
        log::warn!("Failed to load image: {}", error);
        let window = self.options.bounds.min_window();
        self.replace_image(ImageActor::placeholder(error), window)
    }

    fn replace_image(&mut self, actor: ImageActor, window: Size) -> Effect {
        // A freshly added actor lands on top of the toolbar.
        self.image = Some(actor);
        self.toolbar_raised = false;
        self.fit_size = window;
        // The stage follows once the native window reports its new size.
        Effect::Resize(window)
    }

    fn quit(&mut self) -> Effect {
        if self.quit_requested {
            return Effect::None;
        }
        self.quit_requested = true;
        Effect::Quit
    }

    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::CloseRequested => self.quit(),
            Message::KeyPressed(keyboard::Key::Named(keyboard::key::Named::Escape)) => {
                self.quit()
            }
            Message::KeyPressed(_) => Effect::None,
            Message::PointerMoved => {
                if self.image.as_ref().is_some_and(ImageActor::is_reactive) {
                    let motion =
                        self.fade
                            .on_pointer_motion(now, &mut self.animations, &mut self.timers);
                    if motion == Motion::Revealed {
                        self.toolbar_raised = true;
                    }
                }
                Effect::None
            }
            Message::StageResized(size) => {
                if size.height != self.stage.size.height {
                    self.toolbar.follow_stage_height(size.height);
                }
                self.stage.size = size;
                Effect::None
            }
            Message::Frame(now) => {
                for id in self.timers.fire_due(now) {
                    self.fade.on_timer(id, now, &mut self.animations);
                }
                self.animations.advance(now);
                Effect::None
            }
            Message::Toolbar(toolbar::Message::Previous) => Effect::Navigate(Direction::Previous),
            Message::Toolbar(toolbar::Message::Next) => Effect::Navigate(Direction::Next),
            Message::Toolbar(toolbar::Message::ToggleZoom) => Effect::ToggleFullscreen,
        }
    }

    /// Window size fitted to the current image (or the minimum box).
    #[must_use]
    pub fn fit_size(&self) -> Size {
        self.fit_size
    }

    /// True while a tween runs; the host should deliver frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.animations.is_idle()
    }

    /// True while a deferred callback waits to fire.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.timers.has_pending()
    }

    /// Toolbar opacity on the 0–255 scale.
    #[must_use]
    pub fn toolbar_opacity(&self) -> f32 {
        self.animations.value(TOOLBAR_ACTOR)
    }

    #[must_use]
    pub fn fade_state(&self) -> FadeState {
        self.fade.state(&self.animations)
    }

    #[must_use]
    pub fn toolbar_raised(&self) -> bool {
        self.toolbar_raised
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn toolbar(&self) -> &ToolbarActor {
        &self.toolbar
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageActor> {
        self.image.as_ref()
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let background = container(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::stage(self.stage.background));

        let stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(background);

        if !self.visible {
            return stack.into();
        }

        let toolbar_layer = self.toolbar_layer(i18n);
        match self.image.as_ref().map(|actor| self.image_layer(actor, i18n)) {
            Some(image_layer) if self.toolbar_raised => {
                stack.push(image_layer).push(toolbar_layer).into()
            }
            Some(image_layer) => stack.push(toolbar_layer).push(image_layer).into(),
            None => stack.push(toolbar_layer).into(),
        }
    }

    fn toolbar_layer<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let position = self.toolbar.position(&self.stage);
        let content = toolbar::view(toolbar::ViewContext {
            i18n,
            size: self.toolbar.size,
            alpha: opacity::from_scale(self.toolbar_opacity()),
        })
        .map(Message::Toolbar);

        pin(content).x(position.x).y(position.y).into()
    }

    fn image_layer<'a>(&'a self, actor: &'a ImageActor, i18n: &'a I18n) -> Element<'a, Message> {
        let position = actor.position(&self.stage);
        let width = Length::Fixed(actor.size.width);
        let height = Length::Fixed(actor.size.height);

        let content: Element<'a, Message> = match &actor.content {
            ImageContent::Texture(handle) => Image::new(handle.clone())
                .width(width)
                .height(height)
                .content_fit(ContentFit::Contain)
                .into(),
            ImageContent::LoadError(error) => container(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(Horizontal::Center)
                    .push(text(i18n.tr("error-load-image-heading")).size(typography::TITLE_SM))
                    .push(text(i18n.tr(error.i18n_key())).size(typography::BODY)),
            )
            .width(width)
            .height(height)
            .padding(spacing::MD)
            .center_x(width)
            .center_y(height)
            .style(styles::container::placeholder)
            .into(),
        };

        let reactive = if actor.reactive {
            mouse_area(content).on_move(|_| Message::PointerMoved).into()
        } else {
            content
        };

        pin(reactive).x(position.x).y(position.y).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    fn escape() -> Message {
        Message::KeyPressed(keyboard::Key::Named(keyboard::key::Named::Escape))
    }

    fn window_with_image() -> ViewerWindow {
        let mut window = ViewerWindow::new(WindowOptions::default());
        window.show_all();
        let _ = window.set_file(image(500, 450));
        window
    }

    #[test]
    fn new_window_has_minimum_stage_and_hidden_toolbar() {
        let window = ViewerWindow::new(WindowOptions::default());
        assert_eq!(window.stage().size(), Size::new(400.0, 400.0));
        assert!((window.stage().background().a - 221.0 / 255.0).abs() < 1e-6);
        assert_eq!(window.toolbar().size(), Size::new(100.0, 40.0));
        assert_eq!(
            window.toolbar().position(window.stage()),
            Point::new(150.0, 348.0)
        );
        assert_eq!(window.toolbar_opacity(), 0.0);
        assert_eq!(window.fade_state(), FadeState::Hidden);
        assert!(window.image().is_none());
        assert!(!window.is_visible());
    }

    #[test]
    fn window_settings_are_borderless_and_transparent() {
        let window = ViewerWindow::new(WindowOptions::default());
        let settings = window.window_settings();
        assert!(!settings.decorations);
        assert!(settings.transparent);
        assert!(!settings.exit_on_close_request);
        assert_eq!(settings.size, Size::new(400.0, 400.0));
        assert_eq!(settings.level, window::Level::AlwaysOnTop);
    }

    #[test]
    fn escape_quits_exactly_once() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let now = Instant::now();
        assert_eq!(window.handle(escape(), now), Effect::Quit);
        assert_eq!(window.handle(escape(), now), Effect::None);
        assert_eq!(window.handle(Message::CloseRequested, now), Effect::None);
    }

    #[test]
    fn close_request_quits() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        assert_eq!(
            window.handle(Message::CloseRequested, Instant::now()),
            Effect::Quit
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let now = Instant::now();
        for key in [
            keyboard::Key::Character("q".into()),
            keyboard::Key::Named(keyboard::key::Named::Enter),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight),
        ] {
            assert_eq!(window.handle(Message::KeyPressed(key), now), Effect::None);
        }
        assert_eq!(window.handle(escape(), now), Effect::Quit);
    }

    #[test]
    fn set_file_resizes_window_to_fit() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let effect = window.set_file(image(1600, 800));

        assert_eq!(effect, Effect::Resize(Size::new(804.0, 428.0)));
        let actor = window.image().expect("image actor");
        assert_eq!(actor.natural_size(), Size::new(1600.0, 800.0));
        assert_eq!(actor.size(), Size::new(800.0, 400.0));
        assert_eq!(window.fit_size(), Size::new(804.0, 428.0));
    }

    #[test]
    fn set_file_repositions_actors_on_new_stage() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let Effect::Resize(size) = window.set_file(image(1600, 800)) else {
            panic!("set_file should request a resize");
        };
        let _ = window.handle(Message::StageResized(size), Instant::now());

        assert_eq!(
            window.toolbar().position(window.stage()),
            Point::new(352.0, 376.0)
        );
        let position = window.image().expect("image actor").position(window.stage());
        assert_eq!(position.x, 2.0);
        assert!((position.y - 28.0 * 0.92).abs() < 1e-3);
    }

    #[test]
    fn stage_keeps_native_size_until_window_reports_resize() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let now = Instant::now();
        let _ = window.handle(Message::StageResized(Size::new(1920.0, 1080.0)), now);

        let effect = window.set_file(image(500, 450));
        assert_eq!(effect, Effect::Resize(Size::new(504.0, 478.0)));
        assert_eq!(window.fit_size(), Size::new(504.0, 478.0));
        assert_eq!(window.stage().size(), Size::new(1920.0, 1080.0));
        assert_eq!(
            window.toolbar().position(window.stage()),
            Point::new(910.0, 1028.0)
        );

        let _ = window.set_load_error(Error::Io("gone".into()));
        assert_eq!(window.stage().size(), Size::new(1920.0, 1080.0));
    }

    #[test]
    fn set_file_replaces_previous_image() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let _ = window.set_file(image(1600, 800));
        let effect = window.set_file(image(200, 100));

        assert_eq!(effect, Effect::Resize(Size::new(404.0, 428.0)));
        assert_eq!(
            window.image().expect("image actor").natural_size(),
            Size::new(200.0, 100.0)
        );
    }

    #[test]
    fn stage_height_change_moves_toolbar() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let _ = window.handle(
            Message::StageResized(Size::new(600.0, 500.0)),
            Instant::now(),
        );
        assert_eq!(
            window.toolbar().position(window.stage()),
            Point::new(250.0, 448.0)
        );
    }

    #[test]
    fn motion_without_image_is_ignored() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let _ = window.handle(Message::PointerMoved, Instant::now());
        assert_eq!(window.fade_state(), FadeState::Hidden);
        assert!(!window.has_pending_timers());
    }

    #[test]
    fn motion_reveals_toolbar_and_raises_it() {
        let mut window = window_with_image();
        let start = Instant::now();
        assert!(!window.toolbar_raised());

        let _ = window.handle(Message::PointerMoved, start);
        assert!(window.toolbar_raised());
        assert!(window.is_animating());
        assert_eq!(window.fade_state(), FadeState::FadingIn);

        let _ = window.handle(Message::Frame(start + Duration::from_millis(100)), start);
        assert_eq!(window.toolbar_opacity(), 200.0);
        assert_eq!(window.fade_state(), FadeState::Visible);
    }

    #[test]
    fn toolbar_fades_out_after_hide_delay() {
        let mut window = window_with_image();
        let start = Instant::now();
        let _ = window.handle(Message::PointerMoved, start);

        let _ = window.handle(Message::Frame(start + Duration::from_millis(1499)), start);
        assert_eq!(window.fade_state(), FadeState::Visible);

        let _ = window.handle(Message::Frame(start + Duration::from_millis(1500)), start);
        assert_eq!(window.fade_state(), FadeState::FadingOut);

        let _ = window.handle(Message::Frame(start + Duration::from_millis(1750)), start);
        assert_eq!(window.fade_state(), FadeState::Hidden);
        assert_eq!(window.toolbar_opacity(), 0.0);
        assert!(!window.is_animating());
        assert!(!window.has_pending_timers());
    }

    #[test]
    fn new_image_is_drawn_above_toolbar_until_next_reveal() {
        let mut window = window_with_image();
        let _ = window.handle(Message::PointerMoved, Instant::now());
        assert!(window.toolbar_raised());

        let _ = window.set_file(image(300, 300));
        assert!(!window.toolbar_raised());
    }

    #[test]
    fn load_error_shows_placeholder_with_minimum_window() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let effect = window.set_load_error(Error::Decode("bad data".into()));

        assert_eq!(effect, Effect::Resize(Size::new(404.0, 428.0)));
        let actor = window.image().expect("placeholder actor");
        assert!(matches!(actor.content(), ImageContent::LoadError(Error::Decode(_))));
        assert!(actor.is_reactive());

        let _ = window.handle(Message::PointerMoved, Instant::now());
        assert_eq!(window.fade_state(), FadeState::FadingIn);
    }

    #[test]
    fn toolbar_buttons_map_to_effects() {
        let mut window = ViewerWindow::new(WindowOptions::default());
        let now = Instant::now();
        assert_eq!(
            window.handle(Message::Toolbar(toolbar::Message::Previous), now),
            Effect::Navigate(Direction::Previous)
        );
        assert_eq!(
            window.handle(Message::Toolbar(toolbar::Message::Next), now),
            Effect::Navigate(Direction::Next)
        );
        assert_eq!(
            window.handle(Message::Toolbar(toolbar::Message::ToggleZoom), now),
            Effect::ToggleFullscreen
        );
    }

    #[test]
    fn configured_hide_delay_is_applied() {
        let config = Config {
            toolbar: crate::config::ToolbarConfig {
                hide_delay_ms: Some(3000),
            },
            ..Config::default()
        };
        let mut window = ViewerWindow::new(WindowOptions::from_config(&config));
        let _ = window.set_file(image(500, 450));
        let start = Instant::now();
        let _ = window.handle(Message::PointerMoved, start);

        let _ = window.handle(Message::Frame(start + Duration::from_millis(2000)), start);
        assert_eq!(window.fade_state(), FadeState::Visible);
    }

    #[test]
    fn view_renders_in_every_state() {
        let i18n = I18n::default();
        let mut window = ViewerWindow::new(WindowOptions::default());
        drop(window.view(&i18n));

        window.show_all();
        drop(window.view(&i18n));

        let _ = window.set_load_error(Error::Io("gone".into()));
        drop(window.view(&i18n));

        let _ = window.set_file(image(20, 10));
        let _ = window.handle(Message::PointerMoved, Instant::now());
        drop(window.view(&i18n));
    }
}
