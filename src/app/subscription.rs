// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and keyboard events are routed to the viewer window. Frame
//! ticks are only requested while the toolbar fade needs them: every frame
//! while a tween runs, a coarse poll while only the hide timer is pending.

use super::Message;
use crate::ui::viewer_window;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Poll interval while a hide timer waits to fire.
const TIMER_POLL_INTERVAL: Duration = Duration::from_millis(25);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        event::Event::Window(window::Event::Opened { .. }) => {
            Some(Message::WindowOpened(window_id))
        }
        event::Event::Window(window::Event::CloseRequested) => Some(Message::Window(
            viewer_window::Message::CloseRequested,
        )),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::Window(
            viewer_window::Message::StageResized(size),
        )),
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Some(Message::Window(viewer_window::Message::KeyPressed(
                key,
            ))),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

pub fn create_frame_subscription(animating: bool, timer_pending: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(|now| Message::Window(viewer_window::Message::Frame(now)))
    } else if timer_pending {
        time::every(TIMER_POLL_INTERVAL)
            .map(|now| Message::Window(viewer_window::Message::Frame(now)))
    } else {
        Subscription::none()
    }
}
