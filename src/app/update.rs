// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message};
use crate::diagnostics::{AppStateEvent, UserAction};
use crate::domain::compare::{ImageSlot, PointerId};
use crate::error::Error;
use crate::media::FeedSelection;
use crate::ui::compare::{self, ComparePanel, Effect};
use iced::{window, Task};

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Compare { index, message } => handle_compare_message(app, index, message),
        Message::FeedLoaded(result) => handle_feed_loaded(app, result),
        Message::WindowCloseRequested(id) => handle_close_requested(app, id),
    }
}

fn handle_compare_message(app: &mut App, index: usize, message: compare::Message) -> Task<Message> {
    let Some(panel) = app.panels.get_mut(index) else {
        return Task::none();
    };
    let effect = panel.handle_message(message);
    record_effect(app, index, effect);
    Task::none()
}

fn handle_feed_loaded(app: &mut App, result: Result<FeedSelection, Error>) -> Task<Message> {
    app.feed_pending = false;
    // events the feed task sent through its handle come before anything
    // logged from here on
    app.diagnostics.process_pending();

    let selection = match result {
        Ok(selection) => selection,
        Err(err) => {
            app.diagnostics.log_error(format!("feed: {err}"));
            app.notice = Some(app.i18n.tr(notice_key(&err)));
            return Task::none();
        }
    };

    for skipped in &selection.skipped {
        app.diagnostics.log_warning(format!("feed: {skipped}"));
    }
    if let Some(first) = selection.skipped.first() {
        app.notice = Some(app.i18n.tr(first.i18n_key()));
    }

    let settings = app.settings;
    app.panels = selection
        .posts
        .into_iter()
        .map(|post| ComparePanel::new(post, settings))
        .collect();

    app.load_all_images()
}

fn handle_close_requested(app: &mut App, id: window::Id) -> Task<Message> {
    if let Some(path) = app.diagnostics_out.clone() {
        if let Err(err) = app.diagnostics.export_to_file(&path) {
            eprintln!("Failed to write diagnostics to {}: {err}", path.display());
        }
    }
    window::close(id)
}

/// Localized message key for a feed load failure.
fn notice_key(err: &Error) -> &'static str {
    match err {
        Error::Feed(feed) => feed.i18n_key(),
        _ => "error-feed-io",
    }
}

fn record_effect(app: &mut App, slider: usize, effect: Effect) {
    let diagnostics = &mut app.diagnostics;
    match effect {
        Effect::None => {}
        Effect::ImageLoaded(slot) => diagnostics.log_state(AppStateEvent::ImageLoaded {
            slider,
            slot: slot_name(slot).to_string(),
        }),
        Effect::ImageFailed { slot, message } => diagnostics.log_warning(format!(
            "slider {slider}: {} image failed to load: {message}",
            slot_name(slot)
        )),
        Effect::InitialLayout(size) => diagnostics.log_state(AppStateEvent::InitialLayout {
            slider,
            width: size.width,
            height: size.height,
        }),
        Effect::Resized(size) => diagnostics.log_state(AppStateEvent::ContainerResized {
            slider,
            width: size.width,
            height: size.height,
        }),
        Effect::DragStarted(pointer) => diagnostics.log_action(UserAction::BeginDrag {
            slider,
            pointer: pointer_name(pointer).to_string(),
        }),
        Effect::DragEnded { summary, percent } => diagnostics.log_action(UserAction::EndDrag {
            slider,
            percent,
            moves: summary.moves,
        }),
        Effect::KeyboardStep { percent } => {
            diagnostics.log_action(UserAction::KeyboardStep { slider, percent });
        }
    }
}

fn slot_name(slot: ImageSlot) -> &'static str {
    match slot {
        ImageSlot::Before => "before",
        ImageSlot::After => "after",
    }
}

fn pointer_name(pointer: PointerId) -> &'static str {
    match pointer {
        PointerId::Mouse => "mouse",
        PointerId::Finger(_) => "finger",
    }
}
