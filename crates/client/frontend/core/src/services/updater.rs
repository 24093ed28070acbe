//! ViewModelUpdater service layer for delta-based incremental updates.
//!
//! This service interprets Events from the runtime and applies incremental
//! updates to the ViewModel, avoiding full state regeneration.
//!
//! # Architecture
//!
//! - `UpdateScope`: Bitflags tracking which parts of ViewModel changed (for selective rendering)
//! - `ViewModelUpdater`: Stateless service for applying runtime Events to ViewModel

use bitflags::bitflags;
use game_core::{StateDelta, StateFields};
use runtime::{AnimationEvent, Event, FeedbackEvent, GameStateEvent};

use crate::view_model::ViewModel;

bitflags! {
    /// Tracks which parts of ViewModel have been updated.
    ///
    /// This enables widgets to skip rendering unchanged areas.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct UpdateScope: u32 {
        /// Balance, wager or potential win changed.
        const PURSE    = 0b0000_0001;

        const STREAK   = 0b0000_0010;

        /// Dice, phase or mascot changed.
        const TABLE    = 0b0000_0100;

        const HISTORY  = 0b0000_1000;

        const FEEDBACK = 0b0001_0000;

        /// Everything changed (full rebuild).
        const ALL = Self::PURSE.bits()
                  | Self::STREAK.bits()
                  | Self::TABLE.bits()
                  | Self::HISTORY.bits()
                  | Self::FEEDBACK.bits();
    }
}

impl UpdateScope {
    /// Maps engine field masks onto presentation sections.
    pub fn from_delta(delta: &StateDelta) -> Self {
        let mut scope = Self::empty();
        if delta.touches(StateFields::BALANCE | StateFields::WAGER) {
            scope |= Self::PURSE;
        }
        if delta.touches(StateFields::STREAK) {
            scope |= Self::STREAK;
        }
        if delta.touches(StateFields::PHASE | StateFields::DICE) {
            scope |= Self::TABLE;
        }
        if delta.touches(StateFields::HISTORY) {
            scope |= Self::HISTORY;
        }
        scope
    }
}

/// Stateless service applying runtime events to a [`ViewModel`].
///
/// Message logging is left to the frontend's [`crate::EventConsumer`].
pub struct ViewModelUpdater;

impl ViewModelUpdater {
    pub fn update(view_model: &mut ViewModel, event: &Event) -> UpdateScope {
        match event {
            Event::GameState(event) => Self::apply_game_state(view_model, event),
            Event::Feedback(event) => Self::apply_feedback(view_model, event),
            Event::Animation(event) => Self::apply_animation(view_model, event),
        }
    }

    fn apply_game_state(view_model: &mut ViewModel, event: &GameStateEvent) -> UpdateScope {
        match event {
            GameStateEvent::ActionExecuted {
                delta, after_state, ..
            } => {
                view_model.rebuild_from_state(after_state);
                UpdateScope::from_delta(delta)
            }
            GameStateEvent::ActionRejected { .. } => UpdateScope::empty(),
        }
    }

    fn apply_feedback(view_model: &mut ViewModel, event: &FeedbackEvent) -> UpdateScope {
        match event {
            FeedbackEvent::Shown(feedback) => {
                view_model.feedback = Some(*feedback);
                UpdateScope::FEEDBACK
            }
            FeedbackEvent::Expired { id } => {
                if view_model.feedback.is_some_and(|active| active.id == *id) {
                    view_model.feedback = None;
                    UpdateScope::FEEDBACK
                } else {
                    UpdateScope::empty()
                }
            }
        }
    }

    fn apply_animation(view_model: &mut ViewModel, event: &AnimationEvent) -> UpdateScope {
        match *event {
            AnimationEvent::Started { total_frames, .. } => {
                view_model.tumble = Some((0, total_frames));
                UpdateScope::TABLE
            }
            AnimationEvent::Frame {
                frame,
                total_frames,
                player,
                opponent,
            } => {
                // Topics are independent streams; a frame may trail the settle.
                if !view_model.is_rolling() {
                    return UpdateScope::empty();
                }
                view_model.tumble = Some((frame, total_frames));
                view_model.player_dice = player;
                view_model.opponent_dice = opponent;
                UpdateScope::TABLE
            }
            AnimationEvent::Finished { player, opponent } => {
                view_model.tumble = None;
                view_model.player_dice = player;
                view_model.opponent_dice = opponent;
                UpdateScope::TABLE
            }
        }
    }
}
