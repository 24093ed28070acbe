//! Maintains the CLI round log in response to runtime events.
use game_core::engine::ActionResult;
use game_core::{GameState, Resolution, RoundOutcome};
use runtime::{Event, GameStateEvent};

use client_frontend_core::{
    event::{EventConsumer, EventImpact},
    format::{format_refill, format_round_message},
    message::{MessageEntry, MessageLevel, MessageLog},
};

pub struct CliEventConsumer {
    log: MessageLog,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }

    fn push_round(&mut self, resolution: &Resolution, state: &GameState) {
        let round = state.rounds_played();
        let text = format_round_message(
            round,
            state.player_dice,
            state.opponent_dice,
            resolution.outcome,
            resolution.balance_delta,
        );
        self.log
            .push(MessageEntry::new(text, Some(round), level_for(resolution.outcome)));
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::GameState(GameStateEvent::ActionExecuted {
                result,
                after_state,
                ..
            }) => match result {
                ActionResult::Settled(resolution) => {
                    self.push_round(resolution, after_state);
                    EventImpact::redraw()
                }
                ActionResult::Refilled => {
                    self.log.push(MessageEntry::new(
                        format_refill(after_state.balance),
                        None,
                        MessageLevel::Success,
                    ));
                    EventImpact::redraw()
                }
                ActionResult::WagerSet(_) | ActionResult::RollStarted => EventImpact::none(),
            },
            Event::GameState(GameStateEvent::ActionRejected {
                action,
                phase,
                severity,
                error,
            }) => {
                // Player mistakes are shown by the feedback banner instead.
                if !severity.is_internal() {
                    return EventImpact::none();
                }
                self.log.push(MessageEntry::new(
                    format!("{} failed during {}: {}", action.kind(), phase.as_str(), error),
                    None,
                    MessageLevel::Error,
                ));
                EventImpact::redraw()
            }
            Event::Feedback(_) | Event::Animation(_) => EventImpact::none(),
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}

fn level_for(outcome: RoundOutcome) -> MessageLevel {
    match outcome {
        RoundOutcome::Win | RoundOutcome::CriticalWin => MessageLevel::Success,
        RoundOutcome::Tie => MessageLevel::Info,
        RoundOutcome::Lose => MessageLevel::Warning,
        RoundOutcome::CriticalLose => MessageLevel::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::engine::{TransitionPhase, TransitionPhaseError};
    use game_core::{
        Action, DicePair, ErrorSeverity, ExecuteError, GameEngine, GameEnv, StartRollError,
    };

    fn executed(state: &mut GameState, action: Action) -> Event {
        let nonce = state.nonce;
        let outcome = GameEngine::new(state)
            .execute(GameEnv::standard(), &action)
            .unwrap();
        Event::GameState(GameStateEvent::ActionExecuted {
            nonce,
            action,
            delta: Box::new(outcome.delta),
            result: outcome.result,
            after_state: Box::new(state.clone()),
        })
    }

    #[test]
    fn logs_settled_rounds() {
        let mut state = GameState::default();
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        let impact = consumer.on_event(&executed(&mut state, Action::start_roll()));
        assert!(!impact.requires_redraw);
        assert!(consumer.message_log().is_empty());

        let settle = Action::settle(DicePair::BOXCARS, DicePair::from_faces(3, 2).unwrap());
        let impact = consumer.on_event(&executed(&mut state, settle));
        assert!(impact.requires_redraw);

        let line = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(line.text, "#1 6+6 vs 3+2 BOXCARS +50");
        assert_eq!(line.round, Some(1));
        assert_eq!(line.level, MessageLevel::Success);
    }

    #[test]
    fn logs_refills() {
        let mut state = GameState::default();
        state.balance = 0;
        let mut consumer = CliEventConsumer::new(MessageLog::new(8));

        consumer.on_event(&executed(&mut state, Action::refill()));
        let line = consumer.message_log().recent(1).next().unwrap();
        assert_eq!(line.text, "Bober refills your pile: 100 $BOBER");
    }

    #[test]
    fn player_mistakes_stay_out_of_the_log() {
        let error = ExecuteError::StartRoll(TransitionPhaseError::new(
            TransitionPhase::PreValidate,
            StartRollError::NothingWagered,
        ));
        let event = Event::GameState(GameStateEvent::ActionRejected {
            action: Action::start_roll(),
            phase: error.phase(),
            severity: ErrorSeverity::Validation,
            error: error.to_string(),
        });

        let mut consumer = CliEventConsumer::new(MessageLog::new(8));
        assert!(!consumer.on_event(&event).requires_redraw);
        assert!(consumer.take_message_log().is_empty());
    }
}
