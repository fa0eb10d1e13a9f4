use anyhow::{Ok, Result};
use strum_macros::Display;
use thiserror::Error;

/// Re-entrancy guard for the update cascade. A sync in progress must not
/// start another one: a nested update is refused and the caller drops it
/// instead of queueing it.
#[derive(Debug, Copy, Clone)]
pub struct SyncState(State);

impl Default for SyncState {
    fn default() -> Self {
        SyncState(State::default())
    }
}

impl SyncState {
    pub fn current(&self) -> State {
        self.0
    }

    pub fn begin(&mut self) -> Result<()> {
        let result = match &self.0 {
            State::Idle => {
                self.0 = State::Syncing;
                Ok(())
            }
            State::Syncing => Err(SyncStateError::StateTransition("Syncing", "Syncing").into()),
        }?;
        assert!(matches!(self.0, State::Syncing));
        Ok(result)
    }

    pub fn finish(&mut self) {
        if let State::Syncing = self.0 {
            self.0 = State::Idle;
        }
        assert!(matches!(self.0, State::Idle));
    }
}

#[derive(Debug, Copy, Clone, Display)]
pub enum State {
    Idle,
    Syncing,
}

impl Default for State {
    fn default() -> Self {
        State::Idle
    }
}

#[derive(Error, Debug)]
pub(crate) enum SyncStateError {
    #[error("invalid state transition: tried to convert {0} to {1}")]
    StateTransition(&'static str, &'static str),
}
