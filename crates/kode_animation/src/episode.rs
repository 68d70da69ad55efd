//! Episode tokens
//!
//! A recurring task chain (a caret blink loop, say) belongs to one episode.
//! Every task carries the token of the episode that scheduled it, so once a
//! new episode begins or the current one ends, older tasks can be told
//! apart and dropped instead of acting on the new state.

/// Hands out monotonically increasing episode tokens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EpisodeCounter {
    last: u64,
    active: Option<u64>,
}

impl EpisodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new episode, superseding the active one
    pub fn begin(&mut self) -> u64 {
        self.last += 1;
        self.active = Some(self.last);
        self.last
    }

    /// End the active episode; its tokens become stale
    pub fn end(&mut self) {
        self.active = None;
    }

    /// Token of the running episode, if any
    pub fn active(&self) -> Option<u64> {
        self.active
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.active == Some(token)
    }
}
