//! Session state - the authenticated principal, managed as a Dioxus signal.
//!
//! At most one principal exists per page lifetime; nothing is persisted
//! across restarts. The bearer token is mirrored into the shared
//! [`TokenStore`] so the HTTP adapter can attach it without reaching into UI
//! state.

use dioxus::prelude::*;

use crate::domain::Principal;
use crate::infrastructure::TokenStore;

#[derive(Clone)]
pub struct SessionState {
    user: Signal<Option<Principal>>,
    tokens: TokenStore,
}

impl SessionState {
    /// Create a logged-out session. Must run inside an active Dioxus runtime.
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            user: Signal::new(None),
            tokens,
        }
    }

    /// Signal consumers subscribe to for re-rendering on auth changes.
    pub fn user(&self) -> Signal<Option<Principal>> {
        self.user
    }

    /// Install or clear the session principal.
    ///
    /// The token store is updated before the signal publishes, so any request
    /// fired by a re-render already sees the new auth state. Callers clearing
    /// the session must clear the query cache afterwards, in that order.
    pub fn set_user(&mut self, user: Option<Principal>) {
        match &user {
            Some(principal) => self.tokens.set(&principal.token),
            None => self.tokens.clear(),
        }
        self.user.set(user);
    }
}
