//! # Session State Machine
//!
//! Everything that can happen during a shell session becomes an [`Action`].
//! The fetch completes? That's `Action::ConfigLoaded(config)`. The
//! `update()` function takes the current state and an action, mutates the
//! state, and returns an [`Effect`] for the host to run. No I/O here.
//!
//! ```text
//! Uninitialized ──▶ Loading ──▶ Ready(tree)
//!                      │
//!                      └───────▶ Failed
//! ```
//!
//! `Loading` is entered once at session start. `Ready` and `Failed` are
//! both terminal: the shell never refetches or rebuilds after the initial
//! outcome, and a failed session renders nothing beyond the neutral empty
//! state. Once `Ready`, all navigation is pure traversal over the tree.

use log::{info, warn};

use crate::core::menu::RemoteConfig;
use crate::core::nav::{self, NavPolicy, NavigationTree};

/// Lifecycle of the one-shot configuration load.
#[derive(Debug, PartialEq)]
pub enum Session {
    Uninitialized,
    Loading,
    Ready(Box<NavigationTree>),
    Failed,
}

impl Session {
    /// True once the session can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Session::Ready(_) | Session::Failed)
    }

    /// The built navigation tree, when the session reached `Ready`.
    pub fn tree(&self) -> Option<&NavigationTree> {
        match self {
            Session::Ready(tree) => Some(tree),
            _ => None,
        }
    }
}

/// Everything that can happen in the shell.
#[derive(Debug)]
pub enum Action {
    /// The one-shot configuration fetch was issued.
    FetchStarted,
    /// The fetch succeeded and the body parsed.
    ConfigLoaded(RemoteConfig),
    /// The fetch failed (network or parse); the reason goes to the log.
    FetchFailed(String),
    /// The user asked to leave.
    Quit,
}

/// What the host must do after a transition. I/O stays out of `update()`.
#[derive(Debug, PartialEq)]
pub enum Effect {
    None,
    Quit,
}

/// Top-level application state owned by the session.
pub struct App {
    pub session: Session,
    pub policy: NavPolicy,
}

impl App {
    pub fn new(policy: NavPolicy) -> Self {
        Self {
            session: Session::Uninitialized,
            policy,
        }
    }
}

/// State + Action → new State. The only place session state changes.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::FetchStarted => {
            if matches!(app.session, Session::Uninitialized) {
                info!("session: Uninitialized -> Loading");
                app.session = Session::Loading;
            } else {
                warn!("FetchStarted ignored: session already past Uninitialized");
            }
            Effect::None
        }
        Action::ConfigLoaded(remote) => {
            if !matches!(app.session, Session::Loading) {
                warn!("ConfigLoaded ignored: session is terminal");
                return Effect::None;
            }
            let tabs = nav::build_tabs(&remote.bottom);
            let tree = nav::build_drawer(&remote.app, &app.policy, &remote.lateral, tabs);
            info!(
                "session: Loading -> Ready ({} drawer entries, {} tabs)",
                tree.entries.len(),
                remote.bottom.len()
            );
            app.session = Session::Ready(Box::new(tree));
            Effect::None
        }
        Action::FetchFailed(reason) => {
            if !matches!(app.session, Session::Loading) {
                warn!("FetchFailed ignored: session is terminal");
                return Effect::None;
            }
            warn!("configuration fetch failed: {}", reason);
            app.session = Session::Failed;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
