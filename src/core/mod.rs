//! # Core Navigation Logic
//!
//! This module contains Portico's navigation engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────────┐
//!                    │           CORE              │
//!                    │  (this module)              │
//!                    │                             │
//!                    │  • menu (wire model)        │
//!                    │  • resolver (kind → screen) │
//!                    │  • nav (tree builder)       │
//!                    │  • session (state machine)  │
//!                    │                             │
//!                    │  No I/O. No UI. Pure.       │
//!                    └──────────────┬──────────────┘
//!                                   │
//!               ┌───────────────────┼───────────────────┐
//!               ▼                   ▼                   ▼
//!        ┌────────────┐      ┌────────────┐      ┌────────────┐
//!        │    TUI     │      │   fetch    │      │   other    │
//!        │    Host    │      │  (reqwest) │      │   hosts    │
//!        │ (ratatui)  │      │            │      │  (future)  │
//!        └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`]: typed view over the remote JSON configuration
//! - [`resolver`]: maps an item's declared kind to a screen renderer
//! - [`nav`]: builds the drawer → tabs → stack navigation tree
//! - [`session`]: the `Uninitialized → Loading → Ready | Failed` lifecycle
//! - [`config`]: local settings (endpoint, navigation policy)

pub mod config;
pub mod menu;
pub mod nav;
pub mod resolver;
pub mod session;
