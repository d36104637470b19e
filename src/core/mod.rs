//! # Core Application Logic
//!
//! The text merger's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (two sources)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • merge() (pure)       │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Storage   │      │ Clipboard  │
//!     │  Adapter   │      │ (key-value │      │  (arboard) │
//!     │ (ratatui)  │      │   file)    │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and `BufferId`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`form`]: `MergerForm`, which runs effects against storage, clipboard and timer
//! - [`merge`]: The line merge function
//! - [`storage`]: Key-value stores
//! - [`persistence`]: Best-effort load/save/clear of the two sources
//! - [`copy_status`]: Revert timer for the "Copied!" indicator
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod copy_status;
pub mod form;
pub mod merge;
pub mod persistence;
pub mod state;
pub mod storage;
