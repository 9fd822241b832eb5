//! pomo - a terminal Pomodoro timer
//!
//! This crate alternates work and break intervals on a wall-clock driven
//! state machine and renders the countdown with ratatui.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod focus;
pub mod identity;
pub mod logging;
pub mod signals;
pub mod tui;

pub use config::Config;
pub use error::PomoError;
pub use focus::{Phase, SessionClock};
