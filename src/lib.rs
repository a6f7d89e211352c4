//! Grid-based snake simulation.
//!
//! The simulation core ([`grid`], [`snake`], [`food`], [`game`]) is a
//! self-contained state machine: an external driver calls
//! [`game::GameState::step`] once per logical tick and reads the resulting
//! state back to draw a frame. Everything terminal-related ([`input`],
//! [`renderer`], [`runtime`]) is that driver, kept strictly outside the
//! core.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod runtime;
pub mod settings;
pub mod snake;
pub mod theme;
