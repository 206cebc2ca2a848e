//! Command handler layer.
//!
//! ## Files
//! - `direct.rs` — non-interactive subcommands (`tools`, `show`,
//!   `template ...`) with text and `--json` output.
//! - `interactive.rs` — the menu-driven wizard (default surface).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod direct;
pub mod interactive;

pub use direct::handle_direct;
