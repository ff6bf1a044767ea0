//! REPL (Read-Eval-Print Loop) module
//!
//! Provides line classification for the interactive calculator.
//!
//! ## Module Structure
//!
//! - **command.rs**: Command definitions
//! - **parser.rs**: Manual string parsing for the `:` prefix
//!
//! ## Usage in main.rs
//!
//! ```rust,ignore
//! use strcalc::repl::{parse_repl_input, ReplCommand};
//!
//! for line in stdin.lines() {
//!     match parse_repl_input(&line?) {
//!         ReplCommand::Quit => break,
//!         ReplCommand::Help => print_help(),
//!         ReplCommand::Calculate(text) => run_calculation(&text),
//!     }
//! }
//! ```

pub mod command;
pub mod parser;

// Re-export public types
pub use command::ReplCommand;
pub use parser::parse_repl_input;
