use super::ReplCommand;

/// Parse REPL input string into a command
///
/// Supports:
/// - `:q` or `:quit` → Quit command
/// - `:h` or `:help` → Help command
/// - Anything else → Calculate command over the raw line
///
/// The line handed to Calculate is not trimmed or pre-screened here; the
/// validator owns all formatting rules, so an empty or malformed line simply
/// fails validation downstream.
pub fn parse_repl_input(input: &str) -> ReplCommand {
    if let Some(cmd) = input.trim().strip_prefix(':') {
        match cmd {
            "q" | "quit" => return ReplCommand::Quit,
            "h" | "help" => return ReplCommand::Help,
            _ => {}
        }
    }

    ReplCommand::Calculate(input.to_string())
}
