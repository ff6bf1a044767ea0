/// Commands that can be parsed from REPL input
///
/// System commands control the loop; anything else is handed to the
/// calculator as a candidate number list.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    /// Quit the application
    Quit,

    /// Show help information
    Help,

    /// Validate and sum a comma list of numbers
    Calculate(String),
}
