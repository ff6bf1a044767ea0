use std::io::{self, BufRead, Write};

use strcalc::repl::{parse_repl_input, ReplCommand};
use strcalc::{is_valid, sum};

const PROMPT: &str = "> ";
const INVALID_MSG: &str = "Make sure you enter numbers correctly!";

fn print_help() {
    println!("Enter numbers separated by comma: Example 1,2,3");
    println!("  :q, :quit   quit");
    println!("  :h, :help   show this help");
}

fn run_calculation(text: &str) {
    // Validate first; a failed sum after that is only a backstop
    if !is_valid(text) {
        println!("{}", INVALID_MSG);
        return;
    }

    match sum(text) {
        Ok(total) => println!("Result: {}", total),
        Err(_) => println!("{}", INVALID_MSG),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("String Calculator");
    print_help();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match parse_repl_input(line.trim_end_matches(['\r', '\n'])) {
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::Calculate(text) => run_calculation(&text),
        }
    }

    Ok(())
}
