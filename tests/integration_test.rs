use strcalc::repl::{parse_repl_input, ReplCommand};
use strcalc::{is_valid, sum, CalcError};

#[test]
fn end_to_end_calculation() {
    let input = " 99999999999999999999 , 88888888888888888888, 99999999998899999";

    assert!(is_valid(input), "Should accept a well-formed comma list");

    let total = sum(input).expect("Validated input should sum");
    assert_eq!(total, "188888888888888888887");

    // A validator-approved string stays approved; no hidden state
    assert!(is_valid(input));
    assert_eq!(sum(input).unwrap(), total);
}

#[test]
fn end_to_end_rejection() {
    let input = "1, 2, three";

    assert!(!is_valid(input));
    assert_eq!(sum(input), Err(CalcError::InvalidInput));
    assert_eq!(sum(input).unwrap_err().to_string(), "Invalid input");
}

#[test]
fn repl_line_drives_calculator() {
    let line = "1, 2, 3";

    match parse_repl_input(line) {
        ReplCommand::Calculate(text) => {
            assert!(is_valid(&text));
            assert_eq!(sum(&text).unwrap(), "6");
        }
        other => panic!("Expected Calculate, got {:?}", other),
    }

    assert_eq!(parse_repl_input(":q"), ReplCommand::Quit);
}

#[test]
fn empty_repl_line_fails_validation() {
    match parse_repl_input("") {
        ReplCommand::Calculate(text) => {
            assert!(!is_valid(&text));
            assert_eq!(sum(&text), Err(CalcError::InvalidInput));
        }
        other => panic!("Expected Calculate, got {:?}", other),
    }
}
