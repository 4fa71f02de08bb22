extern crate balancer_common;
extern crate balancer_session;

use balancer_common::model::PlayerId;
use balancer_session::command::Command;

#[test]
fn test_parse_add() {
    assert_eq!(Command::from_str("add Alice|1500").unwrap(), Command::Add { name: "Alice".to_string(), rating: Some(1500) });
    assert_eq!(Command::from_str("  ADD  Mary Jane | 30000 \n").unwrap(), Command::Add { name: " Mary Jane ".to_string(), rating: Some(30000) });
    assert_eq!(Command::from_str("add a|b|12").unwrap(), Command::Add { name: "a|b".to_string(), rating: Some(12) });
}

#[test]
fn test_parse_add_with_bad_rating() {
    assert_eq!(Command::from_str("add Alice|lots").unwrap(), Command::Add { name: "Alice".to_string(), rating: None });
    assert_eq!(Command::from_str("add Alice|12.5").unwrap(), Command::Add { name: "Alice".to_string(), rating: None });
    assert_eq!(Command::from_str("add |1500").unwrap(), Command::Add { name: "".to_string(), rating: Some(1500) });
}

#[test]
fn test_parse_add_without_separator() {
    assert!(Command::from_str("add Alice 1500").is_err());
    assert!(Command::from_str("add").is_err());
}

#[test]
fn test_parse_remove() {
    assert_eq!(Command::from_str("remove 1700000000000").unwrap(), Command::Remove(PlayerId::new(1700000000000)));
    assert!(Command::from_str("remove alice").is_err());
    assert!(Command::from_str("remove").is_err());
}

#[test]
fn test_parse_keywords() {
    assert_eq!(Command::from_str("balance").unwrap(), Command::Balance);
    assert_eq!(Command::from_str("Reset").unwrap(), Command::Reset);
    assert_eq!(Command::from_str("show").unwrap(), Command::Show);
    assert_eq!(Command::from_str("json").unwrap(), Command::Json);
    assert_eq!(Command::from_str("help").unwrap(), Command::Help);
    assert_eq!(Command::from_str("quit").unwrap(), Command::Quit);
    assert_eq!(Command::from_str("exit").unwrap(), Command::Quit);
    assert!(Command::from_str("shuffle").is_err());
}
