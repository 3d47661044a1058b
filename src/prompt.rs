use anyhow::Result;
use std::io::{self, Write};

/// Prints a question and reads one trimmed line from stdin.
pub fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Parses a 1-based menu answer against `count` options, returning the
/// 0-based index. Non-numeric or out-of-range input yields `None`.
pub fn parse_menu_choice(answer: &str, count: usize) -> Option<usize> {
    let choice = answer.trim().parse::<usize>().ok()?;
    if (1..=count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choice() {
        assert_eq!(parse_menu_choice("1", 3), Some(0));
        assert_eq!(parse_menu_choice(" 3 ", 3), Some(2));
        assert_eq!(parse_menu_choice("0", 3), None);
        assert_eq!(parse_menu_choice("4", 3), None);
        assert_eq!(parse_menu_choice("two", 3), None);
        assert_eq!(parse_menu_choice("", 3), None);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}
