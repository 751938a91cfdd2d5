//! Parsing for the lines typed at the console prompts. Everything here is
//! pure so the console loop only has to decide whether to ask again.

use std::ops::RangeInclusive;

use crate::error::InputError;

/// Allowed number of rows and of columns when asked at the prompt.
pub const DIMENSION_RANGE: RangeInclusive<usize> = 5..=9;

/// Words that end the whole session from any prompt.
const END_SESSION_WORDS: [&str; 3] = ["q", "quit", "exit"];

pub fn is_end_session(line: &str) -> bool {
    let word = line.trim();
    END_SESSION_WORDS
        .iter()
        .any(|end| word.eq_ignore_ascii_case(end))
}

fn parse_in_range(token: &str, range: &RangeInclusive<usize>) -> Result<usize, InputError> {
    let value: i64 = token
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidFormat(token.trim().to_string()))?;
    let (min, max) = (*range.start() as i64, *range.end() as i64);
    if value < min || value > max {
        return Err(InputError::OutOfRange { value, min, max });
    }
    Ok(value as usize)
}

/// Parse a 1-based column number in `1..=max_column`.
pub fn parse_column(line: &str, max_column: usize) -> Result<usize, InputError> {
    parse_in_range(line, &(1..=max_column))
}

/// Parse `"<rows> <columns>"`, accepting spaces, commas or `x` between the
/// two numbers. An empty line selects `default`.
pub fn parse_dimensions(
    line: &str,
    default: (usize, usize),
) -> Result<(usize, usize), InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(default);
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',' || c == 'x' || c == 'X')
        .filter(|token| !token.is_empty())
        .collect();
    let [rows, columns] = tokens.as_slice() else {
        return Err(InputError::InvalidFormat(line.to_string()));
    };

    Ok((
        parse_in_range(rows, &DIMENSION_RANGE)?,
        parse_in_range(columns, &DIMENSION_RANGE)?,
    ))
}

/// Parse a positive number of games. An empty line selects `default`.
pub fn parse_game_count(line: &str, default: usize) -> Result<usize, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(default);
    }
    parse_in_range(line, &(1..=usize::from(u16::MAX)))
}

/// A trimmed player name, or `default` when nothing was typed.
pub fn parse_name(line: &str, default: &str) -> String {
    match line.trim() {
        "" => default.to_string(),
        name => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_session_words() {
        assert!(is_end_session("q"));
        assert!(is_end_session("  Quit \n"));
        assert!(is_end_session("EXIT"));
        assert!(!is_end_session("4"));
        assert!(!is_end_session("quitter"));
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("4\n", 7), Ok(4));
        assert_eq!(parse_column(" 1 ", 7), Ok(1));
        assert_eq!(
            parse_column("0", 7),
            Err(InputError::OutOfRange { value: 0, min: 1, max: 7 })
        );
        assert_eq!(
            parse_column("-2", 7),
            Err(InputError::OutOfRange { value: -2, min: 1, max: 7 })
        );
        assert_eq!(
            parse_column("four", 7),
            Err(InputError::InvalidFormat("four".into()))
        );
        assert!(parse_column("", 7).is_err());
    }

    #[test]
    fn test_parse_dimensions_default_on_empty() {
        assert_eq!(parse_dimensions("\n", (6, 7)), Ok((6, 7)));
    }

    #[test]
    fn test_parse_dimensions_separators() {
        assert_eq!(parse_dimensions("5 9", (6, 7)), Ok((5, 9)));
        assert_eq!(parse_dimensions("8,6", (6, 7)), Ok((8, 6)));
        assert_eq!(parse_dimensions("7x7", (6, 7)), Ok((7, 7)));
        assert_eq!(parse_dimensions(" 9 , 5 ", (6, 7)), Ok((9, 5)));
    }

    #[test]
    fn test_parse_dimensions_rejects_bad_input() {
        assert_eq!(
            parse_dimensions("4 7", (6, 7)),
            Err(InputError::OutOfRange { value: 4, min: 5, max: 9 })
        );
        assert_eq!(
            parse_dimensions("6 10", (6, 7)),
            Err(InputError::OutOfRange { value: 10, min: 5, max: 9 })
        );
        assert!(matches!(
            parse_dimensions("6", (6, 7)),
            Err(InputError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_dimensions("6 7 8", (6, 7)),
            Err(InputError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_dimensions("six seven", (6, 7)),
            Err(InputError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_game_count() {
        assert_eq!(parse_game_count("", 1), Ok(1));
        assert_eq!(parse_game_count("3", 1), Ok(3));
        assert!(matches!(
            parse_game_count("0", 1),
            Err(InputError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            parse_game_count("two", 1),
            Err(InputError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("  Alice \n", "Player 1"), "Alice");
        assert_eq!(parse_name("\n", "Player 2"), "Player 2");
    }
}
