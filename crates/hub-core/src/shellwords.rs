//! Shell-style word splitting for user-configured pager commands.
//!
//! Follows POSIX shell quoting closely enough for `$PAGER` values:
//! - space, tab and newline separate words
//! - single quotes preserve everything literally
//! - double quotes allow backslash escapes of `$`, `` ` ``, `"`, `\` and newline
//! - outside quotes a backslash escapes the next character, and a
//!   backslash-newline pair is a line continuation
//!
//! No expansion of any kind is performed.

use std::str::Chars;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShellWordsError {
    #[error("unterminated single-quoted string")]
    UnterminatedSingleQuote,
    #[error("unterminated double-quoted string")]
    UnterminatedDoubleQuote,
    #[error("unterminated backslash-escape")]
    UnterminatedEscape,
}

const SEPARATORS: [char; 3] = [' ', '\t', '\n'];
const DOUBLE_QUOTE_ESCAPES: [char; 5] = ['$', '`', '"', '\\', '\n'];

/// Split `input` into words the way a shell would, without expansion.
pub fn split(input: &str) -> Result<Vec<String>, ShellWordsError> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        match c {
            c if SEPARATORS.contains(&c) => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            '\\' => match chars.next() {
                None => return Err(ShellWordsError::UnterminatedEscape),
                // Line continuation
                Some('\n') => {}
                Some(escaped) => {
                    word.push(escaped);
                    in_word = true;
                }
            },
            '\'' => {
                read_single_quoted(&mut chars, &mut word)?;
                in_word = true;
            }
            '"' => {
                read_double_quoted(&mut chars, &mut word)?;
                in_word = true;
            }
            other => {
                word.push(other);
                in_word = true;
            }
        }
    }

    if in_word {
        words.push(word);
    }
    Ok(words)
}

fn read_single_quoted(chars: &mut Chars<'_>, word: &mut String) -> Result<(), ShellWordsError> {
    for c in chars.by_ref() {
        if c == '\'' {
            return Ok(());
        }
        word.push(c);
    }
    Err(ShellWordsError::UnterminatedSingleQuote)
}

fn read_double_quoted(chars: &mut Chars<'_>, word: &mut String) -> Result<(), ShellWordsError> {
    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(()),
            '\\' => match chars.next() {
                None => break,
                Some('\n') => {}
                Some(escaped) if DOUBLE_QUOTE_ESCAPES.contains(&escaped) => word.push(escaped),
                Some(other) => {
                    word.push('\\');
                    word.push(other);
                }
            },
            other => word.push(other),
        }
    }
    Err(ShellWordsError::UnterminatedDoubleQuote)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use proptest::prelude::*;

    use super::*;

    fn words(input: &str) -> Vec<String> {
        split(input).unwrap_or_default()
    }

    #[test]
    fn test_split_plain_words() {
        assert_eq!(words("my pager --flag"), vec!["my", "pager", "--flag"]);
    }

    #[test]
    fn test_split_collapses_whitespace() {
        assert_eq!(words("  less\t-R \n "), vec!["less", "-R"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split(""), Ok(vec![]));
        assert_eq!(split("   "), Ok(vec![]));
    }

    #[test]
    fn test_split_quoted_spaces() {
        assert_eq!(
            words(r#"less --prompt "page %d" 'a  b'"#),
            vec!["less", "--prompt", "page %d", "a  b"]
        );
    }

    #[test]
    fn test_split_adjacent_parts_join() {
        assert_eq!(words(r#"a"b c"'d'e"#), vec!["ab cde"]);
    }

    #[test]
    fn test_split_empty_quotes_yield_empty_word() {
        assert_eq!(words("cmd '' \"\""), vec!["cmd", "", ""]);
    }

    #[test]
    fn test_split_backslash_outside_quotes() {
        assert_eq!(words(r"a\ b c\\d"), vec!["a b", r"c\d"]);
    }

    #[test]
    fn test_split_line_continuation() {
        assert_eq!(words("less \\\n-R"), vec!["less", "-R"]);
        assert_eq!(words("ab\\\ncd"), vec!["abcd"]);
    }

    #[test]
    fn test_split_double_quote_escapes() {
        assert_eq!(words(r#""\$x \"q\" \\ \n""#), vec![r#"$x "q" \ \n"#]);
    }

    #[test]
    fn test_split_single_quote_is_literal() {
        assert_eq!(words(r"'\n \' "), vec![r"\n \"]);
    }

    #[test]
    fn test_split_unterminated_single_quote() {
        assert_eq!(
            split("less 'oops"),
            Err(ShellWordsError::UnterminatedSingleQuote)
        );
    }

    #[test]
    fn test_split_unterminated_double_quote() {
        assert_eq!(
            split("less \"oops"),
            Err(ShellWordsError::UnterminatedDoubleQuote)
        );
        assert_eq!(
            split("less \"oops\\"),
            Err(ShellWordsError::UnterminatedDoubleQuote)
        );
    }

    #[test]
    fn test_split_trailing_backslash() {
        assert_eq!(split("less \\"), Err(ShellWordsError::UnterminatedEscape));
    }

    proptest! {
        #[test]
        fn prop_unquoted_words_round_trip(parts in prop::collection::vec("[a-zA-Z0-9_./-]{1,12}", 0..8)) {
            let joined = parts.join(" ");
            prop_assert_eq!(split(&joined), Ok(parts));
        }

        #[test]
        fn prop_single_quoting_preserves_word(word in "[^']{0,24}") {
            let quoted = format!("'{word}'");
            prop_assert_eq!(split(&quoted), Ok(vec![word]));
        }
    }
}
