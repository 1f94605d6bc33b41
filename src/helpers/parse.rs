use std::str::FromStr;

use combine::error::StreamError;
use combine::parser::char::{crlf, digit, newline};
use combine::stream::StreamErrorFor;
use combine::{choice, easy, many1, sep_end_by1, token, EasyParser, ParseError, Parser, Stream};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Parses an unsigned decimal integer, e.g. `"42"`.
pub fn decimal_integer<Input, T>() -> impl Parser<Input, Output = T>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    many1::<String, _, _>(digit())
        .and_then(|digits| digits.parse::<T>().map_err(StreamErrorFor::<Input>::other))
}

/// Parses two integers separated by a comma, e.g. `"4,10"`.
pub fn integer_pair<Input, T>() -> impl Parser<Input, Output = (T, T)>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    (decimal_integer(), token(','), decimal_integer()).map(|(a, _, b)| (a, b))
}

/// Parses a block of single-digit cells, one row per line:
///
/// ```text
/// 2413
/// 3215
/// ```
///
/// Both `\n` and `\r\n` line endings are accepted. Rows are not checked for
/// equal length here.
pub fn digit_rows<Input>() -> impl Parser<Input, Output = Vec<Vec<u32>>>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let cell = digit().map(|c: char| u32::from(c as u8 - b'0'));
    let row = many1::<Vec<u32>, _, _>(cell);
    let line_ending = choice((newline(), crlf()));

    sep_end_by1(row, line_ending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(from_str("42", decimal_integer()), Ok(42u32));
        assert_eq!(from_str("0", decimal_integer()), Ok(0usize));
        assert!(from_str("4x", decimal_integer::<_, u32>()).is_err());
        assert!(from_str("", decimal_integer::<_, u32>()).is_err());
        assert!(from_str("99999999999", decimal_integer::<_, u32>()).is_err());
    }

    #[test]
    fn pairs() {
        assert_eq!(from_str("4,10", integer_pair()), Ok((4u32, 10u32)));
        assert!(from_str("4, 10", integer_pair::<_, u32>()).is_err());
        assert!(from_str("4", integer_pair::<_, u32>()).is_err());
    }

    #[test]
    fn digit_grid() {
        assert_eq!(
            from_str("241\n321\n", digit_rows()),
            Ok(vec![vec![2, 4, 1], vec![3, 2, 1]])
        );
        assert_eq!(
            from_str("241\r\n321", digit_rows()),
            Ok(vec![vec![2, 4, 1], vec![3, 2, 1]])
        );
        assert_eq!(from_str("7", digit_rows()), Ok(vec![vec![7]]));
    }

    #[test]
    fn jagged_digit_grid_still_parses() {
        assert_eq!(
            from_str("24\n3\n", digit_rows()),
            Ok(vec![vec![2, 4], vec![3]])
        );
    }

    #[test]
    fn bad_digit_grid() {
        assert!(from_str("", digit_rows()).is_err());
        assert!(from_str("24a\n", digit_rows()).is_err());
        assert!(from_str("24\n\n31", digit_rows()).is_err());
    }
}
