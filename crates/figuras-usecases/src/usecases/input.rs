//! Validated numeric reads.
//!
//! Each reader loops until a line passes validation, printing a rejection
//! message for every bad line. There is no retry limit; only end of input or
//! a console failure stops the loop.

use crate::usecases::messages;
use crate::usecases::ports::Console;
use crate::usecases::ports::ConsoleError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRejection {
    /// Not a number of the expected type.
    Malformed,
    /// Real number that is zero, negative or NaN.
    NotPositive,
    /// Integer below zero.
    Negative,
    /// Menu option outside `[0, max]`.
    OutOfRange,
}

pub fn parse_positive_double(line: &str) -> Result<f64, InputRejection> {
    let value: f64 = line
        .trim()
        .parse()
        .map_err(|_| InputRejection::Malformed)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InputRejection::NotPositive)
    }
}

/// Accepts any 32-bit integer text that is zero or greater.
pub fn parse_non_negative_int(line: &str) -> Result<u32, InputRejection> {
    let value: i32 = line
        .trim()
        .parse()
        .map_err(|_| InputRejection::Malformed)?;
    u32::try_from(value).map_err(|_| InputRejection::Negative)
}

pub fn parse_menu_option(line: &str, max: u8) -> Result<u8, InputRejection> {
    let value: i32 = line
        .trim()
        .parse()
        .map_err(|_| InputRejection::Malformed)?;
    match u8::try_from(value) {
        Ok(option) if option <= max => Ok(option),
        _ => Err(InputRejection::OutOfRange),
    }
}

pub fn read_positive_double<C: Console + ?Sized>(console: &mut C) -> Result<f64, ConsoleError> {
    read_until_valid(console, None, parse_positive_double, |rejection| {
        match rejection {
            InputRejection::NotPositive => messages::NOT_POSITIVE,
            _ => messages::INVALID_NUMBER,
        }
    })
}

pub fn read_positive_int<C: Console + ?Sized>(console: &mut C) -> Result<u32, ConsoleError> {
    read_until_valid(console, None, parse_non_negative_int, |rejection| {
        match rejection {
            InputRejection::Negative => messages::NEGATIVE_INTEGER,
            _ => messages::INVALID_INTEGER,
        }
    })
}

/// Prompts with `Opción: ` before every attempt.
pub fn read_menu_option<C: Console + ?Sized>(console: &mut C, max: u8) -> Result<u8, ConsoleError> {
    read_until_valid(
        console,
        Some(messages::OPTION_PROMPT),
        |line| parse_menu_option(line, max),
        |rejection| match rejection {
            InputRejection::OutOfRange => messages::OPTION_OUT_OF_RANGE,
            _ => messages::INVALID_OPTION,
        },
    )
}

fn read_until_valid<C, T>(
    console: &mut C,
    prompt: Option<&str>,
    parse: impl Fn(&str) -> Result<T, InputRejection>,
    message: impl Fn(InputRejection) -> &'static str,
) -> Result<T, ConsoleError>
where
    C: Console + ?Sized,
{
    loop {
        if let Some(prompt) = prompt {
            console.write(prompt)?;
        }
        let line = console.read_line()?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(rejection) => console.notify(message(rejection))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedConsole;
    use proptest::prelude::*;

    #[test]
    fn test_parse_positive_double() {
        assert_eq!(parse_positive_double("2"), Ok(2.0));
        assert_eq!(parse_positive_double("  6.88 "), Ok(6.88));
        assert_eq!(parse_positive_double("1e3"), Ok(1000.0));
        assert_eq!(parse_positive_double("0"), Err(InputRejection::NotPositive));
        assert_eq!(parse_positive_double("-3"), Err(InputRejection::NotPositive));
        assert_eq!(parse_positive_double("NaN"), Err(InputRejection::NotPositive));
        assert_eq!(parse_positive_double("abc"), Err(InputRejection::Malformed));
        assert_eq!(parse_positive_double(""), Err(InputRejection::Malformed));
        assert_eq!(parse_positive_double("3,5"), Err(InputRejection::Malformed));
    }

    #[test]
    fn test_parse_non_negative_int() {
        assert_eq!(parse_non_negative_int("0"), Ok(0));
        assert_eq!(parse_non_negative_int(" 10 "), Ok(10));
        assert_eq!(parse_non_negative_int("+7"), Ok(7));
        assert_eq!(parse_non_negative_int("2147483647"), Ok(2_147_483_647));
        assert_eq!(parse_non_negative_int("-1"), Err(InputRejection::Negative));
        assert_eq!(parse_non_negative_int("2.5"), Err(InputRejection::Malformed));
        assert_eq!(
            parse_non_negative_int("2147483648"),
            Err(InputRejection::Malformed)
        );
    }

    #[test]
    fn test_parse_menu_option() {
        assert_eq!(parse_menu_option("0", 5), Ok(0));
        assert_eq!(parse_menu_option("5", 5), Ok(5));
        assert_eq!(parse_menu_option(" 3\t", 3), Ok(3));
        assert_eq!(parse_menu_option("6", 5), Err(InputRejection::OutOfRange));
        assert_eq!(parse_menu_option("-1", 5), Err(InputRejection::OutOfRange));
        assert_eq!(parse_menu_option("300", 5), Err(InputRejection::OutOfRange));
        assert_eq!(parse_menu_option("abc", 5), Err(InputRejection::Malformed));
        assert_eq!(parse_menu_option("1.0", 5), Err(InputRejection::Malformed));
    }

    #[test]
    fn test_read_positive_double_retries_with_distinct_messages() {
        let mut console = ScriptedConsole::new(["abc", "0", "-2", "2.5"]);
        assert_eq!(read_positive_double(&mut console).unwrap(), 2.5);
        assert_eq!(
            console.notices(),
            [
                messages::INVALID_NUMBER,
                messages::NOT_POSITIVE,
                messages::NOT_POSITIVE
            ]
        );
        assert_eq!(console.remaining_input(), 0);
    }

    #[test]
    fn test_read_positive_int_retries_with_distinct_messages() {
        let mut console = ScriptedConsole::new(["x", "-4", "1.5", "0"]);
        assert_eq!(read_positive_int(&mut console).unwrap(), 0);
        assert_eq!(
            console.notices(),
            [
                messages::INVALID_INTEGER,
                messages::NEGATIVE_INTEGER,
                messages::INVALID_INTEGER
            ]
        );
    }

    #[test]
    fn test_read_menu_option_prompts_each_attempt() {
        let mut console = ScriptedConsole::new(["abc", "9", "2"]);
        assert_eq!(read_menu_option(&mut console, 5).unwrap(), 2);
        assert_eq!(
            console.output(),
            "Opción: Por favor ingresa un número válido.\n\
             Opción: Opción fuera de rango.\n\
             Opción: "
        );
    }

    #[test]
    fn test_readers_surface_end_of_input() {
        let mut console = ScriptedConsole::new(["abc"]);
        let err = read_positive_double(&mut console).unwrap_err();
        assert!(err.is_closed());

        let mut console = ScriptedConsole::new(Vec::<String>::new());
        assert!(read_menu_option(&mut console, 3).unwrap_err().is_closed());
    }

    #[test]
    fn test_readers_only_consume_what_they_need() {
        let mut console = ScriptedConsole::new(["4", "5"]);
        assert_eq!(read_positive_int(&mut console).unwrap(), 4);
        assert_eq!(console.remaining_input(), 1);
    }

    proptest! {
        #[test]
        fn positive_double_never_accepts_non_positive(input in ".*") {
            if let Ok(value) = parse_positive_double(&input) {
                prop_assert!(value > 0.0);
            }
        }

        #[test]
        fn positive_double_accepts_every_positive_value(value in 1e-300f64..1e300) {
            prop_assert_eq!(parse_positive_double(&value.to_string()), Ok(value));
        }

        #[test]
        fn non_negative_int_matches_sign(value in any::<i32>()) {
            let parsed = parse_non_negative_int(&value.to_string());
            if value >= 0 {
                prop_assert_eq!(parsed, Ok(value as u32));
            } else {
                prop_assert_eq!(parsed, Err(InputRejection::Negative));
            }
        }

        #[test]
        fn menu_option_stays_in_range(input in ".*", max in 0u8..10) {
            if let Ok(option) = parse_menu_option(&input, max) {
                prop_assert!(option <= max);
            }
        }

        #[test]
        fn read_menu_option_skips_invalid_lines(
            noise in proptest::collection::vec("[a-z]{1,5}|-[1-9][0-9]{0,2}|[6-9]", 0..8),
            choice in 0u8..=5,
        ) {
            let mut lines = noise.clone();
            lines.push(choice.to_string());
            let mut console = ScriptedConsole::new(lines);
            prop_assert_eq!(read_menu_option(&mut console, 5).unwrap(), choice);
            prop_assert_eq!(console.notices().len(), noise.len());
        }
    }
}
