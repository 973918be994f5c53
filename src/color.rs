use winnow::prelude::*;
use winnow::combinator::{alt, preceded};
use winnow::token::take_while;

/// Validate a colour value destined for a vertex style string.
///
/// Accepts `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `none`, or a bare alphabetic
/// colour name. The value is returned verbatim so output stays byte-for-byte
/// what the caller supplied.
pub fn parse_color(input: &str) -> Result<&str, String> {
    color.parse(input).map_err(|_| {
        let shown = if input.chars().count() > 20 {
            format!("{}...", input.chars().take(20).collect::<String>())
        } else {
            input.to_string()
        };
        format!("invalid color `{shown}`")
    })
}

fn color<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    alt((hex_color, named_color)).parse_next(input)
}

fn hex_color<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    preceded('#', take_while(3..=8, |c: char| c.is_ascii_hexdigit()))
        .verify(|digits: &str| matches!(digits.len(), 3 | 6 | 8))
        .take()
        .parse_next(input)
}

// `none` is covered here too.
fn named_color<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_forms() {
        assert_eq!(parse_color("#FFF"), Ok("#FFF"));
        assert_eq!(parse_color("#a1b2c3"), Ok("#a1b2c3"));
        assert_eq!(parse_color("#a1b2c3ff"), Ok("#a1b2c3ff"));
    }

    #[test]
    fn named_forms() {
        assert_eq!(parse_color("white"), Ok("white"));
        assert_eq!(parse_color("none"), Ok("none"));
    }

    #[test]
    fn wrong_hex_length_rejected() {
        assert!(parse_color("#FFFF").is_err());
        assert!(parse_color("#FFFFFFF").is_err());
        assert!(parse_color("#").is_err());
    }

    #[test]
    fn style_injection_rejected() {
        let err = parse_color("red;shape=ellipse").unwrap_err();
        assert_eq!(err, "invalid color `red;shape=ellipse`");
    }

    #[test]
    fn empty_rejected() {
        assert!(parse_color("").is_err());
    }

    #[test]
    fn long_value_truncated_in_message() {
        let err = parse_color("#ZZZZZZZZZZZZZZZZZZZZZZZZ").unwrap_err();
        assert!(err.ends_with("...`"), "got: {err}");
    }
}
