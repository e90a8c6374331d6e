use std::fmt;

pub const QUOTE_CHAR: char = '\'';

/// Wraps `text` in single quotes. Quotes inside `text` are kept as they are.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2 * QUOTE_CHAR.len_utf8());
    out.push(QUOTE_CHAR);
    out.push_str(text);
    out.push(QUOTE_CHAR);
    out
}

/// Display adapter for [`quote`] that writes straight into a formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        f.write_char(QUOTE_CHAR)?;
        f.write_str(self.0)?;
        f.write_char(QUOTE_CHAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_verbatim() {
        assert_eq!(quote("abc"), "'abc'");
        assert_eq!(quote(""), "''");
        assert_eq!(quote("it's"), "'it's'");
    }

    #[test]
    fn display_matches_quote() {
        for text in ["", "x", "a b", "ünï"] {
            assert_eq!(Quoted(text).to_string(), quote(text));
        }
        assert_eq!(format!("id in ({})", Quoted("7")), "id in ('7')");
    }
}
