use crate::error::ConfigError;
use std::fs;
use std::path::Path;

#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits a line on commas and whitespace, dropping empty fields.
pub fn split_fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|f| !f.is_empty())
}

/// Parses ballots from text: any number per line, separated by commas or
/// whitespace. Everything after `#` on a line is a comment.
pub fn parse_ballots(text: &str) -> Result<Vec<f64>, ConfigError> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("");
        for field in split_fields(line) {
            let value = strip_surrounding_quotes(field)
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidBallot {
                    line: i + 1,
                    text: field.to_string(),
                })?;
            out.push(value);
        }
    }
    Ok(out)
}

pub fn read_ballots<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, ConfigError> {
    parse_ballots(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn strip_quotes_works() {
        assert_eq!(strip_surrounding_quotes("'18'"), "18");
        assert_eq!(strip_surrounding_quotes(r#""x""#), "x");
        assert_eq!(strip_surrounding_quotes("nq"), "nq");
        assert_eq!(strip_surrounding_quotes("'"), "'");
    }

    #[test]
    fn mixed_separators_and_comments() {
        let text = "\
# worked example
18, 50
19 52   # late votes
  '30'
";
        assert_eq!(
            parse_ballots(text).unwrap(),
            vec![18.0, 50.0, 19.0, 52.0, 30.0]
        );
    }

    #[test]
    fn blank_input_has_no_ballots() {
        assert!(parse_ballots("").unwrap().is_empty());
        assert!(parse_ballots("\n  \n# nothing\n").unwrap().is_empty());
    }

    #[test]
    fn reports_line_of_bad_ballot() {
        let e = parse_ballots("1, 2\n3, abc\n").unwrap_err();
        match e {
            ConfigError::InvalidBallot { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_ballots_from_file() {
        let mut tf = NamedTempFile::new().unwrap();
        writeln!(tf, "10").unwrap();
        writeln!(tf, "20, 30.5").unwrap();
        assert_eq!(read_ballots(tf.path()).unwrap(), vec![10.0, 20.0, 30.5]);
    }
}
