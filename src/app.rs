use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use bytes::{BufMut, Bytes, BytesMut};

use crate::cli::Config;
use mygrep::Regex;

/// Matches the first line of `input` against the configured pattern.
/// Returns whether it matched; with `-o`, the matched text goes to `out`.
pub fn run(cfg: &Config, input: impl Read, mut out: impl Write) -> Result<bool> {
    let regex = Regex::new(&cfg.pattern)
        .with_context(|| format!("invalid pattern `{}`", cfg.pattern))?;
    log::debug!("compiled {regex}: {:?}", regex.pattern());

    let buffer = read_input(input)?;
    let content = std::str::from_utf8(&buffer).context("input is not valid UTF-8")?;
    let line = subject_line(content);

    let matched = regex.find(line);
    log::debug!("line {line:?}: {matched:?}");

    match matched {
        Some(text) => {
            if cfg.use_o {
                write_match(&mut out, buffer.slice_ref(text.as_bytes()))?;
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

// The match is a zero-copy view into the input buffer.
fn write_match(out: &mut impl Write, text: Bytes) -> Result<()> {
    out.write_all(&text).context("failed to write match")?;
    out.write_all(b"\n").context("failed to write match")?;
    Ok(())
}

// Buffered as `Bytes` so matched slices can be handed out without copying.
fn read_input(mut input: impl Read) -> Result<Bytes> {
    let mut writer = BytesMut::new().writer();
    io::copy(&mut input, &mut writer).context("failed to read input")?;
    Ok(writer.into_inner().freeze())
}

// Only the first line is matched; anything after it is ignored.
fn subject_line(content: &str) -> &str {
    let mut lines = content.lines();
    let line = lines.next().unwrap_or("");
    if lines.next().is_some() {
        log::debug!("input has more than one line, matching only the first");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::{run, subject_line};
    use crate::cli::Config;

    fn cfg(pattern: &str, use_o: bool) -> Config {
        Config {
            pattern: pattern.into(),
            use_o,
            debug: false,
        }
    }

    fn run_on(cfg: &Config, input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let matched = run(cfg, input.as_bytes(), &mut out).unwrap();
        (matched, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_match_without_output() {
        assert_eq!(run_on(&cfg("d+g", false), "doog\n"), (true, String::new()));
        assert_eq!(run_on(&cfg("d+g", false), "cat\n"), (false, String::new()));
    }

    #[test]
    fn only_matching_prints_match() {
        assert_eq!(
            run_on(&cfg(r"\d+", true), "order 66 shipped\n"),
            (true, "66\n".into())
        );
        assert_eq!(run_on(&cfg(r"\d+", true), "none\n"), (false, String::new()));
    }

    #[test]
    fn only_matching_slices_non_ascii_and_empty_matches() {
        assert_eq!(
            run_on(&cfg("f.$", true), "café\n"),
            (true, "fé\n".into())
        );
        assert_eq!(run_on(&cfg("^", true), "abc"), (true, "\n".into()));
        assert_eq!(run_on(&cfg("$", true), ""), (true, "\n".into()));
    }

    #[test]
    fn trailing_newline_does_not_block_end_anchor() {
        assert!(run_on(&cfg("dog$", false), "dog\n").0);
        assert!(run_on(&cfg("dog$", false), "dog\r\n").0);
        assert!(run_on(&cfg("^dog$", false), "dog").0);
    }

    #[test]
    fn matches_first_line_only() {
        assert!(!run_on(&cfg("second", false), "first\nsecond\n").0);
        assert_eq!(subject_line("first\nsecond"), "first");
        assert_eq!(subject_line(""), "");
    }

    #[test]
    fn empty_input_is_an_empty_line() {
        assert!(run_on(&cfg("^$", false), "").0);
        assert!(!run_on(&cfg("a", false), "").0);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let err = run(&cfg("[abc", false), "abc".as_bytes(), Vec::new()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "invalid pattern `[abc`: bracket expression opened at offset 0 is never closed"
        );
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let input: &[u8] = &[0x66, 0xff, 0x0a];
        let err = run(&cfg("f", false), input, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }
}
