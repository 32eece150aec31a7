use anyhow::{Context, Result, bail};

pub const USAGE: &str = "usage: mygrep [-o] [-d|--debug] -E <pattern>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pattern: String,
    pub use_o: bool,
    pub debug: bool,
}

/// Parses the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut pattern = None;
    let mut use_o = false;
    let mut debug = false;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-E" => {
                let value = args.next().context("option -E requires a pattern")?;
                pattern = Some(value);
            }
            "-o" => use_o = true,
            "-d" | "--debug" => debug = true,
            other => bail!("unexpected argument `{other}`"),
        }
    }

    let pattern = pattern.context("missing -E <pattern>")?;
    Ok(Config {
        pattern,
        use_o,
        debug,
    })
}
