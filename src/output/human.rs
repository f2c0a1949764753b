#![forbid(unsafe_code)]

//! Human-readable console output with colorization support

use crate::cli::usage;
use crate::config::ColorOption;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Console writing to the process's stdout and stderr
pub type StandardConsole = Console<StandardStream, StandardStream>;

/// Pair of output streams: the summary goes to `out`, diagnostics to `err`
///
/// Colour only decorates; the text of every line is the same with and
/// without it.
pub struct Console<O, E> {
    out: O,
    err: E,
}

impl StandardConsole {
    /// Console on stdout/stderr honouring the configured colour preference
    pub fn standard(color: ColorOption) -> Self {
        let out = color_choice(color, io::stdout().is_terminal());
        let err = color_choice(color, io::stderr().is_terminal());
        Console::new(StandardStream::stdout(out), StandardStream::stderr(err))
    }
}

/// Map the config option to a termcolor choice for one stream
fn color_choice(option: ColorOption, is_terminal: bool) -> ColorChoice {
    match option {
        ColorOption::Always => ColorChoice::Always,
        ColorOption::Never => ColorChoice::Never,
        ColorOption::Auto if is_terminal => ColorChoice::Auto,
        ColorOption::Auto => ColorChoice::Never,
    }
}

impl<O: WriteColor, E: WriteColor> Console<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Console { out, err }
    }

    /// Product banner, printed in bold
    pub fn banner(&mut self, text: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "{}", text)?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// A `label: value` summary line with the label in bold
    pub fn field(&mut self, label: &str, value: &str) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "{}:", label)?;
        self.out.reset()?;
        writeln!(self.out, " {}", value)
    }

    /// Usage text on stdout, for `--help`
    pub fn usage(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", usage())
    }

    /// Non-fatal warning on stderr
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.err.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        write!(self.err, "{}", message)?;
        self.err.reset()?;
        writeln!(self.err)
    }

    /// Error message on stderr
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.err
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(self.err, "{}", message)?;
        self.err.reset()?;
        writeln!(self.err)
    }

    /// Error message followed by the usage text, both on stderr
    pub fn usage_error(&mut self, message: &str) -> io::Result<()> {
        self.error(message)?;
        writeln!(self.err, "{}", usage())
    }

    /// Flush both streams so nothing interleaves with a child's output
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }

    pub fn stdout(&self) -> &O {
        &self.out
    }

    pub fn stderr(&self) -> &E {
        &self.err
    }
}
