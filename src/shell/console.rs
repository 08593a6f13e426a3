use std::io::{self, Write};

use crate::highlight::SyntaxHighlighter;

/// Everything the user sees goes through here, on a single stream, so
/// prompts and results stay in order.
pub struct Console<W> {
    out: W,
    highlighter: SyntaxHighlighter,
}

impl<W: Write> Console<W> {
    pub fn new(out: W, highlighter: SyntaxHighlighter) -> Self {
        Self { out, highlighter }
    }

    pub fn plain(out: W) -> Self {
        Self::new(out, SyntaxHighlighter::plain())
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        let styled = self.highlighter.highlight_success(text);
        self.line(&styled)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let styled = self.highlighter.highlight_error(text);
        self.line(&styled)
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        let styled = self.highlighter.highlight_notice(text);
        self.line(&styled)
    }

    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
