use std::io::Write;

use super::MarkupWriter;
use crate::encode::html_attribute_encode;
use crate::errors::Result;
use crate::options::PersistOptions;

const TAG_LEFT_CHAR: &str = "<";
const TAG_RIGHT_CHAR: &str = ">";
const END_TAG_LEFT_CHARS: &str = "</";
const SELF_CLOSING_TAG_END: &str = " />";

/// Markup writer over a byte sink
///
/// Indentation is written lazily: after a line break the next write is
/// prefixed with `indent` copies of the tab string.
#[derive(Debug)]
pub struct HtmlTextWriter<W: Write> {
    inner: W,
    indent: usize,
    tabs_pending: bool,
    tab_string: String,
    new_line: String,
}

impl<W: Write> HtmlTextWriter<W> {
    /// Writer indenting with tabs and ending lines with `\n`
    pub fn new(inner: W) -> Self {
        Self::with_options(inner, &PersistOptions::default())
    }

    /// Writer using the indentation unit and line terminator of `options`
    pub fn with_options(inner: W, options: &PersistOptions) -> Self {
        Self {
            inner,
            indent: 0,
            tabs_pending: true,
            tab_string: options.tab_string.clone(),
            new_line: options.new_line.clone(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn output_tabs(&mut self) -> Result<()> {
        if self.tabs_pending {
            for _ in 0..self.indent {
                self.inner.write_all(self.tab_string.as_bytes())?;
            }
            self.tabs_pending = false;
        }
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.output_tabs()?;
        self.inner.write_all(text.as_bytes())?;
        Ok(())
    }
}

impl<W: Write> MarkupWriter for HtmlTextWriter<W> {
    fn write_begin_tag(&mut self, name: &str) -> Result<()> {
        self.write_str(TAG_LEFT_CHAR)?;
        self.write_str(name)
    }

    fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.write_str(" ")?;
        self.write_str(name)?;
        self.write_str("=\"")?;
        self.write_str(&html_attribute_encode(value))?;
        self.write_str("\"")
    }

    fn write_full_begin_tag_close(&mut self) -> Result<()> {
        self.write_str(TAG_RIGHT_CHAR)
    }

    fn write_self_closing_tag_close(&mut self) -> Result<()> {
        self.write_str(SELF_CLOSING_TAG_END)
    }

    fn write_end_tag(&mut self, name: &str) -> Result<()> {
        self.write_str(END_TAG_LEFT_CHARS)?;
        self.write_str(name)?;
        self.write_str(TAG_RIGHT_CHAR)
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.write_str(text)
    }

    fn write_line(&mut self) -> Result<()> {
        self.inner.write_all(self.new_line.as_bytes())?;
        self.tabs_pending = true;
        Ok(())
    }

    fn indent(&self) -> usize {
        self.indent
    }

    fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }
}
