//! Markup writer abstraction
//!
//! The persistence engine emits markup through [`MarkupWriter`], a
//! sequential, indentation-aware sink. [`HtmlTextWriter`] is the standard
//! implementation over any `std::io::Write`.

mod html_text_writer;
mod indent;

pub use html_text_writer::HtmlTextWriter;
pub use indent::IndentScope;

use crate::errors::Result;

/// Sequential, indentation-aware markup sink
///
/// `indent` is the nesting depth used to prefix every line started after a
/// [`write_line`](MarkupWriter::write_line). Callers must restore it after
/// each nested region; see [`IndentScope`].
pub trait MarkupWriter {
    /// Write `<name` and leave the tag open for attributes
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_begin_tag(&mut self, name: &str) -> Result<()>;

    /// Write ` name="value"` into the currently open begin tag
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// Close an open begin tag with `>`
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_full_begin_tag_close(&mut self) -> Result<()>;

    /// Write a complete `<name>`
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_full_begin_tag(&mut self, name: &str) -> Result<()> {
        self.write_begin_tag(name)?;
        self.write_full_begin_tag_close()
    }

    /// Close an open begin tag with ` />`
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_self_closing_tag_close(&mut self) -> Result<()>;

    /// Write `</name>`
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_end_tag(&mut self, name: &str) -> Result<()>;

    /// Write text verbatim
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_raw(&mut self, text: &str) -> Result<()>;

    /// End the current line; the next write is indented
    ///
    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink rejects the write.
    fn write_line(&mut self) -> Result<()>;

    fn indent(&self) -> usize;

    fn set_indent(&mut self, indent: usize);

    /// # Errors
    ///
    /// Returns `PersistError::Io` when the sink fails to flush.
    fn flush(&mut self) -> Result<()>;
}
