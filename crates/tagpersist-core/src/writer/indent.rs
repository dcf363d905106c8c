use std::ops::{Deref, DerefMut};

use super::MarkupWriter;

/// Increments writer indentation for the lifetime of the scope
///
/// The depth recorded on entry is restored on drop, so every exit path of a
/// nested region (including `?` propagation and unwinding) leaves the writer
/// at its pre-region depth.
pub struct IndentScope<'w> {
    writer: &'w mut dyn MarkupWriter,
    restore: usize,
}

impl<'w> IndentScope<'w> {
    pub fn enter(writer: &'w mut dyn MarkupWriter) -> Self {
        let restore = writer.indent();
        writer.set_indent(restore + 1);
        Self { writer, restore }
    }
}

impl<'w> Deref for IndentScope<'w> {
    type Target = dyn MarkupWriter + 'w;

    fn deref(&self) -> &Self::Target {
        &*self.writer
    }
}

impl<'w> DerefMut for IndentScope<'w> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.writer
    }
}

impl Drop for IndentScope<'_> {
    fn drop(&mut self) {
        self.writer.set_indent(self.restore);
    }
}
