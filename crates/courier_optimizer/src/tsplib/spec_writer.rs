use std::fmt::{self, Display, Formatter};

/// Writes TSPLIB's `KEY: VALUE` headers and whitespace separated rows.
pub(crate) struct SpecWriter<'a, 'b>(&'a mut Formatter<'b>);

impl<'a, 'b> SpecWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut Formatter<'b>) -> Self {
        Self(f)
    }

    pub(crate) fn line<T: Display>(&mut self, value: T) -> fmt::Result {
        writeln!(self.0, "{value}")
    }

    pub(crate) fn kv_colon<T: Display>(&mut self, key: &str, value: T) -> fmt::Result {
        writeln!(self.0, "{key}: {value}")
    }

    pub(crate) fn row<T: Display>(&mut self, row: &[T]) -> fmt::Result {
        let mut separator = "";
        for value in row {
            write!(self.0, "{separator}{value}")?;
            separator = " ";
        }

        if row.is_empty() {
            Ok(())
        } else {
            writeln!(self.0)
        }
    }
}
