use super::LineSink;

impl<W> LineSink<W> {
    /// Creates a sink around `writer` with an empty encode buffer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: Vec::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for LineSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
