//! crates/logging-sink/src/scratch.rs
//! Message rendering with a fixed inline buffer and an exact-size spill.

use std::fmt::{self, Write as _};

/// Capacity of the inline rendering buffer.
pub const INLINE_CAPACITY: usize = 16 * 1024;

/// Reusable buffer that renders [`fmt::Arguments`] without truncating.
///
/// Messages up to [`INLINE_CAPACITY`] bytes are rendered into storage held by
/// the scratch value itself. Longer messages are measured during the first
/// pass, then rendered a second time into a heap buffer of exactly that
/// size. The spill buffer is released by [`release`](Self::release), by the
/// next render, or when the scratch is dropped.
///
/// # Examples
///
/// ```
/// use logging_sink::LineScratch;
///
/// let mut scratch = LineScratch::new();
/// assert_eq!(scratch.render(format_args!("boom {}", 7)), Ok("boom 7"));
///
/// let long = "x".repeat(20_000);
/// let rendered = scratch.render(format_args!("{long}")).unwrap();
/// assert_eq!(rendered.len(), 20_000);
/// ```
pub struct LineScratch {
    inline: [u8; INLINE_CAPACITY],
    spill: Option<String>,
}

impl LineScratch {
    /// Creates an empty scratch buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inline: [0; INLINE_CAPACITY],
            spill: None,
        }
    }

    /// Renders `args` and returns the complete text.
    ///
    /// Returns [`fmt::Error`] when one of the formatted values reports a
    /// failure; callers that treat logging as best-effort drop the message.
    pub fn render(&mut self, args: fmt::Arguments<'_>) -> Result<&str, fmt::Error> {
        self.spill = None;

        // Literal-only messages skip the formatting machinery.
        if let Some(text) = args.as_str() {
            if text.len() <= INLINE_CAPACITY {
                self.inline[..text.len()].copy_from_slice(text.as_bytes());
                return std::str::from_utf8(&self.inline[..text.len()]).map_err(|_| fmt::Error);
            }
        }

        let mut cursor = InlineCursor {
            buffer: &mut self.inline[..],
            len: 0,
            required: 0,
        };
        cursor.write_fmt(args)?;

        if cursor.required <= INLINE_CAPACITY {
            let len = cursor.len;
            return std::str::from_utf8(&self.inline[..len]).map_err(|_| fmt::Error);
        }

        let mut spill = String::with_capacity(cursor.required);
        spill.write_fmt(args)?;
        Ok(self.spill.insert(spill).as_str())
    }

    /// Frees the heap buffer left by an oversized render, if any.
    pub fn release(&mut self) {
        self.spill = None;
    }

    /// Reports whether the last render spilled onto the heap.
    #[must_use]
    pub fn spilled(&self) -> bool {
        self.spill.is_some()
    }
}

impl Default for LineScratch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LineScratch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineScratch")
            .field("capacity", &INLINE_CAPACITY)
            .field("spilled", &self.spilled())
            .finish()
    }
}

/// Copies whole `str` pieces while they fit and keeps measuring afterwards.
struct InlineCursor<'a> {
    buffer: &'a mut [u8],
    len: usize,
    required: usize,
}

impl fmt::Write for InlineCursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.required + s.len();
        if self.required == self.len && end <= self.buffer.len() {
            self.buffer[self.len..end].copy_from_slice(s.as_bytes());
            self.len = end;
        }
        self.required = end;
        Ok(())
    }
}
