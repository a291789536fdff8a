use crate::compat::Vec;
use crate::error::{ParseError, Result};

/// Byte range into an arena store.
/// Component strings are tracked as offsets into a single buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: u32,
    pub end: u32,
}

/// Backing storage for one parse: heap-allocated or caller-supplied.
#[derive(Debug)]
pub(crate) enum Store<'b> {
    Owned(Vec<u8>),
    Borrowed(&'b mut [u8]),
}

impl Store<'_> {
    fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Owned(v) => v,
            Self::Borrowed(s) => s,
        }
    }

    /// Resolve a span to its string.
    pub(crate) fn span_str(&self, span: Span) -> &str {
        let bytes = &self.as_bytes()[span.start as usize..span.end as usize];
        // Spans only come from Arena::push, which copies from &str at ASCII
        // delimiter boundaries, so the bytes are valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(bytes) }
    }
}

/// Bump arena serving exactly-sized writes out of one pre-sized region.
///
/// Writes hand out successive non-overlapping ranges; nothing is resized or
/// freed individually. A request larger than the remaining capacity fails
/// with `BufferTooSmall` and the arena is left unchanged.
#[derive(Debug)]
pub(crate) struct Arena<'b> {
    store: Store<'b>,
    cap: usize,
    len: usize,
    reserved: usize,
}

impl Arena<'static> {
    /// Arena over a fresh heap buffer of exactly `cap` bytes.
    pub(crate) fn owned(cap: usize) -> Self {
        Self {
            store: Store::Owned(Vec::with_capacity(cap)),
            cap,
            len: 0,
            reserved: 0,
        }
    }
}

impl<'b> Arena<'b> {
    /// Arena over a caller-supplied buffer; capacity is the buffer length.
    pub(crate) fn borrowed(buf: &'b mut [u8]) -> Self {
        let cap = buf.len();
        Self {
            store: Store::Borrowed(buf),
            cap,
            len: 0,
            reserved: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.cap - self.len - self.reserved
    }

    /// Charge `n` bytes against the budget without writing anything.
    /// Used for the record itself, so a zero-capacity buffer never parses.
    pub(crate) fn charge(&mut self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(ParseError::BufferTooSmall);
        }
        self.reserved += n;
        Ok(())
    }

    /// Copy `src` into the arena, case-folded to ASCII lowercase.
    pub(crate) fn push_lower(&mut self, src: &str) -> Result<Span> {
        self.push(src, true)
    }

    /// Copy `src` into the arena verbatim.
    pub(crate) fn push_raw(&mut self, src: &str) -> Result<Span> {
        self.push(src, false)
    }

    fn push(&mut self, src: &str, lower: bool) -> Result<Span> {
        let n = src.len();
        if n > self.remaining() {
            return Err(ParseError::BufferTooSmall);
        }
        let start = self.len;
        match &mut self.store {
            Store::Owned(v) => {
                if lower {
                    v.extend(src.bytes().map(|b| b.to_ascii_lowercase()));
                } else {
                    v.extend_from_slice(src.as_bytes());
                }
            }
            Store::Borrowed(s) => {
                let dst = &mut s[start..start + n];
                dst.copy_from_slice(src.as_bytes());
                if lower {
                    dst.make_ascii_lowercase();
                }
            }
        }
        self.len += n;
        Ok(Span {
            start: start as u32,
            end: self.len as u32,
        })
    }

    /// Resolve an already-written span (used while parsing is in flight).
    pub(crate) fn span_str(&self, span: Span) -> &str {
        self.store.span_str(span)
    }

    pub(crate) fn into_store(self) -> Store<'b> {
        self.store
    }
}
