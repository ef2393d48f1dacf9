//! A trait that can provide the [Span] of a token or tree node

/// A trait that can provide the [Span] of the complete context of a token or tree node
pub trait Spanned {
    fn span(&self) -> Span;
}

/// A region of source text.
///
/// `offset` and `len` are measured in bytes, while `line` and `column` are 1-based and
/// count characters, which is what gets reported to the user.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
    line: usize,
    column: usize,
}

impl Span {
    /// Creates a new span
    pub const fn new(offset: usize, len: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            len,
            line,
            column,
        }
    }

    /// Gets an empty span directly after this span.
    ///
    /// The column is advanced by the byte length, so this is only exact for ASCII spans on a
    /// single line. Every well-formed token is one.
    pub const fn end(&self) -> Self {
        Self {
            offset: self.offset + self.len,
            len: 0,
            line: self.line,
            column: self.column + self.len,
        }
    }

    /// Creates a span that encompasses both
    pub fn join(&self, other: Self) -> Self {
        let (first, _) = if self.offset <= other.offset {
            (self, &other)
        } else {
            (&other, self)
        };
        let min = self.offset.min(other.offset);
        let max = (self.offset + self.len).max(other.offset + other.len);
        Self {
            offset: min,
            len: max - min,
            line: first.line,
            column: first.column,
        }
    }

    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The 1-based line this span starts on
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The 1-based column this span starts at
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Gets the source text this span covers, if it lies within `src`
    pub fn slice<'a>(&self, src: &'a str) -> Option<&'a str> {
        src.get(self.offset..self.offset + self.len)
    }
}

/// The empty span at the very start of a source text
impl Default for Span {
    fn default() -> Self {
        Self::new(0, 0, 1, 1)
    }
}

impl Spanned for Span {
    fn span(&self) -> Span {
        *self
    }
}
