// Author: Dustin Pilgrim
// License: MIT

/// How the writer quotes string scalars, keys and section names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Quote only text that would otherwise be read back differently.
    #[default]
    Minimal,
    /// Quote every string scalar. Keys and section names still follow `Minimal`.
    Always,
    /// Never quote. Text containing delimiters will not survive a reload.
    Never,
}

/// Options controlling how a document is written back to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    pub quote_style: QuoteStyle,
    pub blank_line_between_sections: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            quote_style: QuoteStyle::Minimal,
            blank_line_between_sections: true,
        }
    }
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote_style(mut self, quote_style: QuoteStyle) -> Self {
        self.quote_style = quote_style;
        self
    }

    pub fn with_blank_line_between_sections(mut self, enabled: bool) -> Self {
        self.blank_line_between_sections = enabled;
        self
    }

    /// Legacy output: no quoting and sections packed together.
    pub fn compact() -> Self {
        Self {
            quote_style: QuoteStyle::Never,
            blank_line_between_sections: false,
        }
    }
}
