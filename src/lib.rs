#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Range;

pub mod digits;
pub mod mask_config;
pub mod mask_input;
pub mod mask_io;
pub mod number_mask;

mod grapheme;

pub use digits::{digit_count, digits_of};
pub use mask_config::{MaskConfig, MaskKind};
pub use mask_input::MaskedInputState;
pub use number_mask::NumberMaskField;
pub use number_mask::mask_op::format;
pub use number_mask::mask_token::{EffectiveMask, MaskChar, SeparatorIndex};

/// Placeholder char of a mask template.
pub const PLACEHOLDER: char = 'X';

#[derive(Debug, PartialEq)]
pub enum MaskError {
    /// The template is empty.
    EmptyTemplate,
    /// The template contains digits. Digits in a template would
    /// be indistinguishable from user input.
    InvalidTemplate(String),
    /// Country code is not all ascii digits.
    InvalidCountryCode(String),
    /// Trunk prefix is not all ascii digits.
    InvalidTrunkPrefix(String),
    /// Phone-only operation on a card mask.
    NotAPhoneMask,
    /// The edit range is not a valid range of the old text.
    ///
    /// Contains the [start, end) grapheme range and the
    /// length of the text in graphemes.
    RangeOutOfBounds(upos_type, upos_type, upos_type),
    /// Loading or storing a configuration failed.
    Config(String),
}

impl Display for MaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for MaskError {}

/// Grapheme offset into the display text.
#[allow(non_camel_case_types)]
pub type upos_type = u32;

/// What happened to an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaskOutcome {
    /// The edit has been refused. Text stays as it is, the
    /// caret goes back to its last known position.
    Rejected,
    /// The edit has been refused, but the field content is replaced
    /// with a fresh value. The initial display value for a phone
    /// field, or the empty string.
    Reset,
    /// The edit has been applied and the text reformatted.
    Accepted,
}

/// One edit event as reported by the widget.
///
/// The cursor is the caret as of the *previous* selection change.
/// The widget reports selection changes only after it has committed
/// an edit, so this lags one interaction behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContext<'a> {
    /// Text before the edit.
    pub old_text: &'a str,
    /// Replaced range as grapheme offsets into old_text.
    pub range: Range<upos_type>,
    /// Replacement text.
    pub replacement: &'a str,
    /// Last known caret.
    pub cursor: upos_type,
}

impl<'a> EditContext<'a> {
    pub fn new(
        old_text: &'a str,
        range: Range<upos_type>,
        replacement: &'a str,
        cursor: upos_type,
    ) -> Self {
        Self {
            old_text,
            range,
            replacement,
            cursor,
        }
    }

    /// The edit removes text without inserting any.
    #[inline]
    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty() && !self.range.is_empty()
    }
}

/// Result of one edit.
///
/// The widget always installs `text` and `cursor`. For a
/// rejected edit they are the old text and the last known caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatResult {
    pub outcome: MaskOutcome,
    /// New display text.
    pub text: String,
    /// New caret offset.
    pub cursor: upos_type,
}

impl FormatResult {
    pub(crate) fn accepted(text: String, cursor: upos_type) -> Self {
        Self {
            outcome: MaskOutcome::Accepted,
            text,
            cursor,
        }
    }

    pub(crate) fn rejected(ctx: &EditContext<'_>) -> Self {
        Self {
            outcome: MaskOutcome::Rejected,
            text: ctx.old_text.to_string(),
            cursor: ctx.cursor,
        }
    }

    pub(crate) fn reset(text: String) -> Self {
        let cursor = grapheme::len(&text);
        Self {
            outcome: MaskOutcome::Reset,
            text,
            cursor,
        }
    }
}
