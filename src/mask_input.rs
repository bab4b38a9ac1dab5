//!
//! Headless stand-in for the text widget.
//!
//! Owns the display text and the caret and drives a [NumberMaskField]
//! the way a widget would. Each edit goes through
//! [NumberMaskField::on_will_change_text], the result is installed
//! and the new caret is reported back afterwards.
//!
//! ```
//! use rat_numbermask::{MaskedInputState, NumberMaskField};
//!
//! let field = NumberMaskField::card("XXXX XXXX XXXX XXXX").expect("valid");
//! let mut state = MaskedInputState::new(field);
//! state.focus();
//! for c in "4111111111111111".chars() {
//!     state.insert_char(c).expect("valid");
//! }
//! assert_eq!(state.text(), "4111 1111 1111 1111");
//! assert_eq!(state.cursor(), 19);
//! assert!(state.is_complete());
//! ```

use crate::number_mask::NumberMaskField;
use crate::{FormatResult, MaskError, MaskOutcome, digits_of, grapheme, upos_type};
use std::ops::Range;

/// Text, caret and engine of one field.
#[derive(Debug, Clone)]
pub struct MaskedInputState {
    field: NumberMaskField,
    text: String,
    cursor: upos_type,
    focused: bool,
}

impl MaskedInputState {
    pub fn new(field: NumberMaskField) -> Self {
        Self {
            field,
            text: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    #[inline]
    pub fn field(&self) -> &NumberMaskField {
        &self.field
    }

    /// Display text.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Caret.
    #[inline]
    pub fn cursor(&self) -> upos_type {
        self.cursor
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in graphemes.
    #[inline]
    pub fn len(&self) -> upos_type {
        grapheme::len(&self.text)
    }

    /// All digits of the display text, including the country code.
    pub fn digits(&self) -> String {
        digits_of(&self.text)
    }

    /// All placeholders of the mask are filled.
    pub fn is_complete(&self) -> bool {
        self.len() == self.field.effective_mask().len()
    }

    /// Focus gained. Installs the initial value for an empty field.
    ///
    /// Returns true if the text changed.
    pub fn focus(&mut self) -> bool {
        self.focused = true;
        if let Some(initial) = self.field.on_focus_gained(self.text.is_empty()) {
            let cursor = grapheme::len(&initial);
            self.text = initial;
            self.move_cursor(cursor);
            true
        } else {
            false
        }
    }

    /// Move the caret. Clamped to the text.
    pub fn set_cursor(&mut self, cursor: upos_type) -> bool {
        let cursor = cursor.min(self.len());
        let old_cursor = self.cursor;
        self.move_cursor(cursor);
        old_cursor != cursor
    }

    /// Type a char at the caret.
    pub fn insert_char(&mut self, c: char) -> Result<MaskOutcome, MaskError> {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf))
    }

    /// Insert at the caret. More than one digit counts as paste.
    pub fn insert_str(&mut self, s: &str) -> Result<MaskOutcome, MaskError> {
        self.replace(self.cursor..self.cursor, s)
    }

    /// Replace a range. This is the general edit, all others
    /// end up here.
    pub fn replace(&mut self, range: Range<upos_type>, s: &str) -> Result<MaskOutcome, MaskError> {
        let r = self.field.on_will_change_text(&self.text, range, s)?;
        Ok(self.apply(r))
    }

    /// Backspace.
    pub fn delete_prev_char(&mut self) -> Result<MaskOutcome, MaskError> {
        if self.cursor == 0 {
            return Ok(MaskOutcome::Rejected);
        }
        self.replace(self.cursor - 1..self.cursor, "")
    }

    /// Delete.
    pub fn delete_next_char(&mut self) -> Result<MaskOutcome, MaskError> {
        if self.cursor >= self.len() {
            return Ok(MaskOutcome::Rejected);
        }
        self.replace(self.cursor..self.cursor + 1, "")
    }

    /// Return key. Clears the text and drops the focus.
    pub fn press_return(&mut self) -> MaskOutcome {
        let r = self.field.on_return_pressed();
        self.focused = false;
        self.apply(r)
    }

    /// Change the template and reset the text.
    pub fn set_template(&mut self, template: &str) -> Result<(), MaskError> {
        let r = self.field.set_template(template)?;
        self.apply(r);
        Ok(())
    }

    /// Change the country code and reset the text.
    pub fn set_country_code(&mut self, code: Option<&str>) -> Result<(), MaskError> {
        let r = self.field.set_country_code(code)?;
        self.apply(r);
        Ok(())
    }

    /// Brackets around the country code. Resets the text.
    pub fn set_bracketed(&mut self, bracketed: bool) -> Result<(), MaskError> {
        let r = self.field.set_bracketed(bracketed)?;
        self.apply(r);
        Ok(())
    }

    /// Domestic trunk prefix for pasted numbers. Resets the text.
    pub fn set_trunk_prefix(&mut self, prefix: Option<&str>) -> Result<(), MaskError> {
        let r = self.field.set_trunk_prefix(prefix)?;
        self.apply(r);
        Ok(())
    }

    fn apply(&mut self, r: FormatResult) -> MaskOutcome {
        self.text = r.text;
        // the widget reports the caret after the text is installed.
        self.move_cursor(r.cursor);
        r.outcome
    }

    fn move_cursor(&mut self, cursor: upos_type) {
        self.cursor = cursor;
        self.field.on_selection_changed(cursor);
    }
}
