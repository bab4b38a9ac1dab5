//! Input mask for card and phone numbers.
//!
//! * The template uses `X` for each digit. Everything else is a literal
//!   and is inserted while typing.
//! * `-` and space are separators, `(` and `)` are brackets. Typing
//!   at a separator moves the caret past it.
//! * Phone numbers can have a fixed country code prefix `+7 ` or `+(7) `.
//!   Edits inside this prefix are refused.
//! * Pasted numbers are checked against the country code. A pasted
//!   full number `+7 999 123 45 67` is reduced to the digits after
//!   the country code.
//! * The number of digits is limited by the template.
//!
//! This is the engine only. The widget calls
//! [NumberMaskField::on_will_change_text] before each edit and installs
//! the resulting text and caret. Afterwards it reports the caret back
//! with [NumberMaskField::on_selection_changed].
//!
//! ```
//! use rat_numbermask::{MaskConfig, MaskOutcome, NumberMaskField};
//!
//! let mut field = NumberMaskField::new(
//!     MaskConfig::phone("XXX XXX XX XX", Some("7")).expect("valid")
//! ).expect("valid");
//!
//! let text = field.on_focus_gained(true).expect("initial value");
//! assert_eq!(text, "+7 ");
//! field.on_selection_changed(3);
//!
//! let r = field.on_will_change_text(&text, 3..3, "9991234567").expect("valid range");
//! assert_eq!(r.outcome, MaskOutcome::Accepted);
//! assert_eq!(r.text, "+7 999 123 45 67");
//! assert_eq!(r.cursor, 16);
//! ```
//!

use crate::mask_config::MaskConfig;
use crate::number_mask::mask_op::process_edit;
use crate::number_mask::mask_token::EffectiveMask;
use crate::{EditContext, FormatResult, MaskError, upos_type};
use log::debug;
use std::ops::Range;

pub mod mask_op;
pub mod mask_token;

/// Engine state of one number field.
///
/// The only state besides the configuration is the last caret
/// position reported by the widget.
#[derive(Debug, Clone)]
pub struct NumberMaskField {
    config: MaskConfig,
    mask: EffectiveMask,
    cursor: upos_type,
}

impl NumberMaskField {
    /// New field. Fails for an invalid configuration.
    pub fn new(config: MaskConfig) -> Result<Self, MaskError> {
        let mask = EffectiveMask::build(&config)?;
        Ok(Self {
            config,
            mask,
            cursor: 0,
        })
    }

    /// Card number field.
    pub fn card(template: &str) -> Result<Self, MaskError> {
        Self::new(MaskConfig::card(template)?)
    }

    /// Phone number field.
    pub fn phone(template: &str, country_code: Option<&str>) -> Result<Self, MaskError> {
        Self::new(MaskConfig::phone(template, country_code)?)
    }

    #[inline]
    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    #[inline]
    pub fn effective_mask(&self) -> &EffectiveMask {
        &self.mask
    }

    /// Last caret position reported by the widget.
    #[inline]
    pub fn cursor(&self) -> upos_type {
        self.cursor
    }

    /// See [MaskConfig::initial_display_value]
    #[inline]
    pub fn initial_value(&self) -> String {
        self.config.initial_display_value()
    }

    /// Call before the widget applies an edit.
    ///
    /// The widget must install the resulting text and caret, whatever
    /// the outcome. For a rejected edit that's the unchanged text.
    pub fn on_will_change_text(
        &self,
        old_text: &str,
        range: Range<upos_type>,
        replacement: &str,
    ) -> Result<FormatResult, MaskError> {
        let ctx = EditContext::new(old_text, range, replacement, self.cursor);
        process_edit(&self.config, &self.mask, &ctx)
    }

    /// The widget reports a caret move.
    #[inline]
    pub fn on_selection_changed(&mut self, cursor: upos_type) {
        self.cursor = cursor;
    }

    /// Focus gained. Returns the value to install, if the text is
    /// empty and the configuration has an initial value.
    pub fn on_focus_gained(&self, is_text_empty: bool) -> Option<String> {
        if !is_text_empty {
            return None;
        }
        let initial = self.config.initial_display_value();
        if initial.is_empty() {
            None
        } else {
            Some(initial)
        }
    }

    /// Return key. The widget gives up the focus and installs
    /// the empty text.
    pub fn on_return_pressed(&mut self) -> FormatResult {
        self.cursor = 0;
        FormatResult::reset(String::new())
    }

    /// Change the template.
    ///
    /// Rebuilds the mask and resets the field to its initial value.
    pub fn set_template(&mut self, template: &str) -> Result<FormatResult, MaskError> {
        let config = self.config.clone().with_template(template)?;
        self.replace_config(config)
    }

    /// Change the country code. Phone only.
    ///
    /// Rebuilds the mask and resets the field to its initial value.
    pub fn set_country_code(&mut self, code: Option<&str>) -> Result<FormatResult, MaskError> {
        let config = self.config.clone().with_country_code(code)?;
        self.replace_config(config)
    }

    /// Show the country code in brackets. Phone only.
    ///
    /// Rebuilds the mask and resets the field to its initial value.
    pub fn set_bracketed(&mut self, bracketed: bool) -> Result<FormatResult, MaskError> {
        let config = self.config.clone().with_bracketed(bracketed)?;
        self.replace_config(config)
    }

    /// Domestic trunk prefix accepted for pasted numbers. Phone only.
    ///
    /// Rebuilds the mask and resets the field to its initial value.
    pub fn set_trunk_prefix(&mut self, prefix: Option<&str>) -> Result<FormatResult, MaskError> {
        let config = self.config.clone().with_trunk_prefix(prefix)?;
        self.replace_config(config)
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: MaskConfig) -> Result<FormatResult, MaskError> {
        self.replace_config(config)
    }

    fn replace_config(&mut self, config: MaskConfig) -> Result<FormatResult, MaskError> {
        let mask = EffectiveMask::build(&config)?;
        debug!("new mask {:?}", mask.as_str());

        self.config = config;
        self.mask = mask;

        let r = FormatResult::reset(self.config.initial_display_value());
        self.cursor = r.cursor;
        Ok(r)
    }
}
