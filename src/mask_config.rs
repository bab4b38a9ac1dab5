//!
//! Configuration of a number field and the derived mask values.
//!
//! A template uses `X` for each digit the user can enter.
//! Everything else is a literal that is inserted while formatting.
//!
//! ```
//! use rat_numbermask::MaskConfig;
//!
//! let card = MaskConfig::card("XXXX XXXX XXXX XXXX").expect("valid");
//! assert_eq!(card.effective_mask(), "XXXX XXXX XXXX XXXX");
//!
//! let phone = MaskConfig::phone("XXX XXX XX XX", Some("7")).expect("valid");
//! assert_eq!(phone.effective_mask(), "+X XXX XXX XX XX");
//! assert_eq!(phone.initial_display_value(), "+7 ");
//! assert_eq!(phone.max_digit_limit(), 12);
//! ```
//!

use crate::digits::{digit_count, is_all_digits};
use crate::{MaskError, PLACEHOLDER};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Kind of number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaskKind {
    CardNumber,
    PhoneNumber,
}

impl Display for MaskKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskKind::CardNumber => write!(f, "card"),
            MaskKind::PhoneNumber => write!(f, "phone"),
        }
    }
}

impl FromStr for MaskKind {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(MaskKind::CardNumber),
            "phone" => Ok(MaskKind::PhoneNumber),
            _ => Err(MaskError::Config(format!("unknown mask kind {:?}", s))),
        }
    }
}

/// Setup of one number field.
///
/// Construct with [MaskConfig::card] or [MaskConfig::phone], they
/// validate the values. A config assembled by hand or deserialized
/// must pass [MaskConfig::validate] before use, all the consumers in
/// this crate do that.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum MaskConfig {
    CardNumber {
        template: String,
    },
    PhoneNumber {
        template: String,
        /// Fixed country code. Shown as non-editable prefix.
        #[cfg_attr(feature = "serde", serde(default))]
        country_code: Option<String>,
        /// Show the country code as `+(7) `.
        #[cfg_attr(feature = "serde", serde(default))]
        bracketed: bool,
        /// Domestic trunk prefix. A pasted number that starts with
        /// it is accepted the same as one that starts with the country code.
        #[cfg_attr(feature = "serde", serde(default))]
        trunk_prefix: Option<String>,
    },
}

fn non_empty(code: Option<&str>) -> Option<String> {
    code.filter(|v| !v.is_empty()).map(|v| v.to_string())
}

impl MaskConfig {
    /// Card number field.
    pub fn card(template: impl Into<String>) -> Result<Self, MaskError> {
        let cfg = MaskConfig::CardNumber {
            template: template.into(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Phone number field. An empty country code counts as none.
    pub fn phone(
        template: impl Into<String>,
        country_code: Option<&str>,
    ) -> Result<Self, MaskError> {
        let cfg = MaskConfig::PhoneNumber {
            template: template.into(),
            country_code: non_empty(country_code),
            bracketed: false,
            trunk_prefix: None,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Replace the template.
    pub fn with_template(mut self, new_template: impl Into<String>) -> Result<Self, MaskError> {
        match &mut self {
            MaskConfig::CardNumber { template } => *template = new_template.into(),
            MaskConfig::PhoneNumber { template, .. } => *template = new_template.into(),
        }
        self.validate()?;
        Ok(self)
    }

    /// Replace the country code. Phone only.
    pub fn with_country_code(mut self, code: Option<&str>) -> Result<Self, MaskError> {
        match &mut self {
            MaskConfig::CardNumber { .. } => return Err(MaskError::NotAPhoneMask),
            MaskConfig::PhoneNumber { country_code, .. } => *country_code = non_empty(code),
        }
        self.validate()?;
        Ok(self)
    }

    /// Show the country code in brackets. Phone only.
    pub fn with_bracketed(mut self, show_brackets: bool) -> Result<Self, MaskError> {
        match &mut self {
            MaskConfig::CardNumber { .. } => return Err(MaskError::NotAPhoneMask),
            MaskConfig::PhoneNumber { bracketed, .. } => *bracketed = show_brackets,
        }
        Ok(self)
    }

    /// Domestic trunk prefix for pasted numbers. Phone only.
    pub fn with_trunk_prefix(mut self, prefix: Option<&str>) -> Result<Self, MaskError> {
        match &mut self {
            MaskConfig::CardNumber { .. } => return Err(MaskError::NotAPhoneMask),
            MaskConfig::PhoneNumber { trunk_prefix, .. } => *trunk_prefix = non_empty(prefix),
        }
        self.validate()?;
        Ok(self)
    }

    /// Check the invariants.
    ///
    /// * The template is not empty and contains no digits.
    /// * Country code and trunk prefix are digits only.
    pub fn validate(&self) -> Result<(), MaskError> {
        let template = self.template();
        if template.is_empty() {
            return Err(MaskError::EmptyTemplate);
        }
        if digit_count(template) > 0 {
            return Err(MaskError::InvalidTemplate(template.to_string()));
        }
        if let Some(code) = self.country_code() {
            if code.is_empty() || !is_all_digits(code) {
                return Err(MaskError::InvalidCountryCode(code.to_string()));
            }
        }
        if let Some(prefix) = self.trunk_prefix() {
            if prefix.is_empty() || !is_all_digits(prefix) {
                return Err(MaskError::InvalidTrunkPrefix(prefix.to_string()));
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> MaskKind {
        match self {
            MaskConfig::CardNumber { .. } => MaskKind::CardNumber,
            MaskConfig::PhoneNumber { .. } => MaskKind::PhoneNumber,
        }
    }

    /// The user supplied template.
    pub fn template(&self) -> &str {
        match self {
            MaskConfig::CardNumber { template } => template.as_str(),
            MaskConfig::PhoneNumber { template, .. } => template.as_str(),
        }
    }

    pub fn country_code(&self) -> Option<&str> {
        match self {
            MaskConfig::CardNumber { .. } => None,
            MaskConfig::PhoneNumber { country_code, .. } => country_code.as_deref(),
        }
    }

    pub fn bracketed(&self) -> bool {
        match self {
            MaskConfig::CardNumber { .. } => false,
            MaskConfig::PhoneNumber { bracketed, .. } => *bracketed,
        }
    }

    pub fn trunk_prefix(&self) -> Option<&str> {
        match self {
            MaskConfig::CardNumber { .. } => None,
            MaskConfig::PhoneNumber { trunk_prefix, .. } => trunk_prefix.as_deref(),
        }
    }

    /// Value shown as soon as an empty field gets the focus.
    /// It's also the value a field resets to after a config change.
    ///
    /// `"+7 "` or `"+(7) "` for a phone with country code, empty otherwise.
    pub fn initial_display_value(&self) -> String {
        match self {
            MaskConfig::PhoneNumber {
                country_code: Some(code),
                bracketed,
                ..
            } => {
                if *bracketed {
                    format!("+({}) ", code)
                } else {
                    format!("+{} ", code)
                }
            }
            _ => String::new(),
        }
    }

    /// The mask that is applied to the display text. The country code
    /// prefix with each digit as placeholder followed by the template.
    pub fn effective_mask(&self) -> String {
        let mut mask = String::new();
        for c in self.initial_display_value().chars() {
            if c.is_ascii_digit() {
                mask.push(PLACEHOLDER);
            } else {
                mask.push(c);
            }
        }
        mask.push_str(self.template());
        mask
    }

    /// Number of digits the user has to enter. Excludes the
    /// country code.
    pub fn min_required_digits(&self) -> usize {
        self.template().chars().filter(|c| *c == PLACEHOLDER).count()
    }

    /// One past the digit capacity of the display text.
    /// An edit must stay below this value.
    pub fn max_digit_limit(&self) -> usize {
        match self {
            MaskConfig::CardNumber { .. } => self.min_required_digits() + 1,
            MaskConfig::PhoneNumber { .. } => {
                self.country_code().map(|v| v.len()).unwrap_or(0) + self.min_required_digits() + 1
            }
        }
    }
}
