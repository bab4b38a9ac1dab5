use crate::mask_config::MaskConfig;
use crate::{MaskError, PLACEHOLDER, upos_type};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

/// One char of the effective mask.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MaskChar {
    /// Next digit goes here.
    Placeholder,
    /// Group separator. `-` or space.
    Separator(char),
    /// Bracket around a group. `(` or `)`.
    Bracket(char),
    /// Any other literal.
    Literal(char),
}

impl Display for MaskChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MaskChar::Placeholder => write!(f, "{}", PLACEHOLDER),
            MaskChar::Separator(c) | MaskChar::Bracket(c) | MaskChar::Literal(c) => {
                write!(f, "{}", c)
            }
        }
    }
}

impl Debug for MaskChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MaskChar::Placeholder => write!(f, "{}", PLACEHOLDER),
            MaskChar::Separator(c) => write!(f, "s{:?}", c),
            MaskChar::Bracket(c) => write!(f, "b{:?}", c),
            MaskChar::Literal(c) => write!(f, "\\{}", c),
        }
    }
}

impl From<char> for MaskChar {
    fn from(c: char) -> Self {
        match c {
            PLACEHOLDER => MaskChar::Placeholder,
            '-' | ' ' => MaskChar::Separator(c),
            '(' | ')' => MaskChar::Bracket(c),
            c => MaskChar::Literal(c),
        }
    }
}

impl MaskChar {
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        *self == MaskChar::Placeholder
    }

    /// Anything but a placeholder.
    #[inline]
    pub fn is_literal(&self) -> bool {
        !self.is_placeholder()
    }

    #[inline]
    pub fn is_separator(&self) -> bool {
        matches!(self, MaskChar::Separator(_))
    }

    #[inline]
    pub fn is_bracket(&self) -> bool {
        matches!(self, MaskChar::Bracket(_))
    }
}

/// Offsets of separators and brackets in the effective mask.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeparatorIndex {
    separators: Vec<upos_type>,
    brackets: Vec<upos_type>,
}

impl SeparatorIndex {
    fn new(tokens: &[MaskChar]) -> Self {
        let mut index = SeparatorIndex::default();
        for (pos, t) in tokens.iter().enumerate() {
            if t.is_separator() {
                index.separators.push(pos as upos_type);
            } else if t.is_bracket() {
                index.brackets.push(pos as upos_type);
            }
        }
        index
    }

    /// Offsets of `-` and space.
    pub fn separators(&self) -> &[upos_type] {
        &self.separators
    }

    /// Offsets of `(` and `)`.
    pub fn brackets(&self) -> &[upos_type] {
        &self.brackets
    }

    /// Separator or bracket at this offset.
    pub fn contains(&self, pos: upos_type) -> bool {
        self.separators.contains(&pos) || self.brackets.contains(&pos)
    }
}

/// Effective mask and everything derived from it.
///
/// Built once per configuration. Any change of the configuration
/// builds a new one, there are no incremental updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveMask {
    mask: String,
    tokens: Vec<MaskChar>,
    index: SeparatorIndex,
    prefix_len: upos_type,
    min_required: usize,
    max_limit: usize,
}

impl EffectiveMask {
    /// Validates the configuration and builds the mask.
    pub fn build(cfg: &MaskConfig) -> Result<Self, MaskError> {
        cfg.validate()?;

        let mask = cfg.effective_mask();
        let tokens = mask.chars().map(MaskChar::from).collect::<Vec<_>>();
        let index = SeparatorIndex::new(&tokens);
        // the initial value is ascii only.
        let prefix_len = cfg.initial_display_value().chars().count() as upos_type;

        Ok(Self {
            mask,
            tokens,
            index,
            prefix_len,
            min_required: cfg.min_required_digits(),
            max_limit: cfg.max_digit_limit(),
        })
    }

    /// Mask as string.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.mask.as_str()
    }

    /// Length of the mask. That's the length of a completely
    /// filled display text too.
    #[inline]
    pub fn len(&self) -> upos_type {
        self.tokens.len() as upos_type
    }

    /// Always false for a valid config.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn tokens(&self) -> &[MaskChar] {
        &self.tokens
    }

    /// Mask char at the offset.
    #[inline]
    pub fn token(&self, pos: upos_type) -> Option<MaskChar> {
        self.tokens.get(pos as usize).copied()
    }

    #[inline]
    pub fn separator_index(&self) -> &SeparatorIndex {
        &self.index
    }

    /// Length of the fixed, non-editable country code prefix.
    #[inline]
    pub fn prefix_len(&self) -> upos_type {
        self.prefix_len
    }

    /// See [MaskConfig::min_required_digits]
    #[inline]
    pub fn min_required_digits(&self) -> usize {
        self.min_required
    }

    /// See [MaskConfig::max_digit_limit]
    #[inline]
    pub fn max_digit_limit(&self) -> usize {
        self.max_limit
    }

    /// Number of consecutive literals starting at pos.
    pub fn literal_run(&self, pos: upos_type) -> upos_type {
        self.tokens
            .iter()
            .skip(pos as usize)
            .take_while(|v| v.is_literal())
            .count() as upos_type
    }
}

#[cfg(test)]
mod test_token {
    use crate::mask_config::MaskConfig;
    use crate::number_mask::mask_token::{EffectiveMask, MaskChar};

    #[test]
    fn test_classify() {
        assert_eq!(MaskChar::from('X'), MaskChar::Placeholder);
        assert_eq!(MaskChar::from(' '), MaskChar::Separator(' '));
        assert_eq!(MaskChar::from('-'), MaskChar::Separator('-'));
        assert_eq!(MaskChar::from('('), MaskChar::Bracket('('));
        assert_eq!(MaskChar::from('+'), MaskChar::Literal('+'));
        assert_eq!(MaskChar::from('/').to_string(), "/");
        assert_eq!(format!("{:?}", MaskChar::from('-')), "s'-'");
    }

    #[test]
    fn test_index_card() {
        let m = EffectiveMask::build(&MaskConfig::card("XXXX XXXX XXXX XXXX").unwrap()).unwrap();
        assert_eq!(m.len(), 19);
        assert_eq!(m.prefix_len(), 0);
        assert_eq!(m.separator_index().separators(), &[4, 9, 14]);
        assert!(m.separator_index().brackets().is_empty());
        assert!(m.separator_index().contains(9));
        assert!(!m.separator_index().contains(10));
        assert_eq!(m.literal_run(4), 1);
        assert_eq!(m.literal_run(5), 0);
    }

    #[test]
    fn test_index_phone() {
        let cfg = MaskConfig::phone("XXX XXX XX XX", Some("7"))
            .unwrap()
            .with_bracketed(true)
            .unwrap();
        let m = EffectiveMask::build(&cfg).unwrap();
        assert_eq!(m.as_str(), "+(X) XXX XXX XX XX");
        assert_eq!(m.prefix_len(), 5);
        assert_eq!(m.separator_index().brackets(), &[1, 3]);
        assert_eq!(m.separator_index().separators(), &[4, 8, 12, 15]);
        assert_eq!(m.literal_run(0), 2);
        assert_eq!(m.literal_run(3), 2);
        assert_eq!(m.token(0), Some(MaskChar::Literal('+')));
        assert_eq!(m.token(18), None);
        assert_eq!(m.min_required_digits(), 10);
        assert_eq!(m.max_digit_limit(), 12);
    }
}
