use crate::digits::{digit_count, digits_of};
use crate::grapheme;
use crate::mask_config::MaskConfig;
use crate::number_mask::mask_token::EffectiveMask;
use crate::{EditContext, FormatResult, MaskError, PLACEHOLDER, upos_type};
use log::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

/// Apply the digits of `raw` to the mask.
///
/// Each placeholder takes the next digit, literals are copied.
/// Stops at the end of the mask or at the first placeholder
/// without a digit left. Literals that directly follow the last
/// digit are still written. Without any digits the result is empty.
///
/// ```
/// use rat_numbermask::format;
///
/// assert_eq!(format("4111111111111111", "XXXX XXXX XXXX XXXX"), "4111 1111 1111 1111");
/// assert_eq!(format("41111", "XXXX XXXX XXXX XXXX"), "4111 1");
/// assert_eq!(format("4111", "XXXX XXXX XXXX XXXX"), "4111 ");
/// ```
pub fn format(raw: &str, mask: &str) -> String {
    let mut digits = raw.chars().filter(char::is_ascii_digit).peekable();
    if digits.peek().is_none() {
        return String::new();
    }

    let mut buf = String::new();
    for m in mask.chars() {
        if m == PLACEHOLDER {
            match digits.next() {
                Some(d) => buf.push(d),
                None => break,
            }
        } else {
            buf.push(m);
        }
    }
    buf
}

/// Validate the digits of a pasted text for a phone field.
///
/// * Up to min_required_digits digits are taken as they are.
/// * A longer number that starts with the country code or the
///   trunk prefix is cut to its last min_required_digits.
///   That strips a country code that is part of the pasted number.
/// * Anything else results in an empty string.
///
/// Card fields take all digits.
pub fn validate_pasted_digits(cfg: &MaskConfig, pasted: &str) -> String {
    let digits = digits_of(pasted);

    let MaskConfig::PhoneNumber { .. } = cfg else {
        return digits;
    };

    let min_required = cfg.min_required_digits();
    if digits.len() <= min_required {
        digits
    } else if digits.len() < cfg.max_digit_limit() && has_known_prefix(cfg, &digits) {
        digits[digits.len() - min_required..].to_string()
    } else {
        debug!("paste {:?} does not match the country code", pasted);
        String::new()
    }
}

fn has_known_prefix(cfg: &MaskConfig, digits: &str) -> bool {
    let code = cfg.country_code().unwrap_or_default();
    if digits.starts_with(code) {
        return true;
    }
    if let Some(trunk) = cfg.trunk_prefix() {
        if digits.starts_with(trunk) {
            return true;
        }
    }
    false
}

/// Find the caret after a paste.
///
/// Walks the display text from the last known caret and consumes
/// a payload digit each time it matches the char at that position.
/// Literals don't match and are skipped. The caret ends up behind the
/// last matched digit, or at the end of the text.
pub fn settle_paste_cursor(text: &str, payload: &str, cursor: upos_type) -> upos_type {
    let mut payload = payload.chars().peekable();
    let mut pos = cursor;

    for g in text.graphemes(true).skip(cursor as usize) {
        let Some(c) = payload.peek() else {
            break;
        };
        if g.starts_with(*c) && g.len() == c.len_utf8() {
            payload.next();
        }
        pos += 1;
    }

    pos.min(grapheme::len(text))
}

/// Process one edit.
///
/// This is a pure function of the configuration, the edit and the last
/// known caret. The only error is an edit range outside the old text,
/// everything else is expressed in [FormatResult::outcome].
pub fn process_edit(
    cfg: &MaskConfig,
    mask: &EffectiveMask,
    ctx: &EditContext<'_>,
) -> Result<FormatResult, MaskError> {
    let old_len = grapheme::len(ctx.old_text);
    if ctx.range.start > ctx.range.end || ctx.range.end > old_len {
        return Err(MaskError::RangeOutOfBounds(
            ctx.range.start,
            ctx.range.end,
            old_len,
        ));
    }

    if ctx.old_text.is_empty() {
        let initial = cfg.initial_display_value();
        if !initial.is_empty() {
            debug!("empty field, install {:?}", initial);
            return Ok(FormatResult::reset(initial));
        }
    }

    let prefix_len = mask.prefix_len();
    if ctx.range.start < prefix_len && ctx.range.end <= prefix_len {
        debug!(
            "edit {:?} inside the country code prefix {}",
            ctx.range, prefix_len
        );
        return Ok(FormatResult::rejected(ctx));
    }

    // a selection reaching into the prefix only edits the part after it.
    let ctx = &EditContext::new(
        ctx.old_text,
        ctx.range.start.max(prefix_len)..ctx.range.end,
        ctx.replacement,
        ctx.cursor,
    );

    if digit_count(ctx.replacement) > 1 {
        paste(cfg, mask, ctx)
    } else {
        single_edit(mask, ctx, old_len)
    }
}

fn paste(
    cfg: &MaskConfig,
    mask: &EffectiveMask,
    ctx: &EditContext<'_>,
) -> Result<FormatResult, MaskError> {
    let payload = validate_pasted_digits(cfg, ctx.replacement);

    // all old digits count, even those inside the replaced range.
    // the payload counts without a stripped country code.
    if digit_count(ctx.old_text) + payload.len() >= mask.max_digit_limit() {
        debug!(
            "paste {:?} exceeds capacity {}",
            ctx.replacement,
            mask.max_digit_limit() - 1
        );
        return Ok(FormatResult::rejected(ctx));
    }

    let raw = grapheme::replace_range(ctx.old_text, ctx.range.clone(), &payload)?;
    let text = format(&raw, mask.as_str());
    let text_len = grapheme::len(&text);

    let cursor = if !payload.is_empty() && text_len == mask.len() {
        text_len
    } else {
        settle_paste_cursor(&text, &payload, ctx.cursor)
    };

    trace!("paste {:?} -> {:?} @ {}", payload, text, cursor);
    Ok(FormatResult::accepted(text, cursor))
}

fn single_edit(
    mask: &EffectiveMask,
    ctx: &EditContext<'_>,
    old_len: upos_type,
) -> Result<FormatResult, MaskError> {
    let raw = grapheme::replace_range(ctx.old_text, ctx.range.clone(), ctx.replacement)?;
    let raw_len = grapheme::len(&raw);

    if !ctx.is_deletion() && digit_count(&raw) >= mask.max_digit_limit() {
        debug!("edit at {} exceeds capacity", ctx.range.start);
        return Ok(FormatResult::rejected(ctx));
    }

    let text = format(&raw, mask.as_str());

    // deletion or no-op.
    let cursor = if ctx.replacement.is_empty() {
        ctx.range.start
    } else if raw_len > old_len && mask.separator_index().contains(ctx.range.start) {
        // jump over the separator and behind the new digit.
        ctx.range.start + mask.literal_run(ctx.range.start) + 1
    } else {
        ctx.range.start + 1
    };
    let cursor = cursor.min(grapheme::len(&text));

    trace!("edit {:?} -> {:?} @ {}", ctx.replacement, text, cursor);
    Ok(FormatResult::accepted(text, cursor))
}

#[cfg(test)]
mod test_op {
    use crate::mask_config::MaskConfig;
    use crate::number_mask::mask_op::{format, settle_paste_cursor, validate_pasted_digits};

    #[test]
    fn test_format() {
        let m = "+X XXX XXX XX XX";
        assert_eq!(format("", m), "");
        assert_eq!(format("+ ", m), "");
        assert_eq!(format("7", m), "+7 ");
        assert_eq!(format("+7 ", m), "+7 ");
        assert_eq!(format("79", m), "+7 9");
        assert_eq!(format("+7 (999) 123-45-67", m), "+7 999 123 45 67");
        // surplus digits are dropped.
        assert_eq!(format("7999123456789", m), "+7 999 123 45 67");
    }

    #[test]
    fn test_format_idempotent() {
        let masks = ["XXXX XXXX XXXX XXXX", "+X XXX XXX XX XX", "+(XXX) (XX) XXX-XX-XX"];
        let raws = ["", "1", "1234", "12345", "x9y8z7", "375291234567", "4111111111111111111"];
        for m in masks {
            for r in raws {
                let once = format(r, m);
                assert_eq!(format(&once, m), once);
            }
        }
    }

    #[test]
    fn test_validate_paste() {
        let cfg = MaskConfig::phone("XXX XXX XX XX", Some("7")).unwrap();
        assert_eq!(validate_pasted_digits(&cfg, "999"), "999");
        assert_eq!(validate_pasted_digits(&cfg, "999 123 45 67"), "9991234567");
        assert_eq!(validate_pasted_digits(&cfg, "+7 999 123 45 67"), "9991234567");
        // wrong country code
        assert_eq!(validate_pasted_digits(&cfg, "+3 999 123 45 67"), "");
        // trunk prefix is not configured
        assert_eq!(validate_pasted_digits(&cfg, "8 999 123 45 67"), "");
        // too long
        assert_eq!(validate_pasted_digits(&cfg, "7 7 999 123 45 67"), "");

        let cfg = cfg.with_trunk_prefix(Some("8")).unwrap();
        assert_eq!(validate_pasted_digits(&cfg, "8 999 123 45 67"), "9991234567");

        let cfg = MaskConfig::card("XXXX XXXX").unwrap();
        assert_eq!(validate_pasted_digits(&cfg, "1234-5678-9"), "123456789");
    }

    #[test]
    fn test_settle() {
        assert_eq!(settle_paste_cursor("+7 999 123 45 67", "9991234567", 3), 16);
        assert_eq!(settle_paste_cursor("+7 999 123 45 67", "9991", 3), 8);
        assert_eq!(settle_paste_cursor("+7 999 123 45 67", "", 3), 3);
        // stale caret before the prefix still finds the digits.
        assert_eq!(settle_paste_cursor("+7 999 1", "9991", 0), 8);
        assert_eq!(settle_paste_cursor("12", "12", 5), 2);
    }
}
