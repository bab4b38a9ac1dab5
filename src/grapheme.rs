use crate::{MaskError, upos_type};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Length in graphemes.
pub(crate) fn len(s: &str) -> upos_type {
    s.graphemes(true).count() as upos_type
}

/// Map a grapheme range to a byte range.
pub(crate) fn byte_range(s: &str, range: Range<upos_type>) -> Result<Range<usize>, MaskError> {
    let mut start = None;
    let mut end = None;

    let mut n = 0;
    for (idx, _) in s.grapheme_indices(true) {
        if n == range.start {
            start = Some(idx);
        }
        if n == range.end {
            end = Some(idx);
            break;
        }
        n += 1;
    }
    // position after the last grapheme.
    if n == range.start && start.is_none() {
        start = Some(s.len());
    }
    if n == range.end && end.is_none() {
        end = Some(s.len());
    }

    match (start, end) {
        (Some(start), Some(end)) if start <= end => Ok(start..end),
        _ => Err(MaskError::RangeOutOfBounds(range.start, range.end, len(s))),
    }
}

/// Replace the grapheme range with the given text.
pub(crate) fn replace_range(
    s: &str,
    range: Range<upos_type>,
    replacement: &str,
) -> Result<String, MaskError> {
    let bytes = byte_range(s, range)?;

    let mut buf = String::with_capacity(s.len() + replacement.len());
    buf.push_str(&s[..bytes.start]);
    buf.push_str(replacement);
    buf.push_str(&s[bytes.end..]);
    Ok(buf)
}
