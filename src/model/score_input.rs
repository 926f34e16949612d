/// Parses the free text of a grid cell into a hole score.
///
/// Surrounding whitespace is ignored. Blank text is rejected, as is anything
/// that doesn't parse to a finite `f64` (so `1e400`, which overflows to
/// infinity, is rejected). Fractions are truncated toward zero and finite
/// values beyond the `i32` range saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_score(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.trunc() as i32)
}
