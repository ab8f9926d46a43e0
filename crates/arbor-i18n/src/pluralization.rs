//! Pluralization rules for count-dependent phrases

/// A pluralization rule maps a count to an index selecting among candidate
/// phrase forms.
pub type PluralRule = fn(i64) -> usize;

/// Default two-bucket rule: 1 selects the singular form at index 0, every
/// other count (including 0 and negatives) selects the form at index 1.
///
/// This is the fallback used when no locale-specific rule set is configured;
/// it is intentionally not a match for the full range of natural-language
/// plural systems.
pub fn default_plural_rule(count: i64) -> usize {
    if count == 1 {
        0
    } else {
        1
    }
}
