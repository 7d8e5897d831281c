//! Target mention detection.

use smallvec::SmallVec;

/// Lowercased spellings of a brand name that count as a mention:
/// as written, with spaces removed, and with spaces hyphenated.
pub fn name_variants(name: &str) -> SmallVec<[String; 3]> {
    let base = name.trim().to_lowercase();
    let mut variants: SmallVec<[String; 3]> = SmallVec::new();
    if base.is_empty() {
        return variants;
    }
    for variant in [base.replace(' ', ""), base.replace(' ', "-")] {
        if variant != base && !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants.insert(0, base);
    variants
}

/// Whether any variant of `target` occurs in the already-lowercased text.
pub fn is_mentioned(response_lower: &str, target: &str) -> bool {
    name_variants(target)
        .iter()
        .any(|variant| response_lower.contains(variant.as_str()))
}
