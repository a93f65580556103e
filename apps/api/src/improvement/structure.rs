//! Structure heuristic — cheap check for prompts that are already detailed.

/// Trimmed prompts must be strictly longer than this to count as structured.
const MIN_STRUCTURED_CHARS: usize = 40;

/// Punctuation that signals a sentence, list or heading.
const STRUCTURE_MARKERS: &[char] = &['.', ':', '-'];

/// Returns true when the trimmed prompt is longer than 40 characters and
/// contains at least one of `.`, `:` or `-`. Pure and total.
pub fn is_well_structured(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().count() > MIN_STRUCTURED_CHARS && trimmed.contains(STRUCTURE_MARKERS)
}
