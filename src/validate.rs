//! Input validation and normalization for form-style input.
//!
//! Item types and tools are resolved in three tiers: exact match →
//! synonym lookup → error with the closest suggestion. Tags follow the
//! comma-separated form field: split, trim, and strip blanks on save.

use crate::model::{ItemKind, TOOLS};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Filter keyword matching every value.
pub const ALL: &str = "all";

// ── Valid value sets (O(1) lookups) ──────────────────────────

pub static VALID_KINDS: LazyLock<HashSet<&str>> =
    LazyLock::new(|| ItemKind::ALL.iter().map(ItemKind::as_str).collect());

pub static VALID_TOOLS: LazyLock<HashSet<&str>> =
    LazyLock::new(|| TOOLS.iter().map(|t| t.id).collect());

// ── Synonym maps ─────────────────────────────────────────────

pub static KIND_SYNONYMS: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
    [
        ("prompts", "prompt"),
        ("template", "prompt"),
        ("memories", "memory"),
        ("mem", "memory"),
        ("fact", "memory"),
        ("instruction", "workspace"),
        ("instructions", "workspace"),
        ("workspace-instruction", "workspace"),
        ("rules", "workspace"),
    ]
    .into_iter()
    .collect()
});

pub static TOOL_SYNONYMS: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| {
    [
        ("claude", "claude-code"),
        ("copilot", "github-copilot"),
        ("augment", "augment-code"),
        ("replit", "replit-ghostwriter"),
        ("ghostwriter", "replit-ghostwriter"),
        ("jetbrains", "jetbrains-ai"),
        ("qodo", "qodo-gen"),
        ("amazon-q", "codewhisperer"),
    ]
    .into_iter()
    .collect()
});

/// True when the text has no non-whitespace characters.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Parse the comma-separated tag field.
///
/// Each token is trimmed; empty tokens are kept so the field round-trips
/// while being typed, and removed by [`strip_blank_tags`] on save.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Drop blank tags, preserving order and duplicates.
#[must_use]
pub fn strip_blank_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().filter(|tag| !is_blank(tag)).collect()
}

/// Normalize an item type via exact match or synonym lookup.
pub fn normalize_kind(input: &str) -> Result<ItemKind, (String, Option<String>)> {
    let lower = input.trim().to_lowercase();

    if VALID_KINDS.contains(lower.as_str()) {
        return lower.parse().map_err(|_| (input.to_string(), None));
    }

    if let Some(&canonical) = KIND_SYNONYMS.get(lower.as_str()) {
        return canonical.parse().map_err(|_| (input.to_string(), None));
    }

    let suggestion = find_closest_match(&lower, &VALID_KINDS, &KIND_SYNONYMS);
    Err((input.to_string(), suggestion))
}

/// Normalize a tool id via exact match or synonym lookup.
pub fn normalize_tool(input: &str) -> Result<String, (String, Option<String>)> {
    let lower = input.trim().to_lowercase();

    if VALID_TOOLS.contains(lower.as_str()) {
        return Ok(lower);
    }

    if let Some(&canonical) = TOOL_SYNONYMS.get(lower.as_str()) {
        return Ok(canonical.to_string());
    }

    // Display names with spaces: "GitHub Copilot" → "github-copilot"
    let dashed = lower.split_whitespace().collect::<Vec<_>>().join("-");
    if VALID_TOOLS.contains(dashed.as_str()) {
        return Ok(dashed);
    }

    let suggestion = find_closest_match(&lower, &VALID_TOOLS, &TOOL_SYNONYMS);
    Err((input.to_string(), suggestion))
}

/// Parse a type filter; `all` means no filter.
pub fn parse_kind_filter(input: &str) -> Result<Option<ItemKind>, (String, Option<String>)> {
    if input.trim().eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    normalize_kind(input).map(Some)
}

/// Parse a tool filter; `all` means no filter.
pub fn parse_tool_filter(input: &str) -> Result<Option<String>, (String, Option<String>)> {
    if input.trim().eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }
    normalize_tool(input).map(Some)
}

/// Find the closest matching value across valid set and synonyms.
fn find_closest_match(
    input: &str,
    valid: &HashSet<&str>,
    synonyms: &HashMap<&str, &str>,
) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;

    for &v in valid.iter().chain(synonyms.keys()) {
        let dist = levenshtein_distance(input, v);
        if dist <= 3 && best.is_none_or(|(_, d)| dist < d) {
            // For synonyms, show what it maps to
            let shown = synonyms.get(v).copied().unwrap_or(v);
            best = Some((shown, dist));
        }
    }

    best.map(|(v, _)| v.to_string())
}

// ── Levenshtein distance ─────────────────────────────────────

/// Compute the Levenshtein edit distance between two strings.
#[must_use]
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let a_len = a.len();
    let b_len = b.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    // Single-row optimization
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Find existing IDs similar to the searched ID.
///
/// Returns up to `max` suggestions with edit distance ≤ 3,
/// sorted by distance then alphabetically.
pub fn find_similar_ids<'a, I>(searched: &str, existing: I, max: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut candidates: Vec<(usize, &str)> = existing
        .into_iter()
        .map(|id| (levenshtein_distance(searched, id), id))
        .filter(|(dist, _)| *dist <= 3)
        .collect();

    candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    candidates
        .into_iter()
        .take(max)
        .map(|(_, id)| id.to_string())
        .collect()
}
