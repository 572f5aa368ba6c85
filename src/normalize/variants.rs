//! Descriptive variant tagging from product titles.

/// Frame/print keywords recognized in titles, in output order.
/// Extend by adding entries; tags always come out in this order,
/// regardless of where they appear in the title.
const VARIANT_KEYWORDS: &[&str] = &[
    "extended",
    "borderless",
    "promo",
    "serial numbered",
    "showcase",
    "oversized",
    "retro",
    "chinese",
    "japanese",
];

/// Extract descriptive variant tags from a raw title.
///
/// Total: any input, including the empty string, yields a (possibly
/// empty) tag list. No keyword appears twice.
pub fn extract_variant_tags(raw_title: &str) -> Vec<String> {
    let lower = raw_title.to_lowercase();
    VARIANT_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

#[cfg(test)]
#[path = "variants_tests.rs"]
mod tests;
