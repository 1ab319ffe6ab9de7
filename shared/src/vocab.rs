//! Vocabulary tag helpers
//!
//! Category and unit-of-measure vocabularies are open sets of string tags.
//! Operator-added tags are normalized to a lowercase-underscored form so
//! that "Engine Oil" and "engine  oil" resolve to the same tag.

/// Normalize a free-text label into a vocabulary tag.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single
/// underscore and trims leading/trailing underscores.
pub fn normalize_tag(label: &str) -> String {
    let mut tag = String::with_capacity(label.len());
    let mut last_was_sep = true;
    for c in label.chars() {
        if c.is_alphanumeric() {
            tag.extend(c.to_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            tag.push('_');
            last_was_sep = true;
        }
    }
    if tag.ends_with('_') {
        tag.pop();
    }
    tag
}

/// Render a normalized tag back into a human-readable label.
pub fn humanize_tag(tag: &str) -> String {
    tag.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize_tag("Engine Oil"), "engine_oil");
        assert_eq!(normalize_tag("litre"), "litre");
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_tag("  Spark -- Plug  "), "spark_plug");
        assert_eq!(normalize_tag("A/C Service"), "a_c_service");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_tag("   "), "");
        assert_eq!(normalize_tag("---"), "");
    }

    #[test]
    fn test_humanize_round_trip() {
        assert_eq!(humanize_tag("engine_oil"), "Engine Oil");
        assert_eq!(humanize_tag(&normalize_tag("Custom Wax")), "Custom Wax");
    }
}
