/// Derives the URL identifier for a recipe from its title.
///
/// Lower-cases the title, drops everything outside `[a-z0-9 -]`, then
/// collapses runs of spaces and runs of hyphens into a single hyphen.
/// Leading and trailing hyphens are kept as-is, so a title wrapped in
/// stripped punctuation can yield a slug like `-a-b-`.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ' || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for ch in kept.chars() {
        let next = if ch == ' ' { '-' } else { ch };
        if next == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(next);
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn plain_title() {
        assert_eq!(slugify("Spicy Chicken Soup!"), "spicy-chicken-soup");
    }

    #[test]
    fn apostrophes_and_punctuation_are_dropped() {
        assert_eq!(slugify("Mom's Pie!!"), "moms-pie");
    }

    #[test]
    fn outer_hyphens_survive() {
        // Stripped leading/trailing characters leave their hyphens behind.
        assert_eq!(slugify("  A & B  "), "-a-b-");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(slugify("Rock--&--Roll"), "rock-roll");
        assert_eq!(slugify("a - b"), "a-b");
    }

    #[test]
    fn digits_pass_through() {
        assert_eq!(slugify("100 Garlic Cloves"), "100-garlic-cloves");
    }

    #[test]
    fn degenerate_titles() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("---"), "-");
    }

    #[test]
    fn output_charset_is_stable() {
        for title in ["Tarte Tatin", "Œufs en cocotte", "Bánh mì #7", "  x  "] {
            let slug = slugify(title);
            assert_eq!(slug, slugify(title));
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            );
            assert!(!slug.contains("--"));
        }
    }
}
