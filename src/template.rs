use rand::Rng;

/// Character replaced by a random digit during expansion.
pub const PLACEHOLDER: char = '#';

/// Suffix of categories whose samples are templates.
pub const FORMAT_SUFFIX: &str = "_format";

/// Name of the template category for `category` (e.g. `phone` -> `phone_format`).
pub fn format_category(category: &str) -> String {
    format!("{}{}", category, FORMAT_SUFFIX)
}

/// Replace every placeholder in `format` with an independent random digit.
pub fn expand<R: Rng + ?Sized>(format: &str, rng: &mut R) -> String {
    format
        .chars()
        .map(|c| {
            if c == PLACEHOLDER {
                char::from(b'0' + rng.gen_range(0..10u8))
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_format_category() {
        assert_eq!(format_category("phone"), "phone_format");
    }

    #[test]
    fn test_expand_without_placeholders() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(expand("ABC-xyz", &mut rng), "ABC-xyz");
        assert_eq!(expand("", &mut rng), "");
    }

    #[test]
    fn test_expand_only_placeholders() {
        let mut rng = StdRng::seed_from_u64(7);
        let out = expand("#####", &mut rng);
        assert_eq!(out.len(), 5);
        assert!(out.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_expand_mixed() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = expand("(###) ###-####", &mut rng);
        assert_eq!(out.len(), 14);
        assert_eq!(&out[0..1], "(");
        assert_eq!(&out[4..6], ") ");
        assert_eq!(&out[9..10], "-");
    }

    #[test]
    fn test_expand_is_deterministic_for_seed() {
        let a = expand("####-####", &mut StdRng::seed_from_u64(3));
        let b = expand("####-####", &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_expand_uses_every_digit_eventually() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = expand(&"#".repeat(1000), &mut rng);
        for digit in '0'..='9' {
            assert!(out.contains(digit), "digit {} never produced", digit);
        }
    }

    proptest! {
        #[test]
        fn prop_expand_preserves_shape(
            format in "[#a-zA-Z0-9 ()\\-éß]{0,40}",
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = expand(&format, &mut rng);

            let original: Vec<char> = format.chars().collect();
            let expanded: Vec<char> = out.chars().collect();
            prop_assert_eq!(original.len(), expanded.len());

            for (o, e) in original.iter().zip(expanded.iter()) {
                if *o == PLACEHOLDER {
                    prop_assert!(e.is_ascii_digit());
                } else {
                    prop_assert_eq!(o, e);
                }
            }
        }
    }
}
