//! Hair types reported by the remote photo-classification service.

use super::domain::{HairFamily, HairType};

/// Type assumed when the remote label cannot be mapped.
pub const EXTERNAL_DEFAULT: HairType = HairType::Type3A;

impl HairType {
    /// Maps labels such as `"4b"`, `"Type 4B - Zigzag Pattern"` or `"3-C"`.
    ///
    /// The label is lowercased and stripped of non-alphanumerics and a leading
    /// `type`. A family digit followed by `a`, `b` or `c` selects that type; a bare
    /// digit selects the family's middle type. Anything else maps to `3A`.
    pub fn from_external_label(label: &str) -> HairType {
        let normalized: String = label
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let code = normalized.strip_prefix("type").unwrap_or(&normalized);

        let mut chars = code.chars();
        let Some(family) = chars.next().and_then(HairFamily::from_digit) else {
            return EXTERNAL_DEFAULT;
        };

        if family == HairFamily::Straight {
            return HairType::Type1;
        }

        let subtype = chars.next();
        HairType::ordered()
            .into_iter()
            .filter(|hair_type| hair_type.family() == family)
            .find(|hair_type| {
                let label = hair_type.label().to_ascii_lowercase();
                label.chars().nth(1) == subtype
            })
            .unwrap_or_else(|| family.default_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_codes_map_directly() {
        assert_eq!(HairType::from_external_label("4b"), HairType::Type4B);
        assert_eq!(HairType::from_external_label("3C"), HairType::Type3C);
        assert_eq!(HairType::from_external_label(" 2-a "), HairType::Type2A);
    }

    #[test]
    fn descriptive_labels_are_normalized() {
        assert_eq!(
            HairType::from_external_label("Type 4B - Zigzag Pattern"),
            HairType::Type4B
        );
        assert_eq!(
            HairType::from_external_label("Type 1A - Straight"),
            HairType::Type1
        );
    }

    #[test]
    fn bare_family_digit_uses_middle_type() {
        assert_eq!(HairType::from_external_label("4"), HairType::Type4B);
        assert_eq!(HairType::from_external_label("type 2"), HairType::Type2B);
        assert_eq!(HairType::from_external_label("4d"), HairType::Type4B);
        assert_eq!(HairType::from_external_label("1x"), HairType::Type1);
    }

    #[test]
    fn unrecognized_labels_default_to_3a() {
        assert_eq!(HairType::from_external_label(""), EXTERNAL_DEFAULT);
        assert_eq!(HairType::from_external_label("kinky"), EXTERNAL_DEFAULT);
        assert_eq!(HairType::from_external_label("7a"), EXTERNAL_DEFAULT);
    }
}
