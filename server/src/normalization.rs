use serde::{Deserialize, Deserializer};

/// Normalizes a submitted form field by stripping surrounding
/// whitespace and decomposing it into Unicode Normalization Form D.
///
/// ```
/// use hub::normalization::normalize_field;
/// assert_eq!(normalize_field("  hello there  "), "hello there");
/// ```
pub fn normalize_field(value: impl AsRef<str>) -> String {
    use unicode_normalization::UnicodeNormalization;

    value.as_ref().trim().nfd().to_string()
}

/// Deserializes a `String` after running it through `normalize_field`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(normalize_field(s))
}
