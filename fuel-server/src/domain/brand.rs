//! Brand include/exclude lists.

/// A normalised list of brand tokens.
///
/// Tokens are trimmed, uppercased and never empty. Order follows the input,
/// with duplicates removed. An empty list means "no filter configured".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandList(Vec<String>);

impl BrandList {
    /// Parse a comma-separated list, e.g. `"repsol, cepsa"`.
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let upper = token.to_uppercase();
            if !tokens.contains(&upper) {
                tokens.push(upper);
            }
        }
        Self(tokens)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The normalised tokens.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// Whether `brand` matches this list. See [`brand_matches`].
    pub fn matches(&self, brand: &str) -> bool {
        brand_matches(brand, self)
    }
}

/// Normalise an optional comma-separated brand list.
///
/// Absent or blank input yields an empty list.
pub fn normalize_brand_list(raw: Option<&str>) -> BrandList {
    raw.map(BrandList::parse).unwrap_or_default()
}

/// Case-insensitive substring match of a brand name against a token list.
///
/// An empty list always matches. Otherwise the uppercased brand must
/// contain at least one token, so `"REPSOL BOMBA"` matches `REPSOL`.
pub fn brand_matches(brand: &str, tokens: &BrandList) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let upper = brand.to_uppercase();
    tokens.0.iter().any(|t| upper.contains(t.as_str()))
}
