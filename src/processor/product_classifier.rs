use super::text_normalizer::normalize_inline;

/// Keyword-table classifier for catalog fields. Tables are ordered and
/// matching is case-insensitive substring containment: single-valued outputs
/// take the first match, multi-valued outputs collect every match in table
/// order. Approximate by design; a miss is never an error.
pub struct ProductClassifier {
    type_keywords: Vec<(&'static str, &'static str)>,
    benefit_map: Vec<(&'static str, &'static [&'static str])>,
    collection_map: Vec<(&'static str, &'static [&'static str])>,
    concern_map: Vec<(&'static str, &'static [&'static str])>,
}

const MAX_BENEFITS: usize = 4;

impl ProductClassifier {
    pub fn new() -> Self {
        // Order matters: "sunscreen"/"spf" must win over "lotion", "serum"
        // over "oil", "cream" maps onto moisturizer.
        let type_keywords = vec![
            ("sunscreen", "sunscreen"),
            ("spf", "sunscreen"),
            ("serum", "serum"),
            ("cleanser", "cleanser"),
            ("lotion", "lotion"),
            ("moisturizer", "moisturizer"),
            ("cream", "moisturizer"),
            ("mask", "mask"),
            ("eye", "eye care"),
            ("toner", "toner"),
            ("essence", "essence"),
            ("oil", "oil"),
            ("set", "gift set"),
            ("kit", "gift set"),
        ];

        let benefit_map: Vec<(&str, &[&str])> = vec![
            ("hydration", &["hydration", "hydrate", "moisture"]),
            ("brightening", &["brighten", "radiance", "glow"]),
            ("firming", &["firm", "lifting", "elasticity"]),
            ("soothing", &["soothe", "calm", "sensitive"]),
            ("smoothing", &["smooth", "refine", "texture"]),
            ("repair", &["repair", "revital", "renew"]),
            ("sun protection", &["spf", "sun protection", "uv"]),
        ];

        let collection_map: Vec<(&str, &[&str])> = vec![
            ("Ultimune", &["ultimune"]),
            ("Shiseido Eudermine", &["eudermine"]),
            ("Benefiance", &["benefiance"]),
            ("Vital Perfection", &["vital perfection"]),
            ("Future Solution LX", &["future solution lx", "future solution"]),
            ("Bio-Performance", &["bio-performance", "bio performance"]),
            ("Essential Energy", &["essential energy"]),
            ("White Lucent", &["white lucent"]),
            ("Waso", &["waso"]),
        ];

        let concern_map: Vec<(&str, &[&str])> = vec![
            (
                "Anti-Aging",
                &[
                    "anti-aging",
                    "anti aging",
                    "age-defying",
                    "age defying",
                    "age-defiant",
                    "age defiant",
                    "wrinkle",
                    "wrinkles",
                    "firming",
                    "lifting",
                    "sagging",
                    "loss of elasticity",
                ],
            ),
            (
                "Dullness & Dark Spots",
                &[
                    "dull",
                    "dullness",
                    "dark spot",
                    "dark spots",
                    "hyperpigmentation",
                    "discoloration",
                    "uneven tone",
                    "brighten",
                    "brightening",
                    "radiance",
                    "radiant",
                    "glow",
                    "luminous",
                ],
            ),
            (
                "Fine Lines & Wrinkles",
                &[
                    "fine line",
                    "fine lines",
                    "wrinkle",
                    "wrinkles",
                    "crow's feet",
                    "crow\u{2019}s feet",
                ],
            ),
            (
                "Lifting & Firming",
                &[
                    "lifting",
                    "firming",
                    "elasticity",
                    "contour",
                    "tighten",
                    "tightening",
                ],
            ),
            (
                "Dryness & Dehydration",
                &[
                    "dryness",
                    "dry",
                    "dehydration",
                    "dehydrated",
                    "hydrate",
                    "hydration",
                    "moisture",
                    "moisturize",
                    "moisturizing",
                    "hyaluronic",
                ],
            ),
            (
                "Oil Control",
                &["oil control", "oil-control", "oily", "shine", "sebum", "matte"],
            ),
        ];

        ProductClassifier {
            type_keywords,
            benefit_map,
            collection_map,
            concern_map,
        }
    }

    /// First matching keyword in the product name wins; "skincare" otherwise.
    pub fn infer_product_type(&self, name: &str) -> &'static str {
        let lowered = name.to_lowercase();
        self.type_keywords
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, label)| *label)
            .unwrap_or("skincare")
    }

    /// Derive the category label. Raw values containing digits or the word
    /// "rating" are scraping noise and replaced by `Skincare/<Type>`; values
    /// already holding a path are passed through; anything else gets the
    /// `Skincare/` prefix.
    pub fn normalize_category(&self, value: &str, product_type: &str) -> String {
        if value.is_empty() {
            return format!("Skincare/{}", title_case(product_type));
        }
        let cleaned = normalize_inline(value);
        let lowered = cleaned.to_lowercase();
        if lowered.contains("rating") || cleaned.chars().any(|c| c.is_ascii_digit()) {
            return format!("Skincare/{}", title_case(product_type));
        }
        if cleaned.contains('/') {
            return cleaned;
        }
        format!("Skincare/{cleaned}")
    }

    pub fn infer_benefits(&self, text: &str) -> Vec<String> {
        let mut benefits = collect_matches(&self.benefit_map, text);
        benefits.truncate(MAX_BENEFITS);
        benefits
    }

    pub fn infer_collections(&self, text: &str) -> Vec<String> {
        collect_matches(&self.collection_map, text)
    }

    pub fn infer_concerns(&self, text: &str) -> Vec<String> {
        collect_matches(&self.concern_map, text)
    }

    /// Shop-navigation categories: one pass keyed off the inferred product
    /// type, then token groups over name + description + category label.
    /// Insertion-ordered, duplicates suppressed.
    pub fn infer_shop_categories(
        &self,
        name: &str,
        description: &str,
        category_label: &str,
        product_type: &str,
    ) -> Vec<String> {
        let text = [name, description, category_label]
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let mut categories: Vec<String> = Vec::new();

        match product_type {
            "cleanser" => push_unique(&mut categories, "Cleansers & Makeup Removers"),
            "toner" => push_unique(&mut categories, "Softeners"),
            "serum" | "essence" | "oil" => push_unique(&mut categories, "Serums & Treatments"),
            "moisturizer" => push_unique(&mut categories, "Moisturizers & Creams"),
            "eye care" => push_unique(&mut categories, "Eye & Lip Care"),
            "mask" => push_unique(&mut categories, "Masks"),
            _ => {}
        }

        let token_groups: [(&str, &[&str]); 9] = [
            (
                "Cleansers & Makeup Removers",
                &[
                    "cleanser",
                    "cleansing",
                    "makeup remover",
                    "micellar",
                    "cleansing oil",
                    "cleansing water",
                    "remover",
                ],
            ),
            (
                "Softeners",
                &["softener", "treatment softener", "skin softener"],
            ),
            (
                "Serums & Treatments",
                &["serum", "treatment", "concentrate", "ampoule", "essence", "booster"],
            ),
            (
                "Moisturizers & Creams",
                &[
                    "moisturizer",
                    "moisturizing",
                    "cream",
                    "gel-cream",
                    "gel cream",
                    "lotion",
                    "emulsion",
                ],
            ),
            (
                "Eye & Lip Care",
                &["eye", "lip", "eye cream", "eye mask", "lip balm"],
            ),
            ("Masks", &["mask"]),
            ("Refillable Skincare", &["refill", "refillable"]),
            (
                "Best Sellers",
                &["best seller", "bestseller", "best-seller"],
            ),
            (
                "Last Chance",
                &["last chance", "last-chance", "final sale", "discontinued"],
            ),
        ];
        for (label, tokens) in token_groups {
            if tokens.iter().any(|token| text.contains(token)) {
                push_unique(&mut categories, label);
            }
        }

        categories
    }
}

impl Default for ProductClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_matches(table: &[(&'static str, &'static [&'static str])], text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    table
        .iter()
        .filter(|(_, tokens)| tokens.iter().any(|token| lowered.contains(token)))
        .map(|(label, _)| (*label).to_string())
        .collect()
}

fn push_unique(labels: &mut Vec<String>, label: &str) {
    if !labels.iter().any(|existing| existing == label) {
        labels.push(label.to_string());
    }
}

fn title_case(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
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
    fn test_product_type_first_match_wins() {
        let classifier = ProductClassifier::new();

        // "Urban Environment SPF lotion": "spf" outranks "lotion".
        assert_eq!(
            classifier.infer_product_type("Urban Environment Oil-Free SPF 42 Lotion"),
            "sunscreen"
        );
        assert_eq!(
            classifier.infer_product_type("Ultimune Power Infusing Serum"),
            "serum"
        );
        assert_eq!(
            classifier.infer_product_type("Benefiance Wrinkle Smoothing Cream"),
            "moisturizer"
        );
        assert_eq!(classifier.infer_product_type("Eudermine Activating Essence"), "essence");
        assert_eq!(classifier.infer_product_type("Something Unrecognizable"), "skincare");
        assert_eq!(classifier.infer_product_type(""), "skincare");
    }

    #[test]
    fn test_category_normalization() {
        let classifier = ProductClassifier::new();

        // Noise values (digits or "rating") fall back to the derived label.
        assert_eq!(
            classifier.normalize_category("4.5 rating", "serum"),
            "Skincare/Serum"
        );
        assert_eq!(
            classifier.normalize_category("384 reviews", "eye care"),
            "Skincare/Eye Care"
        );
        // Path values pass through untouched.
        assert_eq!(
            classifier.normalize_category("Skincare/Moisturizers", "moisturizer"),
            "Skincare/Moisturizers"
        );
        // Plain labels get the prefix.
        assert_eq!(
            classifier.normalize_category("Serums", "serum"),
            "Skincare/Serums"
        );
        assert_eq!(classifier.normalize_category("", "gift set"), "Skincare/Gift Set");
    }

    #[test]
    fn test_benefits_capped_and_table_ordered() {
        let classifier = ProductClassifier::new();
        let text = "spf protection, firming lift, smooth texture, deep hydration, calm glow";
        let benefits = classifier.infer_benefits(text);

        assert_eq!(benefits.len(), 4);
        // Table-declaration order, not text order.
        assert_eq!(benefits, vec!["hydration", "brightening", "firming", "soothing"]);
    }

    #[test]
    fn test_collections_substring_match() {
        let classifier = ProductClassifier::new();
        assert_eq!(
            classifier.infer_collections("The ULTIMUNE power infusing concentrate"),
            vec!["Ultimune"]
        );
        assert_eq!(
            classifier.infer_collections("Future Solution LX night cream with Waso water"),
            vec!["Future Solution LX", "Waso"]
        );
        assert!(classifier.infer_collections("generic cream").is_empty());
    }

    #[test]
    fn test_concerns() {
        let classifier = ProductClassifier::new();
        let concerns =
            classifier.infer_concerns("Targets fine lines and dullness; helps hydrate dry skin");
        assert_eq!(
            concerns,
            vec![
                "Dullness & Dark Spots",
                "Fine Lines & Wrinkles",
                "Dryness & Dehydration"
            ]
        );
    }

    #[test]
    fn test_shop_categories_deduplicate() {
        let classifier = ProductClassifier::new();
        // Type pass and token pass both produce "Serums & Treatments".
        let categories =
            classifier.infer_shop_categories("Ultimune Serum", "a daily treatment", "", "serum");
        assert_eq!(categories, vec!["Serums & Treatments"]);
    }

    #[test]
    fn test_shop_categories_token_groups() {
        let classifier = ProductClassifier::new();
        let categories = classifier.infer_shop_categories(
            "Benefiance Eye Cream",
            "refillable best seller",
            "Skincare/Eye Care",
            "eye care",
        );
        assert_eq!(
            categories,
            vec![
                "Eye & Lip Care",
                "Moisturizers & Creams",
                "Refillable Skincare",
                "Best Sellers"
            ]
        );
    }
}
