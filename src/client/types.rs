//! Type definitions for the Yummly API.
//!
//! This module contains the data structures mapped onto Yummly JSON responses
//! for recipe detail, search, and metadata lookups.
//!
//! ## Key Types
//!
//! - [`Recipe`] - Full recipe detail with ingredient lines, timings, and source
//! - [`Match`] - Lightweight search-result summary referencing a recipe by id
//! - [`SearchResult`] - Search response with matches, echoed criteria, and facet counts
//! - [`MetadataEntry`] - One entry of a metadata list (cuisines, diets, ...)
//!
//! ## API Compatibility
//!
//! The backend is loose about optional fields: `totalTime` may arrive as a
//! number, a string such as `"45 min"`, or not at all, and several list-valued
//! fields can be `null` instead of absent. Types here deserialize all of those
//! shapes into well-defined defaults (`0`, `None`, empty collections) so a
//! sparse recipe never fails to decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Min/max bounds applied to a flavor or nutrient dimension.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl Range {
    pub fn new(min: impl Into<Option<f64>>, max: impl Into<Option<f64>>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Echo of the search parameters the backend applied.
///
/// Returned inside every [`SearchResult`]; list- and map-valued fields come
/// back `null` when the corresponding parameter was not supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Raw query string as received
    pub q: Option<String>,
    /// Query terms, space-split from `q`
    #[serde(deserialize_with = "null_default")]
    pub terms: Vec<String>,
    /// Whether only picture-bearing recipes were requested
    pub require_pictures: Option<bool>,
    /// Ingredients every match must contain
    #[serde(deserialize_with = "null_default")]
    pub allowed_ingredients: Vec<String>,
    /// Ingredients no match may contain
    #[serde(deserialize_with = "null_default")]
    pub excluded_ingredients: Vec<String>,
    /// Applied attribute (flavor) ranges, keyed like `flavor-sweet`
    #[serde(deserialize_with = "null_default")]
    pub attribute_ranges: BTreeMap<String, Range>,
    /// Applied nutrition ranges, keyed by nutrient name
    #[serde(deserialize_with = "null_default")]
    pub nutrition_restrictions: BTreeMap<String, Range>,
    /// Facets for which counts were requested
    #[serde(deserialize_with = "null_default")]
    pub facet_fields: Vec<String>,
}

/// A search-result summary referencing a full [`Recipe`] by identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Recipe identifier, usable with the recipe detail endpoint
    pub id: String,
    /// Recipe name/title
    pub recipe_name: String,
    /// Ingredient names (summary form, one entry per ingredient)
    #[serde(default, deserialize_with = "null_default")]
    pub ingredients: Vec<String>,
    /// Combined prep and cook time; 0 when the recipe has no timing data
    #[serde(default)]
    pub total_time_in_seconds: u64,
    /// Categorical attributes (course, cuisine, holiday, ...)
    #[serde(default, deserialize_with = "null_default")]
    pub attributes: BTreeMap<String, serde_json::Value>,
    /// Display name of the publishing site
    #[serde(default)]
    pub source_display_name: String,
    /// Aggregate user rating
    #[serde(default)]
    pub rating: Option<f64>,
    /// Flavor profile scores in `[0, 1]`
    #[serde(default)]
    pub flavors: Option<BTreeMap<String, f64>>,
    /// Thumbnail URLs
    #[serde(default, deserialize_with = "null_default")]
    pub small_image_urls: Vec<String>,
}

/// Response of the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    /// Matches for the current page
    #[serde(deserialize_with = "null_default")]
    pub matches: Vec<Match>,
    /// Echo of the applied search parameters
    pub criteria: SearchCriteria,
    /// Facet name -> facet value -> number of matching recipes
    #[serde(deserialize_with = "null_default")]
    pub facet_counts: BTreeMap<String, BTreeMap<String, u64>>,
    /// Total number of matches across all pages
    pub total_match_count: u64,
    /// Required Yummly attribution block
    pub attribution: Option<Attribution>,
}

/// Full recipe detail object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name/title
    pub name: String,
    /// Full ingredient lines including quantities
    #[serde(default, deserialize_with = "null_default")]
    pub ingredient_lines: Vec<String>,
    /// Total time in minutes; the wire value may be a number or a string
    /// such as `"45 min"`, and is 0 when absent
    #[serde(default, deserialize_with = "lenient_minutes")]
    pub total_time: u64,
    /// Total time in seconds; 0 when the recipe has no timing data
    #[serde(default)]
    pub total_time_in_seconds: u64,
    /// Categorical attributes (course, cuisine, holiday, ...)
    #[serde(default, deserialize_with = "null_default")]
    pub attributes: BTreeMap<String, serde_json::Value>,
    /// Publishing site details
    #[serde(default)]
    pub source: RecipeSource,
    /// Human-readable yield, e.g. `"4 servings"`; absent on many recipes
    #[serde(rename = "yield", default)]
    pub yields: Option<String>,
    /// Hosted images; URL fields may be missing per image
    #[serde(default, deserialize_with = "null_default")]
    pub images: Vec<RecipeImage>,
    /// Aggregate user rating
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of servings the recipe produces
    #[serde(default)]
    pub number_of_servings: Option<u32>,
    /// Required Yummly attribution block
    #[serde(default)]
    pub attribution: Option<Attribution>,
    /// Per-nutrient estimates, when the source provides them
    #[serde(default, deserialize_with = "null_default")]
    pub nutrition_estimates: Vec<NutritionEstimate>,
}

/// Publishing site of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeSource {
    /// Display name of the publishing site
    pub source_display_name: String,
    /// Canonical recipe URL on the publishing site
    pub source_recipe_url: Option<String>,
    /// Publishing site home page
    pub source_site_url: Option<String>,
}

/// A hosted recipe image. Both URL fields are missing on some recipes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeImage {
    pub hosted_large_url: Option<String>,
    pub hosted_small_url: Option<String>,
}

/// Attribution block Yummly requires consumers to display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub html: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub logo: Option<String>,
}

/// A single nutrient estimate on a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEstimate {
    /// Nutrient code, e.g. `FAT_KCAL`
    pub attribute: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub value: f64,
    /// Unit descriptor; shape varies per nutrient
    #[serde(default)]
    pub unit: Option<serde_json::Value>,
}

/// One entry of a metadata list.
///
/// The exact field set varies per metadata key: ingredients carry a `term`,
/// cuisines and courses a `description` plus localized names. Everything
/// beyond the id is therefore optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataEntry {
    /// Stable identifier of the entry
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub term: Option<String>,
    /// Value to send back as a search parameter
    #[serde(default)]
    pub search_value: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub locales_available_in: Vec<String>,
}

impl MetadataEntry {
    /// Human-readable label: `description` where present, else `term`, else the id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.description
            .as_deref()
            .or(self.term.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Deserialize `null` as the type's default value.
///
/// The backend emits `null` rather than omitting several list- and map-valued
/// fields; plain `#[serde(default)]` only covers the absent case.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize `totalTime` from any of the shapes the backend produces.
///
/// Accepts a JSON number, a string with a leading minute count (`"45 min"`),
/// or `null`/absent, all mapping to whole minutes with 0 as the empty value.
fn lenient_minutes<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => 0,
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| f as u64))
            .unwrap_or(0),
        Some(serde_json::Value::String(s)) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            digits.parse().unwrap_or(0)
        }
        Some(_) => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recipe_with_all_optionals_missing() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "Oven-roasted-tomatoes-310681",
            "name": "Oven roasted tomatoes"
        }))
        .unwrap();

        assert_eq!(recipe.total_time, 0);
        assert_eq!(recipe.total_time_in_seconds, 0);
        assert_eq!(recipe.yields, None);
        assert!(recipe.ingredient_lines.is_empty());
        assert!(recipe.images.is_empty());
        assert_eq!(recipe.source, RecipeSource::default());
    }

    #[test]
    fn recipe_total_time_accepts_string_minutes() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "r",
            "name": "r",
            "totalTime": "45 min",
            "totalTimeInSeconds": 2700
        }))
        .unwrap();

        assert_eq!(recipe.total_time, 45);
        assert_eq!(recipe.total_time_in_seconds, 2700);
    }

    #[test]
    fn recipe_total_time_accepts_number() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "r",
            "name": "r",
            "totalTime": 25
        }))
        .unwrap();

        assert_eq!(recipe.total_time, 25);
    }

    #[test]
    fn image_urls_default_to_none() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": "Smoked-Salmon-Food-Network",
            "name": "Smoked Salmon",
            "images": [{}, {"hostedLargeUrl": null}]
        }))
        .unwrap();

        assert_eq!(recipe.images.len(), 2);
        for img in &recipe.images {
            assert!(img.hosted_large_url.is_none());
            assert!(img.hosted_small_url.is_none());
        }
    }

    #[test]
    fn criteria_tolerates_null_lists() {
        let criteria: SearchCriteria = serde_json::from_value(json!({
            "q": "chicken",
            "terms": ["chicken"],
            "allowedIngredients": null,
            "excludedIngredients": null,
            "facetFields": null,
            "attributeRanges": null,
            "nutritionRestrictions": null
        }))
        .unwrap();

        assert_eq!(criteria.terms, vec!["chicken"]);
        assert!(criteria.allowed_ingredients.is_empty());
        assert!(criteria.attribute_ranges.is_empty());
    }

    #[test]
    fn criteria_preserves_ranges() {
        let criteria: SearchCriteria = serde_json::from_value(json!({
            "attributeRanges": {"flavor-sweet": {"min": 0.0, "max": 0.75}},
            "nutritionRestrictions": {"FAT": {"min": 0.0, "max": 10.0}}
        }))
        .unwrap();

        assert_eq!(
            criteria.attribute_ranges["flavor-sweet"],
            Range::new(0.0, 0.75)
        );
        assert_eq!(
            criteria.nutrition_restrictions["FAT"],
            Range::new(0.0, 10.0)
        );
    }

    #[test]
    fn metadata_entry_label_fallbacks() {
        let with_description: MetadataEntry =
            serde_json::from_value(json!({"id": "cuisine-american", "description": "American"}))
                .unwrap();
        assert_eq!(with_description.label(), "American");

        let with_term: MetadataEntry =
            serde_json::from_value(json!({"id": "123", "term": "black pepper"})).unwrap();
        assert_eq!(with_term.label(), "black pepper");

        let bare: MetadataEntry = serde_json::from_value(json!({"id": "diet-vegan"})).unwrap();
        assert_eq!(bare.label(), "diet-vegan");
    }
}
