//! Search parameter configuration and query-pair assembly.
//!
//! The search endpoint takes an open set of parameters: a handful of
//! documented knobs plus dotted range keys (`flavor.sweet.max`,
//! `nutrition.FAT.min`) and whatever facets the backend grows later.
//! [`SearchParams`] models the documented knobs as structured fields and keeps
//! an untyped passthrough for the rest, so new backend parameters never
//! require a client release.

use std::collections::BTreeMap;

/// Parameters for the search endpoint.
///
/// Build with the `with_*`/`allow_*` methods and pass to
/// [`YummlyClient::search_with`](crate::client::YummlyClient::search_with):
///
/// ```
/// use yummly::SearchParams;
///
/// let params = SearchParams::new("chicken casserole")
///     .with_max_result(40)
///     .with_require_pictures(true)
///     .allow_ingredient("salt")
///     .exclude_ingredient("cumin")
///     .with_max_total_time_in_seconds(3600)
///     .with_facet_field("ingredient")
///     .with_flavor("sweet", 0.0, 0.75)
///     .with_nutrition("FAT", 0.0, 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    q: Option<String>,
    start: Option<u32>,
    max_result: Option<u32>,
    require_pictures: Option<bool>,
    allowed_ingredients: Vec<String>,
    excluded_ingredients: Vec<String>,
    max_total_time_in_seconds: Option<u32>,
    facet_fields: Vec<String>,
    flavor_ranges: BTreeMap<String, (Option<f64>, Option<f64>)>,
    nutrition_ranges: BTreeMap<String, (Option<f64>, Option<f64>)>,
    extra: Vec<(String, String)>,
}

impl SearchParams {
    /// Parameters for a plain keyword query.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Self::default()
        }
    }

    /// Set the keyword query.
    #[must_use]
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Offset of the first match to return (pagination).
    #[must_use]
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    /// Maximum number of matches to return.
    #[must_use]
    pub fn with_max_result(mut self, max_result: u32) -> Self {
        self.max_result = Some(max_result);
        self
    }

    /// Only return recipes with pictures.
    #[must_use]
    pub fn with_require_pictures(mut self, require: bool) -> Self {
        self.require_pictures = Some(require);
        self
    }

    /// Require an ingredient in every match. May be called repeatedly.
    #[must_use]
    pub fn allow_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.allowed_ingredients.push(ingredient.into());
        self
    }

    /// Exclude matches containing an ingredient. May be called repeatedly.
    #[must_use]
    pub fn exclude_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.excluded_ingredients.push(ingredient.into());
        self
    }

    /// Upper bound on total preparation plus cook time.
    #[must_use]
    pub fn with_max_total_time_in_seconds(mut self, seconds: u32) -> Self {
        self.max_total_time_in_seconds = Some(seconds);
        self
    }

    /// Request match counts for a facet (e.g. `ingredient`, `diet`).
    #[must_use]
    pub fn with_facet_field(mut self, facet: impl Into<String>) -> Self {
        self.facet_fields.push(facet.into());
        self
    }

    /// Constrain a flavor dimension (`sweet`, `meaty`, `bitter`, `piquant`, ...)
    /// to `[min, max]`. Either bound may be omitted by passing `None`.
    #[must_use]
    pub fn with_flavor(
        mut self,
        flavor: impl Into<String>,
        min: impl Into<Option<f64>>,
        max: impl Into<Option<f64>>,
    ) -> Self {
        self.flavor_ranges
            .insert(flavor.into(), (min.into(), max.into()));
        self
    }

    /// Constrain a nutrient (`FAT`, `SUGAR`, ...) to `[min, max]`.
    #[must_use]
    pub fn with_nutrition(
        mut self,
        nutrient: impl Into<String>,
        min: impl Into<Option<f64>>,
        max: impl Into<Option<f64>>,
    ) -> Self {
        self.nutrition_ranges
            .insert(nutrient.into(), (min.into(), max.into()));
        self
    }

    /// Pass an arbitrary key/value pair through to the backend verbatim.
    ///
    /// Escape hatch for parameters this type has no structured field for.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }

    /// Assemble the ordered key/value pairs for the query string.
    ///
    /// Array-valued parameters repeat under a `name[]` key; ranges become
    /// dotted `category.item.min`/`category.item.max` keys. Values are not
    /// percent-encoded here; the client encodes them when the URL is built.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(ref q) = self.q {
            pairs.push(("q".to_string(), q.clone()));
        }
        if let Some(start) = self.start {
            pairs.push(("start".to_string(), start.to_string()));
        }
        if let Some(max_result) = self.max_result {
            pairs.push(("maxResult".to_string(), max_result.to_string()));
        }
        if let Some(require) = self.require_pictures {
            pairs.push(("requirePictures".to_string(), require.to_string()));
        }
        if let Some(seconds) = self.max_total_time_in_seconds {
            pairs.push(("maxTotalTimeInSeconds".to_string(), seconds.to_string()));
        }
        for ingredient in &self.allowed_ingredients {
            pairs.push(("allowedIngredient[]".to_string(), ingredient.clone()));
        }
        for ingredient in &self.excluded_ingredients {
            pairs.push(("excludedIngredient[]".to_string(), ingredient.clone()));
        }
        for facet in &self.facet_fields {
            pairs.push(("facetField[]".to_string(), facet.clone()));
        }
        push_ranges(&mut pairs, "flavor", &self.flavor_ranges);
        push_ranges(&mut pairs, "nutrition", &self.nutrition_ranges);
        for (key, value) in &self.extra {
            pairs.push((key.clone(), value.clone()));
        }

        pairs
    }
}

fn push_ranges(
    pairs: &mut Vec<(String, String)>,
    category: &str,
    ranges: &BTreeMap<String, (Option<f64>, Option<f64>)>,
) {
    for (name, (min, max)) in ranges {
        if let Some(min) = min {
            pairs.push((format!("{category}.{name}.min"), min.to_string()));
        }
        if let Some(max) = max {
            pairs.push((format!("{category}.{name}.max"), max.to_string()));
        }
    }
}
