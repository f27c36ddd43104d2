#![allow(dead_code)]

use std::time::Duration;

use serde_json::json;
use wiremock::MockServer;
use yummly::client::DEFAULT_BASE_URL;
use yummly::YummlyClient;

pub const TEST_APP_ID: &str = "test-app-id";
pub const TEST_APP_KEY: &str = "test-app-key";

pub const TURKEY_RECIPE_ID: &str = "Hot-Turkey-Salad-Sandwiches-Allrecipes";

/// Client pointed at a wiremock server.
pub fn test_client(server: &MockServer) -> YummlyClient {
    YummlyClient::with_base_url(server.uri(), TEST_APP_ID, TEST_APP_KEY)
}

/// Search-result summary for the sample recipe, consistent with
/// [`turkey_recipe`] on every round-trip field.
pub fn turkey_match() -> serde_json::Value {
    json!({
        "id": TURKEY_RECIPE_ID,
        "recipeName": "Hot Turkey Salad Sandwiches",
        "ingredients": [
            "turkey",
            "mayonnaise",
            "celery",
            "onion",
            "lemon juice",
            "swiss cheese",
            "sandwich buns"
        ],
        "totalTimeInSeconds": 1500,
        "attributes": {
            "course": ["Main Dishes"],
            "cuisine": ["American"]
        },
        "sourceDisplayName": "Allrecipes",
        "rating": 4.5,
        "flavors": {"meaty": 0.83, "salty": 0.66},
        "smallImageUrls": ["https://i.yummly.example/turkey-salad.s.jpg"]
    })
}

/// Full detail for the sample recipe.
pub fn turkey_recipe() -> serde_json::Value {
    json!({
        "id": TURKEY_RECIPE_ID,
        "name": "Hot Turkey Salad Sandwiches",
        "ingredientLines": [
            "2 cups diced cooked turkey",
            "1/2 cup mayonnaise",
            "1 cup chopped celery",
            "2 tablespoons chopped onion",
            "1 tablespoon lemon juice",
            "4 slices swiss cheese",
            "6 sandwich buns"
        ],
        "totalTime": "25 min",
        "totalTimeInSeconds": 1500,
        "attributes": {
            "course": ["Main Dishes"],
            "cuisine": ["American"]
        },
        "source": {
            "sourceDisplayName": "Allrecipes",
            "sourceRecipeUrl": "https://allrecipes.example/recipe/hot-turkey-salad-sandwiches",
            "sourceSiteUrl": "https://allrecipes.example"
        },
        "yield": "6 servings",
        "images": [{
            "hostedLargeUrl": "https://i.yummly.example/turkey-salad.l.jpg",
            "hostedSmallUrl": "https://i.yummly.example/turkey-salad.s.jpg"
        }],
        "rating": 4.5,
        "numberOfServings": 6,
        "attribution": attribution(),
        "nutritionEstimates": [{
            "attribute": "K",
            "description": "Potassium",
            "value": 0.28,
            "unit": {"name": "gram", "abbreviation": "g", "plural": "grams"}
        }]
    })
}

pub fn attribution() -> serde_json::Value {
    json!({
        "html": "<a href='https://yummly.example'>recipe search powered by Yummly</a>",
        "url": "https://yummly.example",
        "text": "recipe search powered by Yummly",
        "logo": "https://yummly.example/logo.png"
    })
}

/// Search response body with the given matches and echoed criteria.
pub fn search_body(matches: &[serde_json::Value], criteria: serde_json::Value) -> serde_json::Value {
    json!({
        "matches": matches,
        "criteria": criteria,
        "facetCounts": {
            "ingredient": {"turkey": 12, "celery": 5},
            "diet": {"388^Lacto vegetarian": 3}
        },
        "totalMatchCount": matches.len(),
        "attribution": attribution()
    })
}

/// JSONP document the metadata endpoint answers with.
pub fn metadata_jsonp(key: &str) -> String {
    let entries = json!([
        {
            "id": format!("{key}-1"),
            "description": format!("First {key} entry"),
            "searchValue": format!("{key}^first"),
            "type": key,
            "localesAvailableIn": ["en-US"]
        },
        {
            "id": format!("{key}-2"),
            "term": format!("second {key}"),
            "searchValue": format!("{key}^second")
        }
    ]);
    format!("set_metadata('{key}', {entries});")
}

/// Environment for tests against the real API.
///
/// Credentials come from `YUMMLY_APP_ID` / `YUMMLY_APP_KEY`; live tests skip
/// themselves when neither is configured, so the suite stays green in CI.
pub struct LiveEnvironment {
    pub client: YummlyClient,
    pub sample_recipe_id: String,
}

impl LiveEnvironment {
    pub fn from_env() -> Option<Self> {
        let api_id = std::env::var("YUMMLY_APP_ID").ok()?;
        let api_key = std::env::var("YUMMLY_APP_KEY").ok()?;
        let base_url =
            std::env::var("YUMMLY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let sample_recipe_id = std::env::var("YUMMLY_SAMPLE_RECIPE_ID")
            .unwrap_or_else(|_| TURKEY_RECIPE_ID.to_string());

        Some(Self {
            client: YummlyClient::with_base_url(base_url, api_id, api_key),
            sample_recipe_id,
        })
    }

    /// Wait between calls so the live API does not throttle the suite.
    pub async fn throttle() {
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
