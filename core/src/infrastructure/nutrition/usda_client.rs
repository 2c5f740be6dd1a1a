use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, error};

use crate::domain::{
    common::{NutritionConfig, entities::app_errors::CoreError},
    nutrition::{
        entities::{FoodDetails, FoodNutrient, FoodSearchResult},
        ports::NutritionClient,
    },
};

/// USDA FoodData Central client.
#[derive(Debug, Clone)]
pub struct UsdaNutritionClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    fdc_id: u64,
    description: String,
    #[serde(default)]
    data_type: String,
    brand_owner: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodDetailsResponse {
    fdc_id: u64,
    description: String,
    #[serde(default)]
    data_type: String,
    brand_owner: Option<String>,
    #[serde(default)]
    food_nutrients: Vec<FoodNutrientResponse>,
    serving_size: Option<f64>,
    serving_size_unit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FoodNutrientResponse {
    nutrient: Option<NutrientInfo>,
    amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NutrientInfo {
    id: u32,
    name: String,
    #[serde(default)]
    unit_name: String,
}

impl From<SearchFood> for FoodSearchResult {
    fn from(food: SearchFood) -> Self {
        Self {
            fdc_id: food.fdc_id,
            description: food.description,
            data_type: food.data_type,
            brand_owner: food.brand_owner,
        }
    }
}

impl From<FoodDetailsResponse> for FoodDetails {
    fn from(response: FoodDetailsResponse) -> Self {
        let food_nutrients = response
            .food_nutrients
            .into_iter()
            .filter_map(|entry| {
                let nutrient = entry.nutrient?;
                Some(FoodNutrient {
                    nutrient_id: nutrient.id,
                    nutrient_name: nutrient.name,
                    unit_name: nutrient.unit_name,
                    amount: entry.amount?,
                })
            })
            .collect();

        Self {
            fdc_id: response.fdc_id,
            description: response.description,
            data_type: response.data_type,
            brand_owner: response.brand_owner,
            food_nutrients,
            serving_size: response.serving_size,
            serving_size_unit: response.serving_size_unit,
        }
    }
}

impl UsdaNutritionClient {
    pub fn new(config: &NutritionConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                error!("Failed to build USDA HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            api_key: config.usda_api_key.clone().filter(|key| !key.is_empty()),
            base_url: config.usda_base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| CoreError::NotConfigured("USDA API key is not set".to_string()))
    }

    async fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, CoreError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let response = self.client.get(url).query(query).send().await.map_err(|e| {
            error!("USDA API request failed: {}", e);
            CoreError::ExternalServiceError(format!("USDA API error: {}", e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CoreError::NotFound);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("USDA API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "USDA API returned error: {}",
                status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to parse USDA response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse USDA response: {}", e))
        })
    }
}

impl NutritionClient for UsdaNutritionClient {
    async fn search_foods(
        &self,
        query: String,
        page_size: u32,
    ) -> Result<Vec<FoodSearchResult>, CoreError> {
        let api_key = self.api_key()?;
        let url = format!("{}/foods/search", self.base_url);
        let page_size = page_size.to_string();

        let response: SearchResponse = self
            .get_json(
                &url,
                &[
                    ("query", query.as_str()),
                    ("pageSize", page_size.as_str()),
                    ("api_key", api_key),
                ],
            )
            .await?;

        debug!(results = response.foods.len(), "USDA search completed");

        Ok(response.foods.into_iter().map(FoodSearchResult::from).collect())
    }

    async fn get_food(&self, fdc_id: u64) -> Result<FoodDetails, CoreError> {
        let api_key = self.api_key()?;
        let url = format!("{}/food/{}", self.base_url, fdc_id);

        let response: FoodDetailsResponse = self.get_json(&url, &[("api_key", api_key)]).await?;

        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_details_response_skips_incomplete_nutrients() {
        let body = json!({
            "fdcId": 2344719,
            "description": "Almond butter",
            "dataType": "Branded",
            "brandOwner": "Nutty Co",
            "foodNutrients": [
                { "nutrient": { "id": 1003, "name": "Protein", "unitName": "g" }, "amount": 21.2 },
                { "nutrient": { "id": 1005, "name": "Carbohydrate, by difference", "unitName": "g" } },
                { "amount": 4.0 }
            ],
            "servingSize": 32.0,
            "servingSizeUnit": "g"
        });

        let response: FoodDetailsResponse = serde_json::from_value(body).unwrap();
        let details = FoodDetails::from(response);

        assert_eq!(details.fdc_id, 2344719);
        assert_eq!(details.brand_owner.as_deref(), Some("Nutty Co"));
        assert_eq!(details.food_nutrients.len(), 1);
        assert_eq!(details.food_nutrients[0].nutrient_name, "Protein");
        assert_eq!(details.serving_size, Some(32.0));
    }

    #[test]
    fn test_search_response_mapping() {
        let body = json!({
            "totalHits": 1,
            "foods": [{ "fdcId": 1750340, "description": "Apple, raw", "dataType": "Foundation" }]
        });

        let response: SearchResponse = serde_json::from_value(body).unwrap();
        let results: Vec<FoodSearchResult> =
            response.foods.into_iter().map(FoodSearchResult::from).collect();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].fdc_id, 1750340);
        assert_eq!(results[0].brand_owner, None);
    }

    #[tokio::test]
    async fn test_missing_api_key_is_not_configured() {
        let client = UsdaNutritionClient::new(&NutritionConfig::default()).unwrap();

        let result = client.get_food(1).await;

        assert!(matches!(result, Err(CoreError::NotConfigured(_))));
    }
}
