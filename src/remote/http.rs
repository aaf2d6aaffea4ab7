//! HTTP Remote Store
//!
//! reqwest-backed implementation speaking the meal service's REST API.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{CreateAck, RemoteConfig, RemoteStore};
use crate::domain::{MealAssignment, MealType, MonthCost, PantryItem};
use crate::error::RemoteError;

pub struct HttpRemoteStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRemoteStore {
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RemoteError> {
        let resp = self.client.get(format!("{}{}", self.base_url, path)).send().await?;
        let resp = check_status(resp)?;
        resp.json::<T>().await.map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(RemoteError::Status(status.as_u16()))
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn fetch_assignments(&self, year: i32) -> Result<Vec<MealAssignment>, RemoteError> {
        self.get_json(&format!("/api/v1/meals/year/{year}/all")).await
    }

    async fn fetch_pantry(&self) -> Result<Vec<PantryItem>, RemoteError> {
        self.get_json("/api/v1/meals/pantry/all").await
    }

    async fn fetch_month_costs(&self, year: i32) -> Result<Vec<MonthCost>, RemoteError> {
        self.get_json(&format!("/api/v1/meals/cost/year/{year}")).await
    }

    async fn create_assignment(
        &self,
        pantry_item_id: i64,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Result<CreateAck, RemoteError> {
        #[derive(Deserialize)]
        struct Created {
            id: i64,
        }

        let url = format!(
            "{}/api/v1/meals/add/{}?newDate={}&mealType={}",
            self.base_url, pantry_item_id, date, meal_type
        );
        let resp = check_status(self.client.post(url).send().await?)?;
        // A missing or malformed body is tolerated; the caller keeps its
        // placeholder id until the next full refetch.
        let id = resp.json::<Created>().await.ok().map(|c| c.id);
        Ok(CreateAck { id })
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        date: NaiveDate,
        meal_type: MealType,
    ) -> Result<(), RemoteError> {
        let url = format!(
            "{}/api/v1/meals/update/{}?newDate={}&mealType={}",
            self.base_url, assignment_id, date, meal_type
        );
        check_status(self.client.put(url).send().await?)?;
        Ok(())
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<(), RemoteError> {
        let url = format!("{}/api/v1/meals/delete/{}", self.base_url, assignment_id);
        check_status(self.client.delete(url).send().await?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RemoteConfig::default();
        assert_eq!(config.base_url, "http://localhost:9998");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_config_from_json_with_partial_fields() {
        let config: RemoteConfig =
            serde_json::from_str(r#"{"base_url":"http://meals.local"}"#).unwrap();
        assert_eq!(config.base_url, "http://meals.local");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let store = HttpRemoteStore::new(RemoteConfig {
            base_url: "http://meals.local/".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        assert_eq!(store.base_url, "http://meals.local");
    }
}
