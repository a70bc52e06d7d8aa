use reqwest::Client;
use url::Url;

use crate::error::{Result, UserdeckError};
use crate::responses::ApiResponse;
use crate::types::User;

pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Thin client over the random-user API.
#[derive(Clone)]
pub struct RandomUserClient {
    http: Client,
    base_url: Url,
}

impl RandomUserClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    /// Fetch one page of users.
    ///
    /// Pages are 1-indexed. Without a seed the API returns fresh random users
    /// for every call, which is exactly what the accumulating list expects.
    pub async fn fetch_page(
        &self,
        page: u32,
        results: u32,
        seed: Option<&str>,
    ) -> Result<Vec<User>> {
        let url = self.page_url(page, results, seed);

        let response = self.http.get(url).send().await?;

        if !response.status().is_success() {
            return Err(UserdeckError::Api {
                status: response.status().as_u16(),
                message: response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<failed to read response body>".to_string()),
            });
        }

        let body: ApiResponse = response.json().await?;

        if let Some(message) = body.error {
            return Err(UserdeckError::Upstream(message));
        }

        Ok(body.results)
    }

    fn page_url(&self, page: u32, results: u32, seed: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            pairs.append_pair("results", &results.to_string());
            if let Some(seed) = seed {
                pairs.append_pair("seed", seed);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_query() {
        let client = RandomUserClient::new(DEFAULT_API_URL).unwrap();
        let url = client.page_url(3, 8, None);
        assert_eq!(url.as_str(), "https://randomuser.me/api/?page=3&results=8");
    }

    #[test]
    fn test_page_url_with_seed() {
        let client = RandomUserClient::new(DEFAULT_API_URL).unwrap();
        let url = client.page_url(1, 8, Some("userdeck"));
        assert_eq!(
            url.as_str(),
            "https://randomuser.me/api/?page=1&results=8&seed=userdeck"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(RandomUserClient::new("not a url").is_err());
    }
}
