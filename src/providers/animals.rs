//! Random cat (TheCatAPI) and dog (dog.ceo) images.

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use crate::core::fetch::FetchError;
use crate::core::single::ResourceSource;
use crate::providers::http::HttpClient;
use crate::providers::types::{AnimalImage, Species};

pub const DEFAULT_CAT_BASE_URL: &str = "https://api.thecatapi.com";
pub const DEFAULT_DOG_BASE_URL: &str = "https://dog.ceo";

#[derive(Deserialize, Debug)]
struct CatImage {
    id: String,
    url: String,
}

#[derive(Deserialize, Debug)]
struct DogImage {
    message: String,
    status: String,
}

pub struct AnimalClient {
    http: HttpClient,
    cat_base_url: String,
    dog_base_url: String,
}

impl AnimalClient {
    pub fn new(http: HttpClient, cat_base_url: Option<String>, dog_base_url: Option<String>) -> Self {
        Self {
            http,
            cat_base_url: cat_base_url.unwrap_or_else(|| DEFAULT_CAT_BASE_URL.to_string()),
            dog_base_url: dog_base_url.unwrap_or_else(|| DEFAULT_DOG_BASE_URL.to_string()),
        }
    }

    async fn random_cat(&self) -> Result<AnimalImage, FetchError> {
        let images: Vec<CatImage> = self
            .http
            .get_json(&format!("{}/v1/images/search", self.cat_base_url), &[])
            .await?;
        let first = images
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::Shape("cat search returned no images".to_string()))?;
        Ok(AnimalImage {
            id: first.id,
            url: first.url,
            species: Species::Cat,
        })
    }

    /// dog.ceo has no image ids; the URL identifies the image.
    async fn random_dog(&self) -> Result<AnimalImage, FetchError> {
        let image: DogImage = self
            .http
            .get_json(&format!("{}/api/breeds/image/random", self.dog_base_url), &[])
            .await?;
        if image.status != "success" {
            return Err(FetchError::Shape(format!(
                "dog image status was {:?}",
                image.status
            )));
        }
        Ok(AnimalImage {
            id: image.message.clone(),
            url: image.message,
            species: Species::Dog,
        })
    }
}

#[async_trait]
impl ResourceSource<Species, AnimalImage> for AnimalClient {
    async fn fetch_one(&self, species: &Species) -> Result<AnimalImage, FetchError> {
        debug!("Fetching random {} image", species);
        match species {
            Species::Cat => self.random_cat().await,
            Species::Dog => self.random_dog().await,
        }
    }
}
