use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::ListQuery;
use crate::client::ApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::ImageUpload;
use crate::models::{DrinkDetails, DrinkKind, DrinkListPage};

/// Multipart body shared by drink create and edit calls.
#[derive(Debug, Clone)]
pub struct DrinkPayload {
    pub name: String,
    pub description: String,
    /// Cents.
    pub price: i64,
    /// Milliliters.
    pub volume: i32,
    pub kind: DrinkKind,
    pub slug: String,
    pub active: bool,
    pub image: Option<ImageUpload>,
}

impl DrinkPayload {
    fn into_form(self) -> AppResult<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("price", self.price.to_string())
            .text("volume", self.volume.to_string())
            .text("type", self.kind.as_str())
            .text("slug", self.slug)
            .text("active", self.active.to_string());

        if let Some(image) = self.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisteredDrink {
    #[serde(rename = "drinkId")]
    pub id: Uuid,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DrinkDetailsResponse {
    drinks: Vec<DrinkDetails>,
}

impl ApiClient {
    /// `GET /products/drinks` with pagination and filters.
    pub async fn get_drinks(&self, query: &ListQuery) -> AppResult<DrinkListPage> {
        let response = self
            .http
            .get(self.url("/products/drinks"))
            .query(query)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /products/drinks?id=` — empty result is a not-found.
    pub async fn get_drink_details(&self, id: Uuid) -> AppResult<DrinkDetails> {
        let response = self
            .http
            .get(self.url("/products/drinks"))
            .query(&[("id", id)])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let parsed: DrinkDetailsResponse = response.json().await?;
        parsed.drinks.into_iter().next().ok_or(AppError::NotFound)
    }

    /// `POST /products/drinks`, multipart. The server assigns the id.
    pub async fn register_drink(&self, payload: DrinkPayload) -> AppResult<RegisteredDrink> {
        let response = self
            .http
            .post(self.url("/products/drinks"))
            .multipart(payload.into_form()?)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `PATCH /products/drink/{id}`, multipart.
    pub async fn edit_drink(&self, id: Uuid, payload: DrinkPayload) -> AppResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("/products/drink/{id}")))
            .multipart(payload.into_form()?)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `PATCH /products/drinks/{id}/active`.
    pub async fn activate_drink(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("/products/drinks/{id}/active")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `PATCH /products/drinks/{id}/disable`.
    pub async fn disable_drink(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("/products/drinks/{id}/disable")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `DELETE /products/drinks/{id}`.
    pub async fn remove_drink(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/products/drinks/{id}")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
