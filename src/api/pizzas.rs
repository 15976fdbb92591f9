use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::ListQuery;
use crate::client::ApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::ImageUpload;
use crate::models::{PizzaDetails, PizzaKind, PizzaListPage, PizzaSize};

/// Everything a pizza create or edit call sends. Both calls use the same
/// multipart contract; a payload without an image simply omits the part.
#[derive(Debug, Clone)]
pub struct PizzaPayload {
    pub name: String,
    pub description: String,
    /// Cents.
    pub price: i64,
    pub size: PizzaSize,
    pub kind: PizzaKind,
    pub slug: String,
    pub active: bool,
    pub image: Option<ImageUpload>,
}

impl PizzaPayload {
    fn into_form(self) -> AppResult<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("description", self.description)
            .text("price", self.price.to_string())
            .text("size", self.size.as_str())
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
pub struct RegisteredPizza {
    #[serde(rename = "pizzaId")]
    pub id: Uuid,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PizzaDetailsResponse {
    pizzas: Vec<PizzaDetails>,
}

impl ApiClient {
    /// `GET /products/pizzas` with pagination and filters.
    pub async fn get_pizzas(&self, query: &ListQuery) -> AppResult<PizzaListPage> {
        let response = self
            .http
            .get(self.url("/products/pizzas"))
            .query(query)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /products/pizzas?id=` — the API answers detail lookups through
    /// the listing endpoint; an empty result is a not-found.
    pub async fn get_pizza_details(&self, id: Uuid) -> AppResult<PizzaDetails> {
        let response = self
            .http
            .get(self.url("/products/pizzas"))
            .query(&[("id", id)])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        let parsed: PizzaDetailsResponse = response.json().await?;
        parsed.pizzas.into_iter().next().ok_or(AppError::NotFound)
    }

    /// `POST /products/pizzas`, multipart. The server assigns the id.
    pub async fn register_pizza(&self, payload: PizzaPayload) -> AppResult<RegisteredPizza> {
        let response = self
            .http
            .post(self.url("/products/pizzas"))
            .multipart(payload.into_form()?)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `PATCH /products/pizza/{id}`, multipart.
    pub async fn edit_pizza(&self, id: Uuid, payload: PizzaPayload) -> AppResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("/products/pizza/{id}")))
            .multipart(payload.into_form()?)
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `PATCH /products/pizzas/{id}/active`.
    pub async fn activate_pizza(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("/products/pizzas/{id}/active")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `PATCH /products/pizzas/{id}/disable`.
    pub async fn disable_pizza(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .http
            .patch(self.url(&format!("/products/pizzas/{id}/disable")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `DELETE /products/pizzas/{id}`.
    pub async fn remove_pizza(&self, id: Uuid) -> AppResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/products/pizzas/{id}")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
