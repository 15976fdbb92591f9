use chrono::NaiveDate;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::AppResult;
use crate::models::{DailyReceipt, MonthReceipt, PopularProduct};

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ReceiptPeriod {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl ApiClient {
    /// `GET /metrics/daily-receipt-in-period`.
    pub async fn get_daily_receipt_in_period(
        &self,
        period: ReceiptPeriod,
    ) -> AppResult<Vec<DailyReceipt>> {
        let response = self
            .http
            .get(self.url("/metrics/daily-receipt-in-period"))
            .query(&period)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /metrics/month-receipt`.
    pub async fn get_month_receipt(&self) -> AppResult<MonthReceipt> {
        let response = self
            .http
            .get(self.url("/metrics/month-receipt"))
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// `GET /metrics/popular-products`.
    pub async fn get_popular_products(&self) -> AppResult<Vec<PopularProduct>> {
        let response = self
            .http
            .get(self.url("/metrics/popular-products"))
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
