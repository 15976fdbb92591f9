//! Dashboard metrics. These are read-only and bypass the list cache.

use crate::api::metrics::ReceiptPeriod;
use crate::error::AppResult;
use crate::models::{DailyReceipt, MonthReceipt, PopularProduct};
use crate::state::AppState;

pub async fn daily_receipt_in_period(
    state: &AppState,
    period: ReceiptPeriod,
) -> AppResult<Vec<DailyReceipt>> {
    state.client.get_daily_receipt_in_period(period).await
}

pub async fn month_receipt(state: &AppState) -> AppResult<MonthReceipt> {
    state.client.get_month_receipt().await
}

pub async fn popular_products(state: &AppState) -> AppResult<Vec<PopularProduct>> {
    state.client.get_popular_products().await
}
