//! One function per REST endpoint, grouped by resource.

use serde::Serialize;
use uuid::Uuid;

pub mod drinks;
pub mod metrics;
pub mod pizzas;

/// Query parameters of the paginated product listings. `pageIndex` is
/// 0-based on the wire; inactive filters are omitted entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub page_index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_filters_are_omitted_from_the_query() {
        let query = ListQuery {
            page_index: 0,
            id: None,
            active: None,
            name: None,
            description: None,
        };
        let encoded = serde_json::to_value(&query).unwrap();
        let object = encoded.as_object().unwrap();

        assert_eq!(object.len(), 1);
        assert_eq!(object["pageIndex"], 0);
    }

    #[test]
    fn active_filter_serializes_as_bool() {
        let query = ListQuery {
            page_index: 2,
            id: None,
            active: Some(false),
            name: Some("coca".to_string()),
            description: None,
        };
        let encoded = serde_json::to_value(&query).unwrap();

        assert_eq!(encoded["active"], false);
        assert_eq!(encoded["name"], "coca");
        assert_eq!(encoded["pageIndex"], 2);
    }
}
