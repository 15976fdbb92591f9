use uuid::Uuid;

use crate::api::ListQuery;
use crate::cache::ListKey;

/// Tri-state active filter: `All` means no filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    Activated,
    Disabled,
    #[default]
    All,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::Activated => "activated",
            StatusFilter::Disabled => "disabled",
            StatusFilter::All => "all",
        }
    }

    /// Value sent to the API; `All` sends nothing.
    pub fn as_param(&self) -> Option<bool> {
        match self {
            StatusFilter::Activated => Some(true),
            StatusFilter::Disabled => Some(false),
            StatusFilter::All => None,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "activated" => StatusFilter::Activated,
            "disabled" => StatusFilter::Disabled,
            _ => StatusFilter::All,
        }
    }
}

/// One filter submission from the table header form.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub id: Option<Uuid>,
    pub status: StatusFilter,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Filter state for a product listing, normally carried in the URL query
/// string. Page is 1-based here; the API counts pages from 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilters {
    pub id: Option<Uuid>,
    pub status: StatusFilter,
    pub name: Option<String>,
    pub description: Option<String>,
    pub page: i64,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            id: None,
            status: StatusFilter::All,
            name: None,
            description: None,
            page: 1,
        }
    }
}

impl ProductFilters {
    /// Apply a new filter submission. Any filter change sends the user back
    /// to the first page.
    pub fn filter(&mut self, update: FilterUpdate) {
        self.id = update.id;
        self.status = update.status;
        self.name = update.name.filter(|n| !n.is_empty());
        self.description = update.description.filter(|d| !d.is_empty());
        self.page = 1;
    }

    /// Reset every filter field and go back to page 1.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn paginate(&mut self, page: i64) {
        self.page = page.max(1);
    }

    pub fn page_index(&self) -> i64 {
        self.page - 1
    }

    pub fn has_any(&self) -> bool {
        self.id.is_some()
            || self.name.is_some()
            || self.description.is_some()
            || self.status != StatusFilter::All
    }

    /// Serialize into URL-style query pairs. Empty filters are absent, the
    /// `all` status is absent, and `page` is always present.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.id {
            pairs.push(("id", id.to_string()));
        }
        if self.status != StatusFilter::All {
            pairs.push(("active", self.status.as_str().to_string()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(description) = &self.description {
            pairs.push(("description", description.clone()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs
    }

    /// Rebuild filter state from URL-style query pairs. Unknown keys are
    /// ignored; a malformed id or page falls back to the default.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filters = Self::default();
        for (key, value) in pairs {
            match key {
                "id" => filters.id = value.parse().ok(),
                "active" => filters.status = StatusFilter::parse(value),
                "name" if !value.is_empty() => filters.name = Some(value.to_string()),
                "description" if !value.is_empty() => {
                    filters.description = Some(value.to_string());
                }
                "page" => filters.page = value.parse().unwrap_or(1).max(1),
                _ => {}
            }
        }
        filters
    }

    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            page_index: self.page_index(),
            id: self.id,
            active: self.status.as_param(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Identity of the cached list page these filters resolve to.
    pub fn list_key(&self) -> ListKey {
        ListKey {
            page_index: self.page_index(),
            id: self.id,
            active: self.status.as_param(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}
