use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PizzaSize {
    Medium,
    Large,
    Family,
}

impl PizzaSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaSize::Medium => "MEDIUM",
            PizzaSize::Large => "LARGE",
            PizzaSize::Family => "FAMILY",
        }
    }

    /// Label used by the admin tables (pt-BR, like the dashboard shows it).
    pub fn label(&self) -> &'static str {
        match self {
            PizzaSize::Medium => "Média",
            PizzaSize::Large => "Grande",
            PizzaSize::Family => "Família",
        }
    }
}

impl std::str::FromStr for PizzaSize {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "MEDIUM" => Ok(PizzaSize::Medium),
            "LARGE" => Ok(PizzaSize::Large),
            "FAMILY" => Ok(PizzaSize::Family),
            other => Err(format!("unknown pizza size: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PizzaKind {
    Salty,
    Sweet,
}

impl PizzaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaKind::Salty => "SALTY",
            PizzaKind::Sweet => "SWEET",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PizzaKind::Salty => "Salgada",
            PizzaKind::Sweet => "Doce",
        }
    }
}

impl std::str::FromStr for PizzaKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "SALTY" => Ok(PizzaKind::Salty),
            "SWEET" => Ok(PizzaKind::Sweet),
            other => Err(format!("unknown pizza type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrinkKind {
    Soda,
    Juice,
    Alcoholic,
    Water,
}

impl DrinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrinkKind::Soda => "SODA",
            DrinkKind::Juice => "JUICE",
            DrinkKind::Alcoholic => "ALCOHOLIC",
            DrinkKind::Water => "WATER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrinkKind::Soda => "Refrigerante",
            DrinkKind::Juice => "Suco",
            DrinkKind::Alcoholic => "Alcoólica",
            DrinkKind::Water => "Água",
        }
    }
}

impl std::str::FromStr for DrinkKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "SODA" => Ok(DrinkKind::Soda),
            "JUICE" => Ok(DrinkKind::Juice),
            "ALCOHOLIC" => Ok(DrinkKind::Alcoholic),
            "WATER" => Ok(DrinkKind::Water),
            other => Err(format!("unknown drink type: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    #[serde(rename = "pizzaId")]
    pub id: Uuid,
    pub active: bool,
    pub name: String,
    pub description: String,
    /// Minor currency units (cents), never a float.
    pub price: i64,
    pub image: String,
    pub size: PizzaSize,
    #[serde(rename = "type")]
    pub kind: PizzaKind,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PizzaDetails {
    #[serde(rename = "pizzaId")]
    pub id: Uuid,
    pub active: bool,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: String,
    pub size: PizzaSize,
    #[serde(rename = "type")]
    pub kind: PizzaKind,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    #[serde(rename = "drinkId")]
    pub id: Uuid,
    pub active: bool,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: String,
    /// Milliliters.
    pub volume: i32,
    #[serde(rename = "type")]
    pub kind: DrinkKind,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkDetails {
    #[serde(rename = "drinkId")]
    pub id: Uuid,
    pub active: bool,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: String,
    pub volume: i32,
    #[serde(rename = "type")]
    pub kind: DrinkKind,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// 0-based page index, as the API counts pages.
    pub page_index: i64,
    pub total_count: i64,
    pub per_page: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaListPage {
    pub pizzas: Vec<Pizza>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkListPage {
    pub drinks: Vec<Drink>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReceipt {
    pub date: NaiveDate,
    pub receipt: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthReceipt {
    pub receipt: i64,
    pub diff_from_last_month: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularProduct {
    pub product: String,
    pub amount: i64,
}
