//! In-memory query cache for product listings.
//!
//! After a successful mutation the pages are not refetched: every cached
//! list page in the owning namespace is rewritten in place through the
//! reducers below. The cache is never the source of truth; dropping it and
//! refetching always yields server state.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::models::{Drink, DrinkDetails, DrinkListPage, Pizza, PizzaDetails, PizzaListPage};

/// Detail lookups are served from cache for 15 minutes before refetching.
const DETAIL_STALE_AFTER: Duration = Duration::from_secs(15 * 60);

/// Identity of one cached list page: the full filter snapshot plus the
/// 0-based page index. Distinct filter combinations cache independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListKey {
    pub page_index: i64,
    pub id: Option<Uuid>,
    pub active: Option<bool>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A row that can live in a cached list page.
pub trait ListEntry {
    fn id(&self) -> Uuid;
    fn set_active(&mut self, active: bool);
}

impl ListEntry for Pizza {
    fn id(&self) -> Uuid {
        self.id
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl ListEntry for Drink {
    fn id(&self) -> Uuid {
        self.id
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Prepend a freshly created entry. Head-insertion, regardless of the
/// server-side sort order, matching what the dashboard always did.
pub fn prepend<T: Clone>(list: &mut Vec<T>, entry: &T) {
    list.insert(0, entry.clone());
}

/// Rewrite the entry with the given id in place, preserving its position.
pub fn replace<T: ListEntry>(list: &mut [T], id: Uuid, mut rewrite: impl FnMut(&mut T)) {
    for existing in list.iter_mut() {
        if existing.id() == id {
            rewrite(existing);
        }
    }
}

/// Flip only the `active` field of the matching entry.
pub fn set_active<T: ListEntry>(list: &mut [T], id: Uuid, active: bool) {
    for existing in list.iter_mut() {
        if existing.id() == id {
            existing.set_active(active);
        }
    }
}

/// Drop the entry with the given id.
pub fn remove<T: ListEntry>(list: &mut Vec<T>, id: Uuid) {
    list.retain(|existing| existing.id() != id);
}

#[derive(Debug)]
struct DetailSlot<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> DetailSlot<T> {
    fn fresh(&self) -> bool {
        self.fetched_at.elapsed() < DETAIL_STALE_AFTER
    }
}

/// Explicitly-scoped query cache, owned by the application state rather than
/// a process-wide global.
#[derive(Debug, Default)]
pub struct QueryCache {
    pizzas: HashMap<ListKey, PizzaListPage>,
    drinks: HashMap<ListKey, DrinkListPage>,
    pizza_details: HashMap<Uuid, DetailSlot<PizzaDetails>>,
    drink_details: HashMap<Uuid, DetailSlot<DrinkDetails>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_pizzas(&self, key: &ListKey) -> Option<&PizzaListPage> {
        self.pizzas.get(key)
    }

    pub fn insert_pizzas(&mut self, key: ListKey, page: PizzaListPage) {
        self.pizzas.insert(key, page);
    }

    pub fn get_drinks(&self, key: &ListKey) -> Option<&DrinkListPage> {
        self.drinks.get(key)
    }

    pub fn insert_drinks(&mut self, key: ListKey, page: DrinkListPage) {
        self.drinks.insert(key, page);
    }

    /// Rewrite every cached pizza page with the given reducer.
    pub fn patch_pizzas(&mut self, mut patch: impl FnMut(&mut Vec<Pizza>)) {
        for page in self.pizzas.values_mut() {
            patch(&mut page.pizzas);
        }
    }

    /// Rewrite every cached drink page with the given reducer.
    pub fn patch_drinks(&mut self, mut patch: impl FnMut(&mut Vec<Drink>)) {
        for page in self.drinks.values_mut() {
            patch(&mut page.drinks);
        }
    }

    /// Cached detail entry, if present and within the staleness window.
    pub fn get_pizza_details(&self, id: Uuid) -> Option<&PizzaDetails> {
        self.pizza_details
            .get(&id)
            .filter(|slot| slot.fresh())
            .map(|slot| &slot.value)
    }

    pub fn insert_pizza_details(&mut self, details: PizzaDetails) {
        self.pizza_details.insert(
            details.id,
            DetailSlot {
                value: details,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn get_drink_details(&self, id: Uuid) -> Option<&DrinkDetails> {
        self.drink_details
            .get(&id)
            .filter(|slot| slot.fresh())
            .map(|slot| &slot.value)
    }

    pub fn insert_drink_details(&mut self, details: DrinkDetails) {
        self.drink_details.insert(
            details.id,
            DetailSlot {
                value: details,
                fetched_at: Instant::now(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageMeta, PizzaKind, PizzaSize};

    fn pizza(name: &str) -> Pizza {
        Pizza {
            id: Uuid::new_v4(),
            active: true,
            name: name.to_string(),
            description: format!("Pizza de {name}"),
            price: 4990,
            image: String::new(),
            size: PizzaSize::Large,
            kind: PizzaKind::Salty,
            slug: name.to_lowercase().replace(' ', "-"),
        }
    }

    fn key(page_index: i64) -> ListKey {
        ListKey {
            page_index,
            id: None,
            active: None,
            name: None,
            description: None,
        }
    }

    fn page(pizzas: Vec<Pizza>) -> PizzaListPage {
        let total = pizzas.len() as i64;
        PizzaListPage {
            pizzas,
            meta: PageMeta {
                page_index: 0,
                total_count: total,
                per_page: 10,
            },
        }
    }

    #[test]
    fn prepend_puts_the_new_entry_first() {
        let mut list = vec![pizza("Calabresa"), pizza("Marguerita")];
        let created = pizza("Quatro Queijos");

        prepend(&mut list, &created);

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, created.id);
    }

    #[test]
    fn replace_preserves_position() {
        let mut list = vec![pizza("Calabresa"), pizza("Marguerita"), pizza("Portuguesa")];
        let target = list[1].id;

        replace(&mut list, target, |p| {
            p.name = "Marguerita Especial".to_string();
            p.price = 5490;
        });

        assert_eq!(list.len(), 3);
        assert_eq!(list[1].name, "Marguerita Especial");
        assert_eq!(list[1].price, 5490);
        assert_eq!(list[0].name, "Calabresa");
    }

    #[test]
    fn set_active_flips_exactly_one_entry_and_nothing_else() {
        let mut list = vec![pizza("Calabresa"), pizza("Marguerita")];
        let target = list[0].clone();

        set_active(&mut list, target.id, false);

        assert!(!list[0].active);
        assert_eq!(list[0].name, target.name);
        assert_eq!(list[0].price, target.price);
        assert_eq!(list[0].slug, target.slug);
        assert!(list[1].active);
    }

    #[test]
    fn remove_drops_the_entry_from_every_cached_page() {
        let shared = pizza("Calabresa");
        let mut cache = QueryCache::new();
        cache.insert_pizzas(key(0), page(vec![shared.clone(), pizza("Marguerita")]));
        cache.insert_pizzas(key(1), page(vec![pizza("Portuguesa"), shared.clone()]));

        cache.patch_pizzas(|pizzas| remove(pizzas, shared.id));

        cache.patch_pizzas(|pizzas| {
            assert!(pizzas.iter().all(|p| p.id != shared.id));
        });
    }

    #[test]
    fn patch_reaches_every_key_in_the_namespace() {
        let mut cache = QueryCache::new();
        cache.insert_pizzas(key(0), page(vec![pizza("Calabresa")]));
        cache.insert_pizzas(key(1), page(vec![pizza("Marguerita")]));
        let created = pizza("Quatro Queijos");

        cache.patch_pizzas(|pizzas| prepend(pizzas, &created));

        assert_eq!(cache.get_pizzas(&key(0)).unwrap().pizzas[0].id, created.id);
        assert_eq!(cache.get_pizzas(&key(1)).unwrap().pizzas[0].id, created.id);
    }

    #[test]
    fn distinct_filter_snapshots_cache_independently() {
        let mut cache = QueryCache::new();
        let filtered = ListKey {
            name: Some("calabresa".to_string()),
            ..key(0)
        };
        cache.insert_pizzas(key(0), page(vec![pizza("Calabresa"), pizza("Marguerita")]));
        cache.insert_pizzas(filtered.clone(), page(vec![pizza("Calabresa")]));

        assert_eq!(cache.get_pizzas(&key(0)).unwrap().pizzas.len(), 2);
        assert_eq!(cache.get_pizzas(&filtered).unwrap().pizzas.len(), 1);
    }
}
