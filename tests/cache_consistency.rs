//! The optimistic cache-patch contract, exercised end to end against the
//! in-memory store: every cached page of a namespace is rewritten after a
//! mutation, whatever filter combination produced it.

use pizzashop_admin::cache::{self, QueryCache};
use pizzashop_admin::filters::{FilterUpdate, ProductFilters, StatusFilter};
use pizzashop_admin::models::{
    Drink, DrinkKind, DrinkListPage, PageMeta, Pizza, PizzaKind, PizzaListPage, PizzaSize,
};
use uuid::Uuid;

fn pizza(name: &str, active: bool) -> Pizza {
    Pizza {
        id: Uuid::new_v4(),
        active,
        name: name.to_string(),
        description: format!("Pizza de {name} com borda recheada"),
        price: 4990,
        image: "https://cdn.example/pizza.png".to_string(),
        size: PizzaSize::Large,
        kind: PizzaKind::Salty,
        slug: name.to_lowercase().replace(' ', "-"),
    }
}

fn drink(name: &str) -> Drink {
    Drink {
        id: Uuid::new_v4(),
        active: true,
        name: name.to_string(),
        description: format!("{name} gelado"),
        price: 890,
        image: String::new(),
        volume: 350,
        kind: DrinkKind::Soda,
        slug: name.to_lowercase().replace(' ', "-"),
    }
}

fn meta(total: i64) -> PageMeta {
    PageMeta {
        page_index: 0,
        total_count: total,
        per_page: 10,
    }
}

/// Three cached pizza queries: unfiltered page 1, unfiltered page 2 and a
/// name-filtered page. All three share one entry.
fn seeded_cache(shared: &Pizza) -> (QueryCache, Vec<ProductFilters>) {
    let mut cache = QueryCache::new();

    let unfiltered = ProductFilters::default();
    let mut page_two = ProductFilters::default();
    page_two.paginate(2);
    let mut by_name = ProductFilters::default();
    by_name.filter(FilterUpdate {
        name: Some(shared.name.clone()),
        ..FilterUpdate::default()
    });

    cache.insert_pizzas(
        unfiltered.list_key(),
        PizzaListPage {
            pizzas: vec![shared.clone(), pizza("Marguerita", true)],
            meta: meta(12),
        },
    );
    cache.insert_pizzas(
        page_two.list_key(),
        PizzaListPage {
            pizzas: vec![pizza("Portuguesa", false), shared.clone()],
            meta: meta(12),
        },
    );
    cache.insert_pizzas(
        by_name.list_key(),
        PizzaListPage {
            pizzas: vec![shared.clone()],
            meta: meta(1),
        },
    );

    (cache, vec![unfiltered, page_two, by_name])
}

#[test]
fn create_prepends_to_every_cached_query() {
    let shared = pizza("Calabresa", true);
    let (mut cache, filters) = seeded_cache(&shared);

    let created = pizza("Quatro Queijos", true);
    cache.patch_pizzas(|pizzas| cache::prepend(pizzas, &created));

    for f in &filters {
        let page = cache.get_pizzas(&f.list_key()).unwrap();
        assert_eq!(page.pizzas[0].id, created.id);
    }
}

#[test]
fn toggle_flips_only_the_active_field_everywhere() {
    let shared = pizza("Calabresa", true);
    let (mut cache, filters) = seeded_cache(&shared);

    cache.patch_pizzas(|pizzas| cache::set_active(pizzas, shared.id, false));

    let mut seen = 0;
    for f in &filters {
        let page = cache.get_pizzas(&f.list_key()).unwrap();
        for entry in &page.pizzas {
            if entry.id == shared.id {
                seen += 1;
                assert!(!entry.active);
                assert_eq!(entry.name, shared.name);
                assert_eq!(entry.description, shared.description);
                assert_eq!(entry.price, shared.price);
                assert_eq!(entry.slug, shared.slug);
            } else if entry.name == "Marguerita" {
                assert!(entry.active, "other rows keep their status");
            } else if entry.name == "Portuguesa" {
                assert!(!entry.active, "other rows keep their status");
            }
        }
    }
    assert_eq!(seen, 3, "the shared entry lives in all three cached pages");
}

#[test]
fn delete_leaves_no_trace_of_the_id() {
    let shared = pizza("Calabresa", true);
    let (mut cache, filters) = seeded_cache(&shared);

    cache.patch_pizzas(|pizzas| cache::remove(pizzas, shared.id));

    for f in &filters {
        let page = cache.get_pizzas(&f.list_key()).unwrap();
        assert!(page.pizzas.iter().all(|entry| entry.id != shared.id));
    }
}

#[test]
fn edit_rewrites_in_place_without_reordering() {
    let shared = pizza("Calabresa", true);
    let (mut cache, filters) = seeded_cache(&shared);

    cache.patch_pizzas(|pizzas| {
        cache::replace(pizzas, shared.id, |entry| {
            entry.name = "Calabresa Especial".to_string();
            entry.price = 5590;
        });
    });

    // Page 2 held the shared entry in second position; it must stay there.
    let page = cache.get_pizzas(&filters[1].list_key()).unwrap();
    assert_eq!(page.pizzas[1].id, shared.id);
    assert_eq!(page.pizzas[1].name, "Calabresa Especial");
    assert_eq!(page.pizzas[1].price, 5590);
    assert_eq!(page.pizzas[0].name, "Portuguesa");
}

#[test]
fn pizza_patches_do_not_leak_into_the_drink_namespace() {
    let shared = pizza("Calabresa", true);
    let (mut cache, _) = seeded_cache(&shared);

    let coke = drink("Coca-Cola");
    cache.insert_drinks(
        ProductFilters::default().list_key(),
        DrinkListPage {
            drinks: vec![coke.clone()],
            meta: meta(1),
        },
    );

    cache.patch_pizzas(|pizzas| cache::remove(pizzas, coke.id));

    let drinks = cache
        .get_drinks(&ProductFilters::default().list_key())
        .unwrap();
    assert_eq!(drinks.drinks.len(), 1);
}

#[test]
fn distinct_status_filters_resolve_to_distinct_keys() {
    let mut activated = ProductFilters::default();
    activated.filter(FilterUpdate {
        status: StatusFilter::Activated,
        ..FilterUpdate::default()
    });
    let mut disabled = ProductFilters::default();
    disabled.filter(FilterUpdate {
        status: StatusFilter::Disabled,
        ..FilterUpdate::default()
    });

    assert_ne!(activated.list_key(), disabled.list_key());
    assert_ne!(activated.list_key(), ProductFilters::default().list_key());
}
