//! Pizza listing and mutations, with the optimistic cache patches the
//! dashboard applies after each successful call.

use uuid::Uuid;

use crate::cache;
use crate::error::AppResult;
use crate::filters::ProductFilters;
use crate::forms::PizzaForm;
use crate::models::{Pizza, PizzaDetails, PizzaListPage};
use crate::state::AppState;

/// Resolve the listing for the given filters, serving a previously fetched
/// page when one is cached under the same query identity.
pub async fn list_pizzas(
    state: &mut AppState,
    filters: &ProductFilters,
) -> AppResult<PizzaListPage> {
    let key = filters.list_key();
    if let Some(cached) = state.cache.get_pizzas(&key) {
        tracing::debug!(page = filters.page, "pizza listing served from cache");
        return Ok(cached.clone());
    }

    let page = state.client.get_pizzas(&filters.to_query()).await?;
    state.cache.insert_pizzas(key, page.clone());
    Ok(page)
}

/// Detail lookup, cached per id within the staleness window.
pub async fn get_pizza_details(state: &mut AppState, id: Uuid) -> AppResult<PizzaDetails> {
    if let Some(cached) = state.cache.get_pizza_details(id) {
        return Ok(cached.clone());
    }

    let details = state.client.get_pizza_details(id).await?;
    state.cache.insert_pizza_details(details.clone());
    Ok(details)
}

/// Validate the form, create the pizza, then prepend it to every cached
/// listing page. A failed call leaves the cache untouched.
pub async fn register_pizza(state: &mut AppState, form: PizzaForm) -> AppResult<Pizza> {
    let payload = form.validate()?;

    let created = match state.client.register_pizza(payload.clone()).await {
        Ok(created) => created,
        Err(err) => {
            tracing::error!(error = %err, "pizza register failed");
            return Err(err);
        }
    };

    let pizza = Pizza {
        id: created.id,
        active: payload.active,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image: created.image.unwrap_or_default(),
        size: payload.size,
        kind: payload.kind,
        slug: payload.slug,
    };

    state.cache.patch_pizzas(|pizzas| cache::prepend(pizzas, &pizza));
    tracing::info!(pizza_id = %pizza.id, "pizza registered");

    Ok(pizza)
}

/// Validate the form, send the edit, then rewrite the matching entry in
/// place in every cached page. The stored image URL is kept as-is; the
/// server does not echo the new one back.
pub async fn edit_pizza(state: &mut AppState, id: Uuid, form: PizzaForm) -> AppResult<()> {
    let payload = form.validate()?;

    if let Err(err) = state.client.edit_pizza(id, payload.clone()).await {
        tracing::error!(pizza_id = %id, error = %err, "pizza edit failed");
        return Err(err);
    }

    state.cache.patch_pizzas(|pizzas| {
        cache::replace(pizzas, id, |pizza| {
            pizza.name = payload.name.clone();
            pizza.description = payload.description.clone();
            pizza.price = payload.price;
            pizza.size = payload.size;
            pizza.kind = payload.kind;
            pizza.slug = payload.slug.clone();
            pizza.active = payload.active;
        });
    });
    tracing::info!(pizza_id = %id, "pizza edited");

    Ok(())
}

/// Toggle the active flag, then flip only that field on the matching entry.
pub async fn set_pizza_active(state: &mut AppState, id: Uuid, active: bool) -> AppResult<()> {
    let result = if active {
        state.client.activate_pizza(id).await
    } else {
        state.client.disable_pizza(id).await
    };

    if let Err(err) = result {
        tracing::error!(pizza_id = %id, error = %err, "pizza status toggle failed");
        return Err(err);
    }

    state
        .cache
        .patch_pizzas(|pizzas| cache::set_active(pizzas, id, active));
    tracing::info!(pizza_id = %id, active, "pizza status changed");

    Ok(())
}

/// Delete the pizza and drop it from every cached page.
pub async fn remove_pizza(state: &mut AppState, id: Uuid) -> AppResult<()> {
    if let Err(err) = state.client.remove_pizza(id).await {
        tracing::error!(pizza_id = %id, error = %err, "pizza remove failed");
        return Err(err);
    }

    state.cache.patch_pizzas(|pizzas| cache::remove(pizzas, id));
    tracing::info!(pizza_id = %id, "pizza removed");

    Ok(())
}
