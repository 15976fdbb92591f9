//! Drink listing and mutations, mirroring the pizza flows.

use uuid::Uuid;

use crate::cache;
use crate::error::AppResult;
use crate::filters::ProductFilters;
use crate::forms::DrinkForm;
use crate::models::{Drink, DrinkDetails, DrinkListPage};
use crate::state::AppState;

pub async fn list_drinks(
    state: &mut AppState,
    filters: &ProductFilters,
) -> AppResult<DrinkListPage> {
    let key = filters.list_key();
    if let Some(cached) = state.cache.get_drinks(&key) {
        tracing::debug!(page = filters.page, "drink listing served from cache");
        return Ok(cached.clone());
    }

    let page = state.client.get_drinks(&filters.to_query()).await?;
    state.cache.insert_drinks(key, page.clone());
    Ok(page)
}

pub async fn get_drink_details(state: &mut AppState, id: Uuid) -> AppResult<DrinkDetails> {
    if let Some(cached) = state.cache.get_drink_details(id) {
        return Ok(cached.clone());
    }

    let details = state.client.get_drink_details(id).await?;
    state.cache.insert_drink_details(details.clone());
    Ok(details)
}

pub async fn register_drink(state: &mut AppState, form: DrinkForm) -> AppResult<Drink> {
    let payload = form.validate()?;

    let created = match state.client.register_drink(payload.clone()).await {
        Ok(created) => created,
        Err(err) => {
            tracing::error!(error = %err, "drink register failed");
            return Err(err);
        }
    };

    let drink = Drink {
        id: created.id,
        active: payload.active,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image: created.image.unwrap_or_default(),
        volume: payload.volume,
        kind: payload.kind,
        slug: payload.slug,
    };

    state.cache.patch_drinks(|drinks| cache::prepend(drinks, &drink));
    tracing::info!(drink_id = %drink.id, "drink registered");

    Ok(drink)
}

pub async fn edit_drink(state: &mut AppState, id: Uuid, form: DrinkForm) -> AppResult<()> {
    let payload = form.validate()?;

    if let Err(err) = state.client.edit_drink(id, payload.clone()).await {
        tracing::error!(drink_id = %id, error = %err, "drink edit failed");
        return Err(err);
    }

    state.cache.patch_drinks(|drinks| {
        cache::replace(drinks, id, |drink| {
            drink.name = payload.name.clone();
            drink.description = payload.description.clone();
            drink.price = payload.price;
            drink.volume = payload.volume;
            drink.kind = payload.kind;
            drink.slug = payload.slug.clone();
            drink.active = payload.active;
        });
    });
    tracing::info!(drink_id = %id, "drink edited");

    Ok(())
}

pub async fn set_drink_active(state: &mut AppState, id: Uuid, active: bool) -> AppResult<()> {
    let result = if active {
        state.client.activate_drink(id).await
    } else {
        state.client.disable_drink(id).await
    };

    if let Err(err) = result {
        tracing::error!(drink_id = %id, error = %err, "drink status toggle failed");
        return Err(err);
    }

    state
        .cache
        .patch_drinks(|drinks| cache::set_active(drinks, id, active));
    tracing::info!(drink_id = %id, active, "drink status changed");

    Ok(())
}

pub async fn remove_drink(state: &mut AppState, id: Uuid) -> AppResult<()> {
    if let Err(err) = state.client.remove_drink(id).await {
        tracing::error!(drink_id = %id, error = %err, "drink remove failed");
        return Err(err);
    }

    state.cache.patch_drinks(|drinks| cache::remove(drinks, id));
    tracing::info!(drink_id = %id, "drink removed");

    Ok(())
}
