use crate::api::pizzas::PizzaPayload;
use crate::forms::{FormError, ImageUpload, StatusChoice, slugify, validate_image};
use crate::models::{PizzaKind, PizzaSize};
use crate::money;

/// Raw state of the pizza create/edit dialog. Price is the text the admin
/// typed; coercion happens in [`PizzaForm::validate`].
#[derive(Debug, Clone)]
pub struct PizzaForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: String,
    pub size: PizzaSize,
    pub kind: PizzaKind,
    pub status: StatusChoice,
    pub image: Option<ImageUpload>,
}

impl Default for PizzaForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            price: String::new(),
            size: PizzaSize::Medium,
            kind: PizzaKind::Salty,
            status: StatusChoice::Activated,
            image: None,
        }
    }
}

impl PizzaForm {
    /// Validate every field and coerce into the request payload. The first
    /// failing field wins.
    pub fn validate(self) -> Result<PizzaPayload, FormError> {
        if self.name.trim().len() < 3 {
            return Err(FormError::new(
                "name",
                "O nome deve ter pelo menos 3 caracteres",
            ));
        }

        if self.description.trim().len() < 10 {
            return Err(FormError::new(
                "description",
                "A descrição deve ter pelo menos 10 caracteres",
            ));
        }

        let price = money::parse_price(&self.price).map_err(|_| {
            FormError::new("price", "O preço deve ser um número positivo")
        })?;

        validate_image(self.image.as_ref())?;

        let slug = if self.slug.is_empty() {
            slugify(&self.name)
        } else {
            self.slug
        };

        Ok(PizzaPayload {
            name: self.name,
            description: self.description,
            price,
            size: self.size,
            kind: self.kind,
            slug,
            active: self.status.as_bool(),
            image: self.image,
        })
    }
}
