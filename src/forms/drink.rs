use crate::api::drinks::DrinkPayload;
use crate::forms::{FormError, ImageUpload, StatusChoice, slugify, validate_image};
use crate::models::DrinkKind;
use crate::money;

/// Raw state of the drink create/edit dialog.
#[derive(Debug, Clone)]
pub struct DrinkForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub price: String,
    /// Milliliters, as typed.
    pub volume: String,
    pub kind: DrinkKind,
    pub status: StatusChoice,
    pub image: Option<ImageUpload>,
}

impl Default for DrinkForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: String::new(),
            description: String::new(),
            price: String::new(),
            volume: String::new(),
            kind: DrinkKind::Soda,
            status: StatusChoice::Activated,
            image: None,
        }
    }
}

impl DrinkForm {
    /// Validate every field and coerce into the request payload. The first
    /// failing field wins.
    pub fn validate(self) -> Result<DrinkPayload, FormError> {
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

        let volume: i32 = match self.volume.trim().parse() {
            Ok(v) if v > 0 => v,
            _ => {
                return Err(FormError::new(
                    "volume",
                    "O volume deve ser um número positivo",
                ));
            }
        };

        validate_image(self.image.as_ref())?;

        let slug = if self.slug.is_empty() {
            slugify(&self.name)
        } else {
            self.slug
        };

        Ok(DrinkPayload {
            name: self.name,
            description: self.description,
            price,
            volume,
            kind: self.kind,
            slug,
            active: self.status.as_bool(),
            image: self.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> DrinkForm {
        DrinkForm {
            name: "Suco de Laranja".to_string(),
            description: "Laranja espremida na hora".to_string(),
            price: "8,90".to_string(),
            volume: "500".to_string(),
            kind: DrinkKind::Juice,
            ..DrinkForm::default()
        }
    }

    #[test]
    fn coerces_price_volume_and_slug() {
        let payload = filled_form().validate().unwrap();

        assert_eq!(payload.price, 890);
        assert_eq!(payload.volume, 500);
        assert_eq!(payload.slug, "suco-de-laranja");
    }

    #[test]
    fn zero_volume_is_rejected() {
        let mut form = filled_form();
        form.volume = "0".to_string();

        let err = form.validate().unwrap_err();
        assert_eq!(err.field, "volume");
    }

    #[test]
    fn fractional_volume_is_rejected() {
        let mut form = filled_form();
        form.volume = "330.5".to_string();

        assert!(form.validate().is_err());
    }
}
