//! Create/edit form schemas for the two product types.
//!
//! Validation runs before anything touches the network; the first failing
//! field blocks submission and carries the message the dialog renders
//! inline.

use thiserror::Error;

pub mod drink;
pub mod pizza;

pub use drink::DrinkForm;
pub use pizza::PizzaForm;

/// MIME types the image field accepts.
pub const ACCEPTED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// 25 MB upload ceiling.
pub const MAX_IMAGE_BYTES: usize = 25 * 1024 * 1024;

/// A field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FormError {
    pub field: &'static str,
    pub message: String,
}

impl FormError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Image picked in the form, already read into memory.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// The activated/disabled select in the create and edit dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusChoice {
    #[default]
    Activated,
    Disabled,
}

impl StatusChoice {
    pub fn as_bool(&self) -> bool {
        matches!(self, StatusChoice::Activated)
    }
}

/// Default slug derived from the product name: lowercase, spaces become
/// hyphens. Uniqueness is the server's problem.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

pub(crate) fn validate_image(image: Option<&ImageUpload>) -> Result<(), FormError> {
    let Some(image) = image else {
        return Ok(());
    };

    if !ACCEPTED_IMAGE_TYPES.contains(&image.content_type.as_str()) {
        return Err(FormError::new(
            "image",
            "Apenas formatos .jpg, .jpeg, .png e .webp são suportados.",
        ));
    }

    if image.bytes.len() > MAX_IMAGE_BYTES {
        return Err(FormError::new("image", "A imagem deve ter no máximo 25MB."));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_defaults_from_the_name() {
        assert_eq!(slugify("Pizza Muito Boa"), "pizza-muito-boa");
        assert_eq!(slugify("Calabresa"), "calabresa");
    }

    #[test]
    fn image_type_outside_the_allow_list_is_rejected() {
        let image = ImageUpload {
            file_name: "menu.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            bytes: vec![0; 16],
        };
        let err = validate_image(Some(&image)).unwrap_err();
        assert_eq!(err.field, "image");
    }

    #[test]
    fn oversized_image_is_rejected() {
        let image = ImageUpload {
            file_name: "pizza.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0; MAX_IMAGE_BYTES + 1],
        };
        let err = validate_image(Some(&image)).unwrap_err();
        assert_eq!(err.field, "image");
        assert!(err.message.contains("25MB"));
    }

    #[test]
    fn missing_image_is_fine() {
        assert!(validate_image(None).is_ok());
    }
}
