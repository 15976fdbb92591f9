//! Terminal front for the admin operations: the subcommands play the role
//! of the dashboard pages, one session per invocation.

use clap::{Parser, Subcommand};

use crate::state::AppState;

mod dashboard;
mod drinks;
mod pizzas;

#[derive(Debug, Parser)]
#[command(name = "pizzashop-admin", about = "Pizza shop admin dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage pizzas
    Pizzas(pizzas::PizzasCommand),
    /// Manage drinks
    Drinks(drinks::DrinksCommand),
    /// Revenue and popularity metrics
    Dashboard(dashboard::DashboardArgs),
}

impl Cli {
    pub async fn run(self, state: &mut AppState) -> anyhow::Result<()> {
        match self.command {
            Commands::Pizzas(command) => pizzas::run(command, state).await,
            Commands::Drinks(command) => drinks::run(command, state).await,
            Commands::Dashboard(args) => dashboard::run(args, state).await,
        }
    }
}

/// "Ativa" / "Inativa", as the status column shows it.
pub(crate) fn status_label(active: bool) -> &'static str {
    if active { "Ativa" } else { "Inativa" }
}

/// Read an image from disk into the form's upload representation, deriving
/// the MIME type from the file extension.
pub(crate) fn read_image(path: &std::path::Path) -> anyhow::Result<crate::forms::ImageUpload> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content_type = match path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .as_deref()
    {
        Some("jpg") => "image/jpg",
        Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
    .to_string();

    Ok(crate::forms::ImageUpload {
        file_name,
        content_type,
        bytes,
    })
}
