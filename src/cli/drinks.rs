use std::path::PathBuf;

use clap::{Args, Subcommand};
use tabled::{Table, Tabled};
use uuid::Uuid;

use crate::cli::{read_image, status_label};
use crate::filters::{FilterUpdate, ProductFilters, StatusFilter};
use crate::forms::{DrinkForm, StatusChoice};
use crate::models::{Drink, DrinkKind};
use crate::money::format_price;
use crate::services::drink_service;
use crate::state::AppState;

#[derive(Debug, Args)]
pub(crate) struct DrinksCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List drinks, with the same filters the table header offers
    List(ListArgs),
    /// Show one drink's details
    Details {
        id: Uuid,
    },
    /// Register a new drink
    Register(DrinkFormArgs),
    /// Edit an existing drink
    Edit {
        id: Uuid,
        #[command(flatten)]
        form: DrinkFormArgs,
    },
    /// Activate a drink
    Activate {
        id: Uuid,
    },
    /// Disable a drink
    Disable {
        id: Uuid,
    },
    /// Remove a drink
    Remove {
        id: Uuid,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Filter by drink id
    #[arg(long)]
    id: Option<Uuid>,

    /// activated, disabled or all
    #[arg(long, default_value = "all")]
    active: String,

    /// Name substring filter
    #[arg(long)]
    name: Option<String>,

    /// Description substring filter
    #[arg(long)]
    description: Option<String>,

    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    page: i64,
}

#[derive(Debug, Args)]
struct DrinkFormArgs {
    #[arg(long)]
    name: String,

    /// Defaults to the name, lowercased with hyphens
    #[arg(long, default_value = "")]
    slug: String,

    #[arg(long)]
    description: String,

    /// Decimal reais, e.g. "8.90"
    #[arg(long)]
    price: String,

    /// Milliliters
    #[arg(long)]
    volume: String,

    /// SODA, JUICE, ALCOHOLIC or WATER
    #[arg(long = "type")]
    kind: DrinkKind,

    /// Register as disabled instead of activated
    #[arg(long)]
    disabled: bool,

    /// Path to a jpg/jpeg/png/webp image, at most 25 MB
    #[arg(long)]
    image: Option<PathBuf>,
}

impl DrinkFormArgs {
    fn into_form(self) -> anyhow::Result<DrinkForm> {
        let image = self.image.as_deref().map(read_image).transpose()?;
        Ok(DrinkForm {
            name: self.name,
            slug: self.slug,
            description: self.description,
            price: self.price,
            volume: self.volume,
            kind: self.kind,
            status: if self.disabled {
                StatusChoice::Disabled
            } else {
                StatusChoice::Activated
            },
            image,
        })
    }
}

#[derive(Debug, Tabled)]
struct DrinkRow {
    #[tabled(rename = "Identificador")]
    id: Uuid,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Descrição")]
    description: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Tipo")]
    kind: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Preço")]
    price: String,
}

impl From<&Drink> for DrinkRow {
    fn from(drink: &Drink) -> Self {
        Self {
            id: drink.id,
            name: drink.name.clone(),
            description: drink.description.clone(),
            volume: format!("{} ml", drink.volume),
            kind: drink.kind.label(),
            status: status_label(drink.active),
            price: format_price(drink.price),
        }
    }
}

pub(crate) async fn run(command: DrinksCommand, state: &mut AppState) -> anyhow::Result<()> {
    match command.command {
        Commands::List(args) => list(args, state).await,
        Commands::Details { id } => details(id, state).await,
        Commands::Register(args) => {
            let drink = drink_service::register_drink(state, args.into_form()?).await?;
            println!("Bebida cadastrada com sucesso! ({})", drink.id);
            Ok(())
        }
        Commands::Edit { id, form } => {
            drink_service::edit_drink(state, id, form.into_form()?).await?;
            println!("Bebida atualizada com sucesso!");
            Ok(())
        }
        Commands::Activate { id } => {
            drink_service::set_drink_active(state, id, true).await?;
            println!("Status da bebida alterado com sucesso!");
            Ok(())
        }
        Commands::Disable { id } => {
            drink_service::set_drink_active(state, id, false).await?;
            println!("Status da bebida alterado com sucesso!");
            Ok(())
        }
        Commands::Remove { id } => {
            drink_service::remove_drink(state, id).await?;
            println!("Bebida removida com sucesso!");
            Ok(())
        }
    }
}

async fn list(args: ListArgs, state: &mut AppState) -> anyhow::Result<()> {
    let mut filters = ProductFilters::default();
    filters.filter(FilterUpdate {
        id: args.id,
        status: StatusFilter::parse(&args.active),
        name: args.name,
        description: args.description,
    });
    filters.paginate(args.page);

    let page = drink_service::list_drinks(state, &filters).await?;

    if page.drinks.is_empty() {
        println!("Nenhum resultado encontrado.");
        return Ok(());
    }

    let rows: Vec<DrinkRow> = page.drinks.iter().map(DrinkRow::from).collect();
    println!("{}", Table::new(rows));

    let total_pages = if page.meta.per_page > 0 {
        (page.meta.total_count + page.meta.per_page - 1) / page.meta.per_page
    } else {
        1
    };
    println!(
        "Página {} de {} ({} bebidas no total)",
        page.meta.page_index + 1,
        total_pages.max(1),
        page.meta.total_count
    );

    Ok(())
}

async fn details(id: Uuid, state: &mut AppState) -> anyhow::Result<()> {
    let drink = drink_service::get_drink_details(state, id).await?;

    println!("Bebida: {}", drink.id);
    println!("Nome: {}", drink.name);
    println!("Slug: {}", drink.slug);
    println!("Descrição: {}", drink.description);
    println!("Volume: {} ml", drink.volume);
    println!("Tipo: {}", drink.kind.label());
    println!("Status: {}", status_label(drink.active));
    println!("Preço: {}", format_price(drink.price));
    if drink.image.is_empty() {
        println!("Imagem: Imagem não encontrada");
    } else {
        println!("Imagem: {}", drink.image);
    }
    println!("Criada em: {}", drink.created_at);
    println!("Atualizada em: {}", drink.updated_at);

    Ok(())
}
