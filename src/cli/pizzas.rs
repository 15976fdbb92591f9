use std::path::PathBuf;

use clap::{Args, Subcommand};
use tabled::{Table, Tabled};
use uuid::Uuid;

use crate::cli::{read_image, status_label};
use crate::filters::{FilterUpdate, ProductFilters, StatusFilter};
use crate::forms::{PizzaForm, StatusChoice};
use crate::models::{Pizza, PizzaKind, PizzaSize};
use crate::money::format_price;
use crate::services::pizza_service;
use crate::state::AppState;

#[derive(Debug, Args)]
pub(crate) struct PizzasCommand {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List pizzas, with the same filters the table header offers
    List(ListArgs),
    /// Show one pizza's details
    Details {
        id: Uuid,
    },
    /// Register a new pizza
    Register(PizzaFormArgs),
    /// Edit an existing pizza
    Edit {
        id: Uuid,
        #[command(flatten)]
        form: PizzaFormArgs,
    },
    /// Activate a pizza
    Activate {
        id: Uuid,
    },
    /// Disable a pizza
    Disable {
        id: Uuid,
    },
    /// Remove a pizza
    Remove {
        id: Uuid,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Filter by pizza id
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
struct PizzaFormArgs {
    #[arg(long)]
    name: String,

    /// Defaults to the name, lowercased with hyphens
    #[arg(long, default_value = "")]
    slug: String,

    #[arg(long)]
    description: String,

    /// Decimal reais, e.g. "12.50"
    #[arg(long)]
    price: String,

    /// MEDIUM, LARGE or FAMILY
    #[arg(long)]
    size: PizzaSize,

    /// SALTY or SWEET
    #[arg(long = "type")]
    kind: PizzaKind,

    /// Register as disabled instead of activated
    #[arg(long)]
    disabled: bool,

    /// Path to a jpg/jpeg/png/webp image, at most 25 MB
    #[arg(long)]
    image: Option<PathBuf>,
}

impl PizzaFormArgs {
    fn into_form(self) -> anyhow::Result<PizzaForm> {
        let image = self.image.as_deref().map(read_image).transpose()?;
        Ok(PizzaForm {
            name: self.name,
            slug: self.slug,
            description: self.description,
            price: self.price,
            size: self.size,
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
struct PizzaRow {
    #[tabled(rename = "Identificador")]
    id: Uuid,
    #[tabled(rename = "Nome")]
    name: String,
    #[tabled(rename = "Descrição")]
    description: String,
    #[tabled(rename = "Tamanho")]
    size: &'static str,
    #[tabled(rename = "Tipo")]
    kind: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Preço")]
    price: String,
}

impl From<&Pizza> for PizzaRow {
    fn from(pizza: &Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name.clone(),
            description: pizza.description.clone(),
            size: pizza.size.label(),
            kind: pizza.kind.label(),
            status: status_label(pizza.active),
            price: format_price(pizza.price),
        }
    }
}

pub(crate) async fn run(command: PizzasCommand, state: &mut AppState) -> anyhow::Result<()> {
    match command.command {
        Commands::List(args) => list(args, state).await,
        Commands::Details { id } => details(id, state).await,
        Commands::Register(args) => {
            let pizza = pizza_service::register_pizza(state, args.into_form()?).await?;
            println!("Pizza cadastrada com sucesso! ({})", pizza.id);
            Ok(())
        }
        Commands::Edit { id, form } => {
            pizza_service::edit_pizza(state, id, form.into_form()?).await?;
            println!("Pizza atualizada com sucesso!");
            Ok(())
        }
        Commands::Activate { id } => {
            pizza_service::set_pizza_active(state, id, true).await?;
            println!("Status da pizza alterado com sucesso!");
            Ok(())
        }
        Commands::Disable { id } => {
            pizza_service::set_pizza_active(state, id, false).await?;
            println!("Status da pizza alterado com sucesso!");
            Ok(())
        }
        Commands::Remove { id } => {
            pizza_service::remove_pizza(state, id).await?;
            println!("Pizza removida com sucesso!");
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

    let page = pizza_service::list_pizzas(state, &filters).await?;

    if page.pizzas.is_empty() {
        println!("Nenhum resultado encontrado.");
        return Ok(());
    }

    let rows: Vec<PizzaRow> = page.pizzas.iter().map(PizzaRow::from).collect();
    println!("{}", Table::new(rows));

    let total_pages = if page.meta.per_page > 0 {
        (page.meta.total_count + page.meta.per_page - 1) / page.meta.per_page
    } else {
        1
    };
    println!(
        "Página {} de {} ({} pizzas no total)",
        page.meta.page_index + 1,
        total_pages.max(1),
        page.meta.total_count
    );

    Ok(())
}

async fn details(id: Uuid, state: &mut AppState) -> anyhow::Result<()> {
    let pizza = pizza_service::get_pizza_details(state, id).await?;

    println!("Pizza: {}", pizza.id);
    println!("Nome: {}", pizza.name);
    println!("Slug: {}", pizza.slug);
    println!("Descrição: {}", pizza.description);
    println!("Tamanho: {}", pizza.size.label());
    println!("Tipo: {}", pizza.kind.label());
    println!("Status: {}", status_label(pizza.active));
    println!("Preço: {}", format_price(pizza.price));
    if pizza.image.is_empty() {
        println!("Imagem: Imagem não encontrada");
    } else {
        println!("Imagem: {}", pizza.image);
    }
    println!("Criada em: {}", pizza.created_at);
    println!("Atualizada em: {}", pizza.updated_at);

    Ok(())
}
