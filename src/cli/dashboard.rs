use chrono::NaiveDate;
use clap::Args;
use tabled::{Table, Tabled};

use crate::api::metrics::ReceiptPeriod;
use crate::money::format_price;
use crate::services::metrics_service;
use crate::state::AppState;

#[derive(Debug, Args)]
pub(crate) struct DashboardArgs {
    /// Start of the daily receipt period (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the daily receipt period (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Debug, Tabled)]
struct DailyReceiptRow {
    #[tabled(rename = "Data")]
    date: NaiveDate,
    #[tabled(rename = "Receita")]
    receipt: String,
}

#[derive(Debug, Tabled)]
struct PopularProductRow {
    #[tabled(rename = "Produto")]
    product: String,
    #[tabled(rename = "Pedidos")]
    amount: i64,
}

pub(crate) async fn run(args: DashboardArgs, state: &mut AppState) -> anyhow::Result<()> {
    let month = metrics_service::month_receipt(state).await?;
    println!("Receita do mês: {}", format_price(month.receipt));
    println!(
        "Em relação ao mês anterior: {:+.2}%",
        month.diff_from_last_month
    );
    println!();

    let daily = metrics_service::daily_receipt_in_period(
        state,
        ReceiptPeriod {
            from: args.from,
            to: args.to,
        },
    )
    .await?;
    if daily.is_empty() {
        println!("Sem receita no período.");
    } else {
        let rows: Vec<DailyReceiptRow> = daily
            .into_iter()
            .map(|day| DailyReceiptRow {
                date: day.date,
                receipt: format_price(day.receipt),
            })
            .collect();
        println!("{}", Table::new(rows));
    }
    println!();

    let popular = metrics_service::popular_products(state).await?;
    if popular.is_empty() {
        println!("Sem produtos populares.");
    } else {
        let rows: Vec<PopularProductRow> = popular
            .into_iter()
            .map(|product| PopularProductRow {
                product: product.product,
                amount: product.amount,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    Ok(())
}
