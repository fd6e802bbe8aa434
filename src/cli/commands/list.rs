use crate::config::Config;
use crate::core::calculator::aggregate::aggregate_by_category;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::format_amount;
use crate::utils::table::{Column, Table};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_pool, state) = super::open_session(cfg)?;

    if state.expenses.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }

    header(format!("Expenses ({})", state.expenses.len()));

    let mut table = Table::new(vec![
        Column::new("Date"),
        Column::new("Time"),
        Column::new("Category"),
        Column::wrapped("Description", cfg.description_width),
        Column::new("Amount"),
    ]);

    for e in &state.expenses {
        table.add_row(vec![
            e.date_str(),
            e.time_str(),
            e.category.clone(),
            e.description.clone(),
            format_amount(e.amount),
        ]);
    }

    print!("{}", table.render());

    let total = aggregate_by_category(&state.expenses).total();
    println!("\nTotal: {}", format_amount(total));

    Ok(())
}
