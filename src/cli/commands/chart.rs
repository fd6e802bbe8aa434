use crate::config::Config;
use crate::core::calculator::aggregate::aggregate_by_category;
use crate::core::calculator::closing_series::closing_series;
use crate::core::chart::ChartLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_pool, state) = super::open_session(cfg)?;

    header("Expenses by category");
    print!(
        "{}",
        ChartLogic::render_categories(&aggregate_by_category(&state.expenses))
    );

    println!();
    match &state.closing {
        Some(closing) => {
            header("Last cash closing");
            print!("{}", ChartLogic::render_closing(&closing_series(closing)));
        }
        None => info("No cash closing stored."),
    }

    Ok(())
}
