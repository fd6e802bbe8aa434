use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::expense::ExpenseLogic;
use crate::errors::AppResult;
use crate::models::ExpenseDraft;
use crate::utils::date;

/// Record an expense.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        category,
        amount,
        description,
    } = cmd
    {
        // Validate before touching the database
        let draft = ExpenseDraft::parse(category, description, amount)?;

        let (mut pool, state) = super::open_session(cfg)?;
        ExpenseLogic::add(&mut pool, &state, draft, date::now())?;
    }

    Ok(())
}
