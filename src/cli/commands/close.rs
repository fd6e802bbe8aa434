use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::closing::ClosingLogic;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::models::ClosingDraft;

/// Register the cash closing, then write the closing report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Close {
        distributed,
        drawer,
        remaining,
        transfers,
        format,
        file,
        force,
    } = cmd
    {
        let draft = ClosingDraft::parse(distributed, drawer, remaining, transfers)?;

        let (mut pool, state) = super::open_session(cfg)?;
        let state = ClosingLogic::register(&mut pool, &state, draft, cfg.persist_closing)?;

        let path = super::resolve_output(file, cfg, *format);
        ExportLogic::export(&mut pool, &state, &path, *format, *force)?;
    }

    Ok(())
}
