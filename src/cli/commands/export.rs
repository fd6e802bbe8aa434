use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let (mut pool, state) = super::open_session(cfg)?;
        let path = super::resolve_output(file, cfg, *format);
        ExportLogic::export(&mut pool, &state, &path, *format, *force)?;
    }
    Ok(())
}
