use crate::commands::{CmdMessage, CmdResult, StockzPaths};
use crate::config::StockzConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockzPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = StockzConfig::load(&paths.config_dir)?;
    let result = CmdResult::default();

    Ok(match action {
        ConfigAction::ShowAll => result.with_config(config),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.with_message(CmdMessage::info(value)),
            None => result.with_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(shown) => {
                config.save(&paths.config_dir)?;
                result
                    .with_config(config)
                    .with_message(CmdMessage::success(format!("{} set to {}", key, shown)))
            }
            Err(reason) => result.with_message(CmdMessage::error(reason)),
        },
    })
}
