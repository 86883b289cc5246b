use crate::commands::{CmdMessage, CmdResult};
use crate::config::{SiftConfig, KEYS};
use crate::error::{Result, SiftError};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = SiftConfig::load(dir)?;
            let mut result = CmdResult::default();
            for key in KEYS {
                let value = config.get(key).unwrap_or_default();
                result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            }
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let config = SiftConfig::load(dir)?;
            let value = config
                .get(&key)
                .ok_or_else(|| SiftError::Config(format!("Unknown config key: {}", key)))?;
            Ok(CmdResult::default().with_message(CmdMessage::info(value)))
        }
        ConfigAction::Set(key, value) => {
            let (mut config, problem) = SiftConfig::load_repairing(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;

            let mut result = CmdResult::default().with_changed(true);
            if let Some(e) = problem {
                warn!("repaired stored config: {}", e);
                result.add_message(CmdMessage::warning(format!(
                    "{}; stored tab-order reset to default",
                    e
                )));
            }
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
