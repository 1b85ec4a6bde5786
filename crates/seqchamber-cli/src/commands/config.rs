// Show or initialise configuration

use seqchamber_config::{ChamberConfig, ConfigManager, ConfigManagerTrait};
use seqchamber_core::PatternChamber;

use super::Command;
use crate::{
    error::{CliError, CliResult},
    output::OutputStyle,
};

/// `seqchamber config [--init]`
pub struct ConfigCommand<'a> {
    pub config: ChamberConfig,
    pub manager: &'a ConfigManager,
    pub init: bool,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(config: ChamberConfig, manager: &'a ConfigManager, init: bool) -> Self {
        Self {
            config,
            manager,
            init,
        }
    }
}

impl Command for ConfigCommand<'_> {
    fn execute(&self, _chamber: &PatternChamber) -> CliResult<bool> {
        let style = OutputStyle::default();
        let path = self.manager.config_path().display().to_string();

        if self.init {
            if self.manager.config_path().exists() {
                return Err(CliError::InvalidArgument {
                    message: format!("{} already exists", path),
                });
            }
            self.manager.save_config(&ChamberConfig::default())?;
            println!("{}", style.success(&format!("Wrote {}", path)));
            return Ok(true);
        }

        let rendered = toml::to_string(&self.config).map_err(|e| CliError::Internal(e.to_string()))?;
        println!("{}", style.info(&path));
        println!("{}", rendered);
        Ok(true)
    }
}
