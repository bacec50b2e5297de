use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::tictactoe::TicTacToeConfig;

pub type TicTacToeConfigManager =
    ConfigManager<FileContentConfigProvider, TicTacToeConfig, YamlConfigSerializer>;

pub fn get_config_manager(path: &str) -> TicTacToeConfigManager {
    ConfigManager::from_yaml_file(path)
}
