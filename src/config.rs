use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::thermal::load::DEFAULT_MARGIN_PERCENT;

/// Fator de referência padrão da carga externa, em BTU/h por m². Editável
/// pelo usuário a cada sessão; este é só o valor inicial.
pub const DEFAULT_REFERENCE_FACTOR: f64 = 100.0;

/// Preferências da aplicação. Persistem em config.toml; o estado da
/// calculadora em si nunca é salvo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Idioma da interface: auto/pt-br/en-us.
    pub language: String,
    /// Fator de referência inicial de cada sessão (BTU/h·m²).
    pub default_reference_factor_btu_per_m2: f64,
    /// Margem de segurança inicial de cada sessão (%).
    pub default_margin_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            default_reference_factor_btu_per_m2: DEFAULT_REFERENCE_FACTOR,
            default_margin_percent: DEFAULT_MARGIN_PERCENT,
        }
    }
}

/// Erros possíveis ao carregar/salvar as preferências.
#[derive(Debug)]
pub enum ConfigError {
    /// Erro de entrada/saída de arquivo
    Io(std::io::Error),
    /// Erro de parse do TOML
    Serde(toml::de::Error),
    /// Erro de serialização do TOML
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            ConfigError::Serde(e) => write!(f, "erro ao ler configuração: {e}"),
            ConfigError::Serialize(e) => write!(f, "erro ao serializar configuração: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Carrega config.toml ou cria o arquivo com os padrões na primeira
/// execução.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// Salva as preferências em config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
