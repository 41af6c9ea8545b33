use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 配置文件名 (可选，位于工作目录)
const CONFIG_FILE: &str = "receipt-points";
/// KEY=VALUE 格式的环境文件 (可选，位于工作目录)
const DOTENV_FILE: &str = ".env";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置
    ///
    /// 优先级 (低 → 高)：默认值、receipt-points.toml、APP__SERVER__HOST / APP__SERVER__PORT、
    /// .env 中的 PORT、PORT 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: AppConfig = settings.try_deserialize()?;
        let port = match std::env::var("PORT") {
            Ok(port) => Some(port),
            Err(_) => dotenv_port(Path::new(DOTENV_FILE))?,
        };
        config.apply_port_override(port.as_deref())?;
        Ok(config)
    }

    /// 兼容常见的 PORT 环境变量
    fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), ConfigError> {
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// 读取 .env 中的 PORT，文件不存在或未设置时返回 None
fn dotenv_port(path: &Path) -> Result<Option<String>, ConfigError> {
    let settings = config::Config::builder()
        .add_source(
            config::File::from(path)
                .format(config::FileFormat::Ini)
                .required(false),
        )
        .build()?;
    Ok(["port", "PORT"]
        .iter()
        .find_map(|key| settings.get_string(key).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();
        config.apply_port_override(Some("8080")).unwrap();
        assert_eq!(config.server.port, 8080);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = AppConfig::default();
        let err = config.apply_port_override(Some("http")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_dotenv_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "NODE_ENV=production\nPORT=4000\n").unwrap();

        let port = dotenv_port(&path).unwrap();
        assert_eq!(port.as_deref(), Some("4000"));

        let mut config = AppConfig::default();
        config.apply_port_override(port.as_deref()).unwrap();
        assert_eq!(config.server.port, 4000);
    }

    #[test]
    fn test_dotenv_without_port() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "NODE_ENV=production\n").unwrap();
        assert_eq!(dotenv_port(&path).unwrap(), None);

        let missing = dir.path().join("missing.env");
        assert_eq!(dotenv_port(&missing).unwrap(), None);
    }
}
