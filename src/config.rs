use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::events::{MaximizationState, ScreenResolution, WindowGeometry};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub placement: PlacementConfig,
    pub dry_run: DryRunConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Константы размещения окна
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlacementConfig {
    /// Пиксели рамки, которые оконный менеджер добавляет снаружи запрошенной области.
    /// Запросами геометрии не определяется, поэтому задаётся вручную.
    pub decoration_padding: u32,
    /// Запас по высоте: окно выше `screen_height - height_tolerance` считается почти
    /// развёрнутым по вертикали.
    pub height_tolerance: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            decoration_padding: 8,
            height_tolerance: 100,
        }
    }
}

/// Состояние, которое эмулирует dry-run режим
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DryRunConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub maximized_vertical: bool,
    pub maximized_horizontal: bool,
}

impl DryRunConfig {
    pub fn resolution(&self) -> ScreenResolution {
        ScreenResolution::new(self.screen_width, self.screen_height)
    }

    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry::new(self.x, self.y, self.width, self.height)
    }

    pub fn state(&self) -> MaximizationState {
        MaximizationState {
            vertical: self.maximized_vertical,
            horizontal: self.maximized_horizontal,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "compact".to_string(),
            },
            placement: PlacementConfig::default(),
            dry_run: DryRunConfig {
                screen_width: 1920,
                screen_height: 1080,
                x: 100,
                y: 50,
                width: 800,
                height: 600,
                maximized_vertical: false,
                maximized_horizontal: false,
            },
        }
    }
}

impl Config {
    /// Значения по умолчанию, затем TOML-файл (если есть), затем переменные `SWAPMON_*`
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("SWAPMON_").split("__"));

        // Проверка откладывается до наложения флагов командной строки, см. validate()
        figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))
    }

    /// Секция dry_run проверяется только когда она действительно используется.
    /// decoration_padding здесь не проверяется: сравнить его можно только с
    /// реальной шириной экрана, это делает PlacementPlanner.
    pub fn validate(&self, dry_run: bool) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        if !dry_run {
            return Ok(());
        }

        // Валидация эмулируемого состояния
        let dry = &self.dry_run;
        if dry.screen_width == 0 || dry.screen_height == 0 {
            anyhow::bail!("Размер экрана dry_run должен быть больше 0");
        }
        if dry.width == 0 || dry.height == 0 {
            anyhow::bail!("Размер окна dry_run должен быть больше 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config_validation() {
        let config = Config::default();
        assert!(config.validate(false).is_ok());
        assert!(config.validate(true).is_ok());
        assert_eq!(config.placement.decoration_padding, 8);
        assert_eq!(config.placement.height_tolerance, 100);
    }

    #[test]
    fn test_invalid_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "json".to_string();
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_dry_run_section_checked_only_in_dry_run() {
        let mut config = Config::default();
        config.dry_run.screen_width = 0;
        assert!(config.validate(false).is_ok());
        assert!(config.validate(true).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let config = Config::load("missing.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.placement, PlacementConfig::default());
            assert_eq!(config.logging.level, "info");
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_layers() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "swapmonitor.toml",
                r#"
                    [placement]
                    decoration_padding = 4

                    [logging]
                    level = "debug"
                "#,
            )?;
            jail.set_env("SWAPMON_PLACEMENT__HEIGHT_TOLERANCE", "50");

            let config = Config::load("swapmonitor.toml").map_err(|e| e.to_string())?;
            assert_eq!(config.placement.decoration_padding, 4);
            assert_eq!(config.placement.height_tolerance, 50);
            assert_eq!(config.logging.level, "debug");
            // Не указанные в файле значения берутся по умолчанию
            assert_eq!(config.logging.format, "compact");
            assert_eq!(config.dry_run.screen_width, 1920);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_file_values_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("bad.toml", "[logging]\nlevel = \"loud\"\n")?;
            let config = Config::load("bad.toml").map_err(|e| e.to_string())?;
            assert!(config.validate(false).is_err());

            jail.create_file("typo.toml", "[placement]\ndecoration_padding = \"wide\"\n")?;
            assert!(Config::load("typo.toml").is_err());
            Ok(())
        });
    }
}
