use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub theater: TheaterConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Настройки зала: имя и размер сетки мест
#[derive(Debug, Clone, Deserialize)]
pub struct TheaterConfig {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
}

impl Config {
    /// Every variable has a default so the demo runs with no environment
    /// at all. Malformed numeric values abort startup.
    pub fn from_env() -> Self {
        let config = Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cine_reserve=info".to_string()),
            },
            theater: TheaterConfig {
                name: env::var("THEATER_NAME")
                    .unwrap_or_else(|_| "Cineplex Theater".to_string()),
                rows: env::var("THEATER_ROWS")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .expect("THEATER_ROWS must be a valid number"),
                cols: env::var("THEATER_COLS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("THEATER_COLS must be a valid number"),
            },
        };

        // Rows are lettered A-Z in seat ids, so the grid caps at 26 rows.
        assert!(
            (1..=26).contains(&config.theater.rows),
            "THEATER_ROWS must be between 1 and 26"
        );
        assert!(config.theater.cols >= 1, "THEATER_COLS must be at least 1");

        config
    }
}
