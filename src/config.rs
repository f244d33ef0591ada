/// Application configuration, parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// football-data.org API token. Optional: when absent the fixture and
    /// team endpoints answer with a configuration error instead of data.
    pub football_api_key: Option<String>,
    /// OpenWeatherMap API key. Optional, same degraded behavior.
    pub openweather_api_key: Option<String>,
    pub port: u16,
    /// Comma-separated competition codes for the fixture feed.
    pub competitions: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            football_api_key: std::env::var("FOOTBALL_API_KEY").ok(),
            openweather_api_key: std::env::var("OPENWEATHER_API_KEY").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid u16"),
            competitions: std::env::var("COMPETITIONS")
                .unwrap_or_else(|_| "PL,PD,BL1,SA,FL1".to_string()),
        }
    }
}
