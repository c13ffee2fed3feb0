use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub google_userinfo_url: String,
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Resolved once at process start; nothing reads the environment after
    /// this returns.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(5000);
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24),
        };
        let google_userinfo_url = std::env::var("GOOGLE_USERINFO_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".into());
        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        Ok(Self {
            host,
            port,
            database_url,
            jwt,
            google_userinfo_url,
            seed_demo_data,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
