use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_FILTER: &str = "rdv_server=info,actix_web=info";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
}

impl ServerConfig {
    /// Reads `HOST`, `PORT` and `RUST_LOG`, after loading `.env` if there is one.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT '{}'", port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            log_filter: non_empty("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
