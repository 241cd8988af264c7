use anyhow::Result;
use dotenvy::dotenv;

fn default_max_body_size() -> usize {
    // 10 MB in bytes, the size class the loader enforces upstream
    10 * 1024 * 1024
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_body_size: usize,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", raw, e))?,
            Err(_) => 3000,
        };

        let max_body_size = match std::env::var("MAX_BODY_SIZE") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid MAX_BODY_SIZE value {:?}: {}", raw, e))?,
            Err(_) => default_max_body_size(),
        };

        Ok(Config {
            port,
            max_body_size,
        })
    }
}
