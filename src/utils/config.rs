use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub request_timeout_seconds: u64,
    /// Names created (switched off) before the server starts accepting requests
    pub seed_lightbulbs: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec!["*".to_string()],
            request_timeout_seconds: 30,
            seed_lightbulbs: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Defaults for the standalone server, which starts with two lightbulbs
    pub fn standalone() -> Self {
        Self {
            seed_lightbulbs: vec!["livingroom".to_string(), "kitchen".to_string()],
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies environment variables on top of `self`. Unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }

        if let Ok(port) = env::var("PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                self.port = port_num;
            }
        }

        if let Ok(origins) = env::var("CORS_ORIGINS") {
            self.cors_origins = split_list(&origins);
        }

        if let Ok(timeout) = env::var("REQUEST_TIMEOUT_SECONDS") {
            if let Ok(timeout_num) = timeout.parse::<u64>() {
                self.request_timeout_seconds = timeout_num;
            }
        }

        if let Ok(seeds) = env::var("SEED_LIGHTBULBS") {
            self.seed_lightbulbs = split_list(&seeds);
        }

        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
