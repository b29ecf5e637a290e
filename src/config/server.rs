/// Port the HTTP server always listens on. There is no configuration
/// surface for it.
pub const LISTEN_PORT: u16 = 5000;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn new() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: LISTEN_PORT,
            workers: num_cpus::get() * 2, // 2x CPU cores for I/O-bound workload
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new()
    }
}
