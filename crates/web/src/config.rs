//! Server settings read from the environment

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "crates/web/static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (`CHECKERS_ADDR`)
    pub addr: String,
    /// Directory served under `/static` (`CHECKERS_STATIC_DIR`)
    pub static_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr = lookup("CHECKERS_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let static_dir =
            lookup("CHECKERS_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());
        Self { addr, static_dir }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
