// Configuration file handling

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::grpc::{RPC_PORT, Transport};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host the service runs on (the port is always 3001). Unset falls back
    /// to `DEBTSIMPL_HOSTNAME`, then `localhost`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Wire protocol: "grpc-web" or "grpc"
    #[serde(default)]
    pub transport: Transport,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            transport: Transport::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to listen on
    #[serde(default = "default_listen_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_listen_address(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .address
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address '{}': {}", self.address, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

// Default values
pub const ENV_DEBTSIMPL_HOSTNAME: &str = "DEBTSIMPL_HOSTNAME";

pub fn default_hostname() -> String {
    String::from("localhost")
}

/// `DEBTSIMPL_HOSTNAME`, ignored when empty
pub fn env_hostname() -> Option<String> {
    std::env::var(ENV_DEBTSIMPL_HOSTNAME)
        .ok()
        .filter(|hostname| !hostname.trim().is_empty())
}

pub fn default_listen_address() -> String {
    String::from("0.0.0.0")
}

pub fn default_port() -> u16 {
    RPC_PORT
}

impl Config {
    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .debtsimplrc (current directory)
        // 2. ~/.debtsimplrc (home directory)
        // 3. .debtsimplrc.toml (current directory)
        // 4. ~/.debtsimplrc.toml (home directory)

        let paths = Self::candidate_paths(std::env::current_dir().ok(), dirs::home_dir());

        paths
            .iter()
            .find(|path| path.exists())
            .and_then(|path| Self::load_from_file(path))
    }

    /// Lookup order for rc files. A missing directory only drops its own entries.
    pub fn candidate_paths(cwd: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
        [".debtsimplrc", ".debtsimplrc.toml"]
            .into_iter()
            .flat_map(|name| [cwd.as_ref(), home.as_ref()].map(|dir| dir.map(|dir| dir.join(name))))
            .flatten()
            .collect()
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let config = Self::parse(&content);
        if config.is_none() {
            tracing::warn!("Ignoring malformed configuration file {}", path.display());
        }
        config
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }

    /// Pick the hostname: flag, then config file, then environment, then default.
    /// A config file that leaves `hostname` unset does not shadow the environment.
    pub fn resolve_hostname(config: Option<&Self>, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| config.and_then(|cfg| cfg.client.hostname.clone()))
            .or_else(env_hostname)
            .unwrap_or_else(default_hostname)
    }
}


#[cfg(test)]
mod tests {
    use super::test_env::HostnameEnv;
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[client]
hostname = "cknittel.com"
transport = "grpc"

[server]
address = "127.0.0.1"
port = 4001
"#;

        let config = Config::parse(toml).expect("Failed to parse config");
        assert_eq!(config.client.hostname.as_deref(), Some("cknittel.com"));
        assert_eq!(config.client.transport, Transport::Grpc);
        assert_eq!(config.server.address, "127.0.0.1");
        assert_eq!(config.server.port, 4001);
        assert_eq!(
            config.server.socket_addr().unwrap(),
            "127.0.0.1:4001".parse().unwrap()
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("[client]\nhostname = \"example.org\"\n").unwrap();
        assert_eq!(config.client.hostname.as_deref(), Some("example.org"));
        assert_eq!(config.client.transport, Transport::GrpcWeb);
        assert_eq!(config.server.port, RPC_PORT);
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        assert!(Config::parse("[client]\ntransport = \"carrier-pigeon\"\n").is_none());
    }

    #[test]
    fn test_invalid_listen_address() {
        let server = ServerConfig {
            address: "not-an-ip".to_string(),
            port: 3001,
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_flag_wins_over_config() {
        let _env = HostnameEnv::set(Some("env.example"));
        let mut config = Config::default();
        config.client.hostname = Some("file.example".to_string());

        assert_eq!(
            Config::resolve_hostname(Some(&config), Some("flag.example")),
            "flag.example"
        );
        assert_eq!(Config::resolve_hostname(Some(&config), None), "file.example");
    }

    #[test]
    fn test_env_used_when_file_omits_hostname() {
        let _env = HostnameEnv::set(Some("cknittel.com"));
        let config = Config::parse("[server]\nport = 4001\n").unwrap();

        assert_eq!(config.client.hostname, None);
        assert_eq!(Config::resolve_hostname(Some(&config), None), "cknittel.com");
    }

    #[test]
    fn test_env_used_without_config_file() {
        let _env = HostnameEnv::set(Some("cknittel.com"));

        assert_eq!(Config::resolve_hostname(None, None), "cknittel.com");
    }

    #[test]
    fn test_default_hostname_when_nothing_is_set() {
        {
            let _env = HostnameEnv::set(None);
            assert_eq!(Config::resolve_hostname(None, None), "localhost");
            assert_eq!(Config::resolve_hostname(Some(&Config::default()), None), "localhost");
        }

        // Blank values count as unset
        let _env = HostnameEnv::set(Some("   "));
        assert_eq!(Config::resolve_hostname(None, None), "localhost");
    }

    #[test]
    fn test_candidate_paths_without_home_keep_cwd() {
        let cwd = PathBuf::from("/work");
        let paths = Config::candidate_paths(Some(cwd.clone()), None);

        assert_eq!(
            paths,
            vec![cwd.join(".debtsimplrc"), cwd.join(".debtsimplrc.toml")]
        );
    }

    #[test]
    fn test_candidate_paths_order() {
        let cwd = PathBuf::from("/work");
        let home = PathBuf::from("/home/user");
        let paths = Config::candidate_paths(Some(cwd.clone()), Some(home.clone()));

        assert_eq!(
            paths,
            vec![
                cwd.join(".debtsimplrc"),
                home.join(".debtsimplrc"),
                cwd.join(".debtsimplrc.toml"),
                home.join(".debtsimplrc.toml"),
            ]
        );
        assert!(Config::candidate_paths(None, None).is_empty());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".debtsimplrc.toml");
        std::fs::write(&path, Config::default().to_toml()).unwrap();

        let loaded = Config::load_from_file(&path).expect("default config should load");
        assert_eq!(loaded.client.hostname, None);
        assert_eq!(loaded.server.address, "0.0.0.0");
    }
}
