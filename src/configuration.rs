use config::ConfigError;
use serde::Deserialize;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::{env, fs};

/// Grateful Dead, the artist the tool was built around.
pub const DEFAULT_ARTIST: &str = "4TMHGUX5WI7OOm53PqSDAT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_settings: ApiSettings,
    #[serde(default = "default_artist")]
    pub default_artist: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_hops")]
    pub default_hops: u32,
    #[serde(default = "default_top_results")]
    pub top_results: usize,
    #[serde(default)]
    pub separate_undated: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl ApiSettings {
    pub fn new(client_id: &str, client_secret: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            api_base_url: default_api_base_url(),
            token_url: default_token_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

fn default_artist() -> String {
    DEFAULT_ARTIST.to_string()
}

fn default_output_file() -> String {
    "live_albums.html".to_string()
}

fn default_hops() -> u32 {
    2
}

fn default_top_results() -> usize {
    10
}

fn default_api_base_url() -> String {
    "https://api.spotify.com/v1".to_string()
}

fn default_token_url() -> String {
    "https://accounts.spotify.com/api/token".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

/// Loads settings from the YAML file (if it exists) with `LIVECHRON__*`
/// environment variables layered on top.
pub fn get_configuration(cfg_file: &Path) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(cfg_file).format(config::FileFormat::Yaml).required(false))
        .add_source(
            config::Environment::with_prefix("LIVECHRON")
                .prefix_separator("__")
                .separator("__"),
        )
        .set_default("api_settings.api_base_url", default_api_base_url())?
        .build()?;

    settings.try_deserialize::<Settings>()
}

pub struct ConfigFolder {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl ConfigFolder {
    pub fn new() -> io::Result<Self> {
        let home_dir = env::var("HOME").map_err(|_| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Failed to get HOME environment variable",
            )
        })?;

        Ok(Self::in_home(Path::new(&home_dir)))
    }

    pub fn in_home(home_dir: &Path) -> Self {
        Self {
            config_dir: get_config_dir_name(home_dir),
            config_file: get_config_file_name(home_dir),
        }
    }
}

fn get_config_dir_name(home_dir: &Path) -> PathBuf {
    home_dir.join(".livechron")
}

fn get_config_file_name(home_dir: &Path) -> PathBuf {
    home_dir.join(".livechron").join("config.yaml")
}

/// Writes the configuration template, asking before an existing file is replaced.
pub fn create_config(cfg_folder: ConfigFolder) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = &cfg_folder.config_file;

    if config_file.exists() {
        let stdin = io::stdin();
        if !confirm_replace(&mut stdin.lock(), config_file)? {
            println!("\x1b[33mKept the existing configuration.\x1b[0m");
            return Ok(());
        }
    }

    write_template(&cfg_folder.config_dir, config_file)?;

    println!("\x1b[32mWrote {}\x1b[0m", config_file.display());
    println!(
        "Set api_settings.client_id and api_settings.client_secret from your Spotify \
         application before running livechron."
    );

    Ok(())
}

fn write_template(config_dir: &Path, config_file: &Path) -> io::Result<()> {
    fs::create_dir_all(config_dir)?;
    fs::write(config_file, include_str!("config_template.yaml"))
}

/// Reads one answer line; only `y` or `yes` replaces the file.
fn confirm_replace(input: &mut impl BufRead, config_file: &Path) -> io::Result<bool> {
    println!(
        "\x1b[31m{} already exists. Replace it with a fresh template? (y/N)\x1b[0m",
        config_file.display()
    );

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
