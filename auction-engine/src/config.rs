use {
    anyhow::Result,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
    },
    std::{
        fs,
        time::Duration,
    },
};

mod server;

#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub enum Options {
    /// Run the auction engine service.
    Run(RunOptions),
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Server Options
    #[command(flatten)]
    pub server: server::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to a configuration file with the engine settings
    #[arg(long = "config")]
    #[arg(env = "AUCTION_ENGINE_CONFIG")]
    #[arg(default_value = "config.yaml")]
    pub config: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Base URL of the product catalog service.
    pub product_service_url: String,

    /// How often the lifecycle scheduler scans for due transitions.
    #[serde(with = "humantime_serde", default = "default_tick_interval")]
    pub tick_interval: Duration,

    /// Timeout for calls to the product catalog.
    #[serde(with = "humantime_serde", default = "default_product_timeout")]
    pub product_timeout: Duration,

    /// How many times a bid retries the conditional price write before
    /// giving up with a conflict.
    #[serde(default = "default_max_bid_attempts")]
    pub max_bid_attempts: usize,
}

fn default_tick_interval() -> Duration {
    Duration::from_secs(10)
}

fn default_product_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_max_bid_attempts() -> usize {
    3
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        let yaml_content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&yaml_content)?;
        Ok(config)
    }
}
