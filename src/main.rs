use anyhow::{bail, Context};
use clap::Parser;
use imgproxy_url::config::{Config, ProxyConfig};
use imgproxy_url::{Options, UrlBuilder, Value};
use std::path::PathBuf;

/// Build signed imgproxy URLs from the command line
#[derive(Parser, Debug)]
#[command(name = "imgproxy-url")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// imgproxy base URL (overrides proxy.base_url)
    #[arg(long)]
    base_url: Option<String>,

    /// Hex-encoded signing key
    #[arg(long)]
    key: Option<String>,

    /// Hex-encoded signing salt
    #[arg(long)]
    salt: Option<String>,

    /// Embed the source URL as plain text instead of base64
    #[arg(long)]
    plain: bool,

    /// Fixed signature segment
    #[arg(long)]
    signature: Option<String>,

    /// Named option preset from the configuration file
    #[arg(long)]
    preset: Option<String>,

    /// Processing option, e.g. `-o resize=fill:300:400` (repeatable)
    #[arg(short = 'o', long = "option", value_name = "NAME=ARGS")]
    options: Vec<String>,

    /// Output format extension
    #[arg(short, long)]
    extension: Option<String>,

    /// Source image URL
    source: String,
}

fn main() -> anyhow::Result<()> {
    imgproxy_url::logging::init_subscriber()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging subsystem: {}", e))?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let config = Config::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            config.validate()?;
            tracing::info!(
                config_file = %path.display(),
                base_url = %config.proxy.base_url,
                presets = config.presets.len(),
                "Configuration loaded successfully"
            );
            Some(config)
        }
        None => None,
    };

    let proxy = proxy_config(&args, config.as_ref())?;
    let builder = UrlBuilder::from_config(&proxy)?;

    let mut options = match (&args.preset, &config) {
        (Some(name), Some(config)) => config.preset(name)?,
        (Some(name), None) => bail!("Preset '{}' requires --config", name),
        (None, _) => Options::new(),
    };
    for raw in &args.options {
        let (name, values) = parse_option(raw)?;
        options.apply(name, values);
    }

    let url = builder.build_url(&args.source, Some(&options), args.extension.as_deref());
    println!("{}", url);

    Ok(())
}

/// Merge command-line flags over the loaded configuration
fn proxy_config(args: &Args, config: Option<&Config>) -> anyhow::Result<ProxyConfig> {
    let mut proxy = match (config, &args.base_url) {
        (Some(config), _) => config.proxy.clone(),
        (None, Some(base_url)) => ProxyConfig::new(base_url.clone()),
        (None, None) => bail!("Either --config or --base-url is required"),
    };

    if let Some(base_url) = &args.base_url {
        proxy.base_url = base_url.clone();
    }
    if args.key.is_some() {
        proxy.key = args.key.clone();
    }
    if args.salt.is_some() {
        proxy.salt = args.salt.clone();
    }
    if args.plain {
        proxy.encode_source = false;
    }
    if args.signature.is_some() {
        proxy.custom_signature = args.signature.clone();
    }

    Ok(proxy)
}

/// Split `name=a:b:c` into a name and positional arguments
///
/// A bare `name` is a boolean flag set to true.
fn parse_option(raw: &str) -> anyhow::Result<(&str, Vec<Value>)> {
    let (name, values): (&str, Vec<Value>) = match raw.split_once('=') {
        Some((name, args)) => (name, args.split(':').map(Value::parse_lenient).collect()),
        None => (raw, vec![Value::Bool(true)]),
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("Invalid option '{}': expected NAME=ARGS", raw);
    }
    Ok((name, values))
}
