use clap::{Parser, Subcommand, ValueEnum};

use outgoing::signature::{signed_path, HmacSha256Scheme, LegacySha1, SignatureScheme};

#[derive(Parser)]
#[command(name = "outgoing-sign")]
#[command(about = "Sign destinations for the outgoing redirect gateway", long_about = None)]
struct Cli {
    /// Shared secret key.
    #[arg(short, long, env = "OUTGOING_SECRET_KEY", hide_env_values = true)]
    key: String,

    /// Signature scheme to sign with.
    #[arg(short, long, value_enum, default_value_t = Scheme::Hmac)]
    scheme: Scheme,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scheme {
    /// HMAC-SHA256 (current)
    Hmac,
    /// SHA-1 of secret + destination (legacy)
    Sha1,
}

impl Scheme {
    fn as_scheme(self) -> &'static dyn SignatureScheme {
        match self {
            Scheme::Hmac => &HmacSha256Scheme,
            Scheme::Sha1 => &LegacySha1,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the signature and gateway path for a destination
    Sign {
        /// Destination URL
        url: String,
    },
    /// Sign a destination and request it from a running gateway
    Probe {
        /// Gateway base URL
        #[arg(short, long, default_value = "http://localhost:8000")]
        gateway: String,

        /// Destination URL
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let scheme = cli.scheme.as_scheme();

    match cli.command {
        Commands::Sign { url } => {
            println!("signature: {}", scheme.sign(&url, &cli.key));
            println!("path:      {}", signed_path(scheme, &url, &cli.key));
        }
        Commands::Probe { gateway, url } => {
            let link = format!(
                "{}{}",
                gateway.trim_end_matches('/'),
                signed_path(scheme, &url, &cli.key)
            );
            let res = reqwest::Client::new().get(&link).send().await?;
            let status = res.status();
            println!("GET {link}");
            println!("status: {status}");
            if !status.is_success() {
                eprintln!("Error: gateway refused the link: {}", res.text().await?);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
