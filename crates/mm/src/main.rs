#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use moneymour_core::credentials::MerchantCredentials;
use moneymour_core::environment::{Environment, DEFAULT_ENVIRONMENT};
use moneymour_core::expiry::now_plus_window;
use moneymour_core::keys::{embedded_public_key, resolve_public_key};
use moneymour_core::types::ExpiresAt;
use moneymour_sign::keys::{generate_key_pair, public_key_pem, DEFAULT_KEY_BITS};
use moneymour_sign::SignedRequest;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mm",
    version,
    about = "Sign and verify Moneymour merchant requests."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// List environments and whether a public key is embedded for each.
    Envs,

    /// Print a public key: an environment's embedded key, or one derived from a private key.
    Pubkey {
        /// Environment name (production, sandbox, stage, development).
        #[arg(long, conflicts_with = "key")]
        env: Option<String>,

        /// Path to a PEM private key.
        #[arg(long)]
        key: Option<String>,
    },

    /// Print an Expires-at value 60 seconds from now.
    ExpiresAt,

    /// Print the exact payload that gets signed.
    Payload {
        /// Path to body .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Expires-at value (decimal epoch seconds).
        #[arg(long)]
        expires_at: String,
    },

    /// Sign a body with a merchant private key.
    Sign {
        /// Path to body .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Path to PEM private key.
        #[arg(long)]
        key: String,

        /// Expires-at value; defaults to now + 60s.
        #[arg(long)]
        expires_at: Option<String>,
    },

    /// Verify a signature over a body.
    Verify {
        /// Path to body .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Base64 signature.
        #[arg(long)]
        signature: String,

        /// Expires-at value the signature was made with.
        #[arg(long)]
        expires_at: String,

        /// Path to PEM public key. Without it the environment's key is used.
        #[arg(long)]
        pubkey: Option<String>,

        /// Environment whose embedded key to use (default: MONEYMOUR_ENVIRONMENT or sandbox).
        #[arg(long)]
        env: Option<String>,
    },

    /// Build a signed merchant request (credentials from MONEYMOUR_MERCHANT_ID / _SECRET).
    Request {
        /// Path to body .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,

        /// Path to PEM private key.
        #[arg(long)]
        key: String,

        /// Expires-at value; defaults to now + 60s.
        #[arg(long)]
        expires_at: Option<String>,
    },

    /// Generate a merchant RSA key pair.
    Keygen {
        /// Directory to write private.pem and public.pem into.
        #[arg(long)]
        out_dir: String,

        /// Modulus size in bits.
        #[arg(long, default_value_t = DEFAULT_KEY_BITS)]
        bits: usize,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Envs => cmd_envs(),

        Cmd::Pubkey { env, key } => cmd_pubkey(env.as_deref(), key.as_deref()),

        Cmd::ExpiresAt => {
            println!("{}", now_plus_window());
            Ok(())
        }

        Cmd::Payload { file, expires_at } => cmd_payload(&file, &expires_at),

        Cmd::Sign {
            file,
            key,
            expires_at,
        } => cmd_sign(&file, &key, expires_at.as_deref()),

        Cmd::Verify {
            file,
            signature,
            expires_at,
            pubkey,
            env,
        } => cmd_verify(
            &file,
            &signature,
            &expires_at,
            pubkey.as_deref(),
            env.as_deref(),
        ),

        Cmd::Request {
            file,
            key,
            expires_at,
        } => cmd_request(&file, &key, expires_at.as_deref()),

        Cmd::Keygen { out_dir, bits } => cmd_keygen(&out_dir, bits),
    }
}

/// Diagnostics go to stderr; stdout is reserved for command output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_body(file: &str) -> Result<Value> {
    let content = if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(file).with_context(|| format!("cannot read body {file}"))?
    };
    serde_json::from_str(&content).with_context(|| format!("{file}: invalid JSON body"))
}

fn read_key(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read key {path}"))
}

fn parse_expires_at(value: Option<&str>) -> Result<ExpiresAt> {
    match value {
        Some(v) => Ok(v.parse()?),
        None => Ok(now_plus_window()),
    }
}

fn cmd_envs() -> Result<()> {
    let envs: Vec<Value> = Environment::ALL
        .iter()
        .map(|env| {
            json!({
                "name": env,
                "public_key": embedded_public_key(*env).is_some(),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&envs)?);
    Ok(())
}

fn cmd_pubkey(env: Option<&str>, key: Option<&str>) -> Result<()> {
    let pem = match (env, key) {
        (_, Some(path)) => public_key_pem(&read_key(path)?)?,
        (Some(name), None) => resolve_public_key(name.parse()?)?.to_string(),
        (None, None) => bail!("specify --env or --key"),
    };
    println!("{}", pem.trim_end());
    Ok(())
}

fn cmd_payload(file: &str, expires_at: &str) -> Result<()> {
    let body = read_body(file)?;
    let expires_at: ExpiresAt = expires_at.parse()?;
    println!("{}", moneymour_sign::canonicalize(&expires_at, &body));
    Ok(())
}

fn cmd_sign(file: &str, key_path: &str, expires_at: Option<&str>) -> Result<()> {
    let body = read_body(file)?;
    let private_key = read_key(key_path)?;
    let expires_at = parse_expires_at(expires_at)?;

    let signature = moneymour_sign::sign(&private_key, &expires_at, &body)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "expires_at": expires_at,
            "signature": signature,
        }))?
    );
    Ok(())
}

fn cmd_verify(
    file: &str,
    signature: &str,
    expires_at: &str,
    pubkey_path: Option<&str>,
    env: Option<&str>,
) -> Result<()> {
    let body = read_body(file)?;
    let expires_at: ExpiresAt = expires_at.parse()?;
    let public_key = pubkey_path.map(read_key).transpose()?;
    // MONEYMOUR_ENVIRONMENT only matters when the embedded key is needed.
    let environment = match (env, &public_key) {
        (Some(name), _) => name.parse()?,
        (None, Some(_)) => DEFAULT_ENVIRONMENT,
        (None, None) => Environment::from_env()?,
    };

    let valid = moneymour_sign::verify(
        signature,
        &expires_at,
        &body,
        public_key.as_deref(),
        environment,
    )?;
    if valid {
        eprintln!("  signature valid");
    } else {
        bail!("signature verification failed");
    }
    Ok(())
}

fn cmd_request(file: &str, key_path: &str, expires_at: Option<&str>) -> Result<()> {
    let body = read_body(file)?;
    let private_key = read_key(key_path)?;
    let expires_at = parse_expires_at(expires_at)?;
    let credentials = MerchantCredentials::from_env()?;

    let request = SignedRequest::build(&credentials, &private_key, body, expires_at)?;
    let headers: serde_json::Map<String, Value> = request
        .headers()
        .into_iter()
        .map(|(name, value)| (name.to_string(), Value::String(value)))
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "headers": headers,
            "body": request.body(),
        }))?
    );
    Ok(())
}

fn cmd_keygen(out_dir: &str, bits: usize) -> Result<()> {
    let dir = Path::new(out_dir);
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {out_dir}"))?;

    let private_path = dir.join("private.pem");
    if private_path.exists() {
        bail!("{} already exists", private_path.display());
    }

    let pair = generate_key_pair(bits)?;
    std::fs::write(&private_path, &pair.private_pem)
        .with_context(|| format!("cannot write {}", private_path.display()))?;
    let public_path = dir.join("public.pem");
    std::fs::write(&public_path, &pair.public_pem)
        .with_context(|| format!("cannot write {}", public_path.display()))?;

    eprintln!("  wrote {} and {}", private_path.display(), public_path.display());
    Ok(())
}
