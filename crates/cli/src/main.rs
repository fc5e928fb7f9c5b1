use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use edhash_corelib as core;
use edhash_corelib::config::Config;
use edhash_corelib::crypto::registry::AnyContext;
use log::{debug, info, LevelFilter};

#[derive(Parser)]
#[command(name = "edhash", version, about = "64-byte hash adapter for ed25519")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available hash primitives
    HashLs {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Stream a file (or stdin) through the adapter and print the 64-byte digest
    Digest {
        /// Hash primitive id (overrides the config file)
        #[arg(long)]
        hash: Option<String>,
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Input file; `-` or absent reads stdin
        input: Option<PathBuf>,
    },
    /// Derive the ed25519 public key for a 32-byte hex secret
    Pubkey {
        /// Hash primitive id (overrides the config file)
        #[arg(long)]
        hash: Option<String>,
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// 64 hex characters
        secret: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn resolve_config(path: Option<&Path>, hash: Option<String>) -> Result<Config> {
    let mut cfg = match path {
        Some(p) => Config::load(p).with_context(|| format!("loading {}", p.display()))?,
        None => Config::default(),
    };
    if let Some(hash) = hash {
        cfg.hash = hash;
    }
    cfg.validate()?;
    debug!("effective config: {cfg:?}");
    Ok(cfg)
}

fn digest_reader(mut ctx: AnyContext, reader: &mut dyn Read, chunk_size: usize) -> Result<String> {
    let mut buf = vec![0u8; chunk_size];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("reading input"),
        };
        ctx.update(&buf[..n]);
        total += n as u64;
    }
    info!("hashed {total} bytes with {}", ctx.id());
    Ok(hex::encode(ctx.finalize()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::HashLs { json }) => {
            let infos = core::list_hashes();
            if json {
                println!("{}", serde_json::to_string_pretty(infos)?);
            } else {
                for h in infos {
                    println!("{}  {} bytes  {}", h.id, h.digest_len, h.description);
                }
            }
        }
        Some(Commands::Digest {
            hash,
            config,
            input,
        }) => {
            let cfg = resolve_config(config.as_deref(), hash)?;
            let ctx = cfg.context()?;
            let digest = match input.as_deref() {
                None => digest_reader(ctx, &mut io::stdin().lock(), cfg.chunk_size)?,
                Some(p) if p == Path::new("-") => {
                    digest_reader(ctx, &mut io::stdin().lock(), cfg.chunk_size)?
                }
                Some(p) => {
                    let mut file =
                        File::open(p).with_context(|| format!("opening {}", p.display()))?;
                    digest_reader(ctx, &mut file, cfg.chunk_size)?
                }
            };
            println!("{digest}");
        }
        Some(Commands::Pubkey {
            hash,
            config,
            secret,
        }) => {
            let cfg = resolve_config(config.as_deref(), hash)?;
            let bytes = hex::decode(secret.trim()).context("secret is not hex")?;
            let Ok(secret) = <[u8; core::ed25519::SECRET_KEY_LEN]>::try_from(bytes.as_slice())
            else {
                bail!(
                    "secret must be {} bytes, got {}",
                    core::ed25519::SECRET_KEY_LEN,
                    bytes.len()
                );
            };
            println!("{}", hex::encode_upper(public_key(&cfg.hash, &secret)?));
        }
        None => {
            println!("edhash {} — ready", core::version());
            println!("Try: `edhash hash-ls` or `edhash digest <FILE>`");
        }
    }
    Ok(())
}

fn public_key(hash: &str, secret: &[u8; 32]) -> Result<[u8; 32]> {
    use edhash_corelib::crypto::blake2b::Blake2b512;
    use edhash_corelib::crypto::blake3::Blake3Xof;
    use edhash_corelib::crypto::sha3::Sha3_512;
    use edhash_corelib::crypto::sha512::Sha512;
    use edhash_corelib::ed25519::Ed25519;

    // Static dispatch per primitive; `AnyContext` is not a `digest::Digest`.
    let public = match AnyContext::by_id(hash)?.id() {
        "blake2b512" => Ed25519::<Blake2b512>::public_key(secret),
        "sha512" => Ed25519::<Sha512>::public_key(secret),
        "sha3-512" => Ed25519::<Sha3_512>::public_key(secret),
        "blake3-xof" => Ed25519::<Blake3Xof>::public_key(secret),
        other => bail!("no ed25519 binding for '{other}'"),
    };
    Ok(public)
}
