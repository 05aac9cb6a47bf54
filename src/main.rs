// Entry point for the key format CLI
// Every subcommand is a single conversion of a value given on the command line
use clap::Parser;
use log::{error, LevelFilter};
use serde_json::json;
use std::process;
use wallet_key_formats::{
    check_minikey, decode_wif, is_wif_compressed, minikey_to_secret, secret_to_wif_for, Command,
    Opt, Secret, GLOBAL_CONFIG,
};

fn main() {
    let opt = Opt::parse();

    // RUST_LOG still wins over the default level
    let level = if opt.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(opt) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Box<dyn std::error::Error>> {
    // The config file is applied first so that --network can override it
    if let Some(path) = &opt.config {
        GLOBAL_CONFIG.load_from_file(path)?;
    }
    if let Some(network) = opt.network {
        GLOBAL_CONFIG.set_network(network);
    }
    let network = GLOBAL_CONFIG.get_network();

    match opt.command {
        Command::EncodeWif { secret, compressed } => {
            let secret = Secret::from_hex(&secret)?;
            let wif = secret_to_wif_for(network, &secret, compressed);
            if opt.json {
                println!(
                    "{}",
                    json!({ "wif": wif, "compressed": compressed, "network": network })
                );
            } else {
                println!("{wif}");
            }
        }
        Command::DecodeWif { wif } => {
            let decoded = decode_wif(&wif, network)?;
            if opt.json {
                println!(
                    "{}",
                    json!({
                        "secret": decoded.secret.to_hex(),
                        "compressed": decoded.compressed,
                        "network": decoded.network,
                    })
                );
            } else {
                println!("Secret: {}", decoded.secret.to_hex());
                println!("Compressed: {}", decoded.compressed);
                println!("Network: {}", decoded.network);
            }
        }
        Command::IsCompressed { wif } => {
            let compressed = is_wif_compressed(&wif);
            if opt.json {
                println!("{}", json!({ "compressed": compressed }));
            } else {
                println!("{compressed}");
            }
        }
        Command::CheckMinikey { minikey } => {
            let valid = check_minikey(&minikey);
            if opt.json {
                println!("{}", json!({ "valid": valid }));
            } else {
                println!("{valid}");
            }
            if !valid {
                return Err("Minikey failed validation".into());
            }
        }
        Command::MinikeyToSecret {
            minikey,
            wif,
            compressed,
        } => {
            let secret = minikey_to_secret(&minikey)?;
            let encoded = wif.then(|| secret_to_wif_for(network, &secret, compressed));
            if opt.json {
                println!(
                    "{}",
                    json!({ "secret": secret.to_hex(), "wif": encoded })
                );
            } else {
                println!("Secret: {}", secret.to_hex());
                if let Some(encoded) = encoded {
                    println!("WIF: {encoded}");
                }
            }
        }
    }
    Ok(())
}
