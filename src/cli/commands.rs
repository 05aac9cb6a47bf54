use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Network;

#[derive(Debug, Parser)]
#[command(name = "wallet-key-formats")]
pub struct Opt {
    #[arg(
        long = "network",
        global = true,
        help = "Network whose WIF version byte to use (mainnet, testnet)"
    )]
    pub network: Option<Network>,
    #[arg(long = "config", global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,
    #[arg(long = "json", global = true, help = "Print results as JSON")]
    pub json: bool,
    #[arg(short = 'v', long = "verbose", global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(name = "encodewif", about = "Encode a hex secret as WIF")]
    EncodeWif {
        #[arg(help = "32-byte secret as 64 hex characters")]
        secret: String,
        #[arg(long = "compressed", help = "Append the compressed public key flag")]
        compressed: bool,
    },
    #[command(name = "decodewif", about = "Decode and validate a WIF string")]
    DecodeWif {
        #[arg(help = "The WIF string")]
        wif: String,
    },
    #[command(
        name = "iscompressed",
        about = "Report whether a WIF string carries the compression flag"
    )]
    IsCompressed {
        #[arg(help = "The WIF string")]
        wif: String,
    },
    #[command(name = "checkminikey", about = "Validate a minikey")]
    CheckMinikey {
        #[arg(help = "The 22 or 30 character minikey")]
        minikey: String,
    },
    #[command(name = "minikeytosecret", about = "Derive the secret of a minikey")]
    MinikeyToSecret {
        #[arg(help = "The 22 or 30 character minikey")]
        minikey: String,
        #[arg(long = "wif", help = "Also print the secret as WIF")]
        wif: bool,
        #[arg(long = "compressed", help = "Use the compressed flag for --wif")]
        compressed: bool,
    },
}
