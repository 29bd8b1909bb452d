use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hashgate",
    about = "Hashgate — content-addressed object gateway",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a block, file, or directory tree and print its root hash
    Push(PushArgs),
    /// Ingest a local directory and print its reconstructed tree
    Tree(TreeArgs),
    /// Convert between hex and store key encodings
    Key(KeyArgs),
    /// Rewrite a hex-rooted path into its internal form
    Resolve(ResolveArgs),
    /// Write or show gateway configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct PushArgs {
    /// What to ingest: block (hex bytes), file, or tree
    pub kind: PushKind,
    /// Hex bytes for `block`; a local path for `file`/`tree`
    pub target: String,
    /// Link depth bound for `tree`; negative means unbounded
    #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
    pub depth: i64,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum PushKind {
    Block,
    File,
    Tree,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Local directory to ingest and walk
    pub path: String,
    /// Link depth bound; negative means unbounded
    #[arg(short, long, default_value = "-1", allow_hyphen_values = true)]
    pub depth: i64,
}

#[derive(Args)]
pub struct KeyArgs {
    #[command(subcommand)]
    pub direction: KeyCommand,
}

#[derive(Subcommand)]
pub enum KeyCommand {
    /// Base58 store key → 0x-prefixed hex
    ToHex { key: String },
    /// Hex hash (0x optional) → base58 store key
    FromHex { hash: String },
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Slash-delimited path whose first segment is a hex hash
    pub path: String,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write a default config file here instead of printing the active one
    #[arg(long)]
    pub init: Option<String>,
}
