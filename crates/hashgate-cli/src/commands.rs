use std::path::Path;

use colored::Colorize;
use hashgate_gateway::{
    external_to_internal, internal_to_external, resolve_path_prefix, FsTree, Gateway,
    GatewayConfig,
};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Push(args) => cmd_push(args),
        Command::Tree(args) => cmd_tree(args, &cli.format),
        Command::Key(args) => cmd_key(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn depth_param(depth: i64) -> Option<usize> {
    if depth < 0 {
        None
    } else {
        Some(depth as usize)
    }
}

fn cmd_push(args: PushArgs) -> anyhow::Result<()> {
    let gw = Gateway::in_memory();
    let hash = match args.kind {
        PushKind::Block => gw.push("block", &[args.target.as_str()])?,
        PushKind::File => gw.push("file", &[args.target.as_str()])?,
        PushKind::Tree => {
            let depth = args.depth.to_string();
            gw.push("tree", &[args.target.as_str(), depth.as_str()])?
        }
    };
    println!("{} {}", "✓".green().bold(), hash.yellow());
    Ok(())
}

fn cmd_tree(args: TreeArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let gw = Gateway::in_memory();
    let key = gw.push_tree(Path::new(&args.path), depth_param(args.depth))?;
    let path = hashgate_gateway::ExternalRootedPath::from_key(key);
    let tree = gw.tree(&path, depth_param(args.depth))?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
        OutputFormat::Text => {
            println!("{} {}", tree.hash.dimmed(), "/".bold());
            print_children(&tree, 1);
        }
    }
    Ok(())
}

fn print_children(tree: &FsTree, indent: usize) {
    for child in &tree.children {
        println!(
            "{}{} {}",
            "  ".repeat(indent),
            child.hash.dimmed(),
            child.name
        );
        print_children(child, indent + 1);
    }
}

fn cmd_key(args: KeyArgs) -> anyhow::Result<()> {
    let converted = match args.direction {
        KeyCommand::ToHex { key } => internal_to_external(&key)?,
        KeyCommand::FromHex { hash } => external_to_internal(&hash)?,
    };
    println!("{converted}");
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    println!("{}", resolve_path_prefix(&args.path)?);
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = GatewayConfig::default();
    match args.init {
        Some(path) => {
            config.save(Path::new(&path))?;
            println!("{} wrote {}", "✓".green().bold(), path.bold());
        }
        None => {
            println!("chunk_size = {}", config.chunk_size);
            match config.max_walk_depth {
                Some(depth) => println!("max_walk_depth = {depth}"),
                None => println!("max_walk_depth = unbounded"),
            }
        }
    }
    Ok(())
}
