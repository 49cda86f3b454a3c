use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use motif::{Selection, VariantSchema};

#[derive(Parser, Debug)]
#[command(name = "motif", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered component names.
    List,
    /// Find components whose name, description or tags contain a keyword.
    Search(SearchArgs),
    /// Print one component's documentation snapshot as JSON.
    Show(ShowArgs),
    /// Resolve a selection and print the property set as JSON.
    Resolve(ResolveArgs),
    /// Write the registry documentation export as JSON.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct SearchArgs {
    /// Case-insensitive keyword.
    keyword: String,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Registered component name.
    component: String,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Registered component name (used as a label when `--schema` is given).
    component: String,

    /// Selection entry `axis=option`; may be repeated.
    #[arg(long = "set", value_parser = parse_pair)]
    set: Vec<(String, String)>,

    /// Resolve against a schema definition JSON file instead of the registry.
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Reject axes the schema does not declare.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() && !v.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected axis=option, got '{s}'")),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Search(args) => cmd_search(args),
        Command::Show(args) => cmd_show(args),
        Command::Resolve(args) => cmd_resolve(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    for name in motif::registry().list_names() {
        println!("{name}");
    }
    Ok(())
}

fn cmd_search(args: SearchArgs) -> anyhow::Result<()> {
    for entry in motif::registry().search(&args.keyword) {
        println!("{}", entry.name);
    }
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let doc = motif::registry().doc(&args.component)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn load_schema(path: &Path) -> anyhow::Result<VariantSchema> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read schema '{}'", path.display()))?;
    let schema: VariantSchema = serde_json::from_str(&text)
        .with_context(|| format!("parse schema '{}'", path.display()))?;
    Ok(schema)
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let schema = match &args.schema {
        Some(path) => load_schema(path)?,
        None => (*motif::registry().get(&args.component)?.schema).clone(),
    };

    let selection: Selection = args.set.into_iter().collect();
    let props = if args.strict {
        schema.resolve_strict(&selection)
    } else {
        schema.resolve(&selection)
    }
    .with_context(|| format!("resolve '{}'", args.component))?;

    println!("{}", serde_json::to_string_pretty(&props)?);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let json = motif::registry().export_all();
    let json = serde_json::to_string_pretty(&json)?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write export '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
