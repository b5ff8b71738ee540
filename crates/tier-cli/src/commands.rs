use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tier_cli::pipeline::{build_index, load_matcher, load_parse_options, parse_sheet};
use tier_ingest::write_records;

use crate::cli::{IndexArgs, LookupArgs, ParseArgs};
use crate::summary::{print_index_summary, print_match, print_parse_summary};

pub fn run_parse(args: &ParseArgs) -> Result<()> {
    let _span = info_span!("parse", html = %args.html.display()).entered();
    let options = load_parse_options(args.layout.as_deref(), args.selector.as_deref())?;
    let outcome = parse_sheet(&args.html, &options)?;

    match &args.output {
        Some(path) => {
            write_records(path, &outcome.records).context("write records")?;
            info!(path = %path.display(), records = outcome.records.len(), "records written");
            print_parse_summary(&outcome, path);
        }
        None => {
            let json = serde_json::to_string_pretty(&outcome.records).context("encode records")?;
            write_stdout(&json)?;
        }
    }
    Ok(())
}

pub fn run_index(args: &IndexArgs) -> Result<()> {
    let _span = info_span!("index", records = %args.records.display()).entered();
    let index = build_index(&args.records)?;
    let json = if args.script_safe {
        index.to_script_safe_json()
    } else {
        index.to_json()
    }
    .context("encode index")?;

    match &args.output {
        Some(path) => {
            write_file(path, &json)?;
            print_index_summary(&index, path);
        }
        None => write_stdout(&json)?,
    }
    Ok(())
}

pub fn run_lookup(args: &LookupArgs) -> Result<()> {
    let matcher = load_matcher(&args.records, args.listing)?;
    let found = matcher.find_match(&args.title, args.wattage);
    print_match(found.as_ref());
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}

fn write_stdout(contents: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{contents}").context("write stdout")
}
