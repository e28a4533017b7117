mod output;

use std::fs;
use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shelfmark_core::{GenConfig, generate, plan};
use shelfmark_render::generate_document;

use crate::output::{
    Format, encode_skips_json, pattern_skips_json, report_encode_skips, report_pattern_skips,
};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "shelfmark",
    version,
    about = "shelfmark — generate printable QR sticker sheets for warehouse shelf addresses"
)]
struct Cli {
    /// Output mode: "pretty" for terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    // ── Inspection commands (progressive: expand → plan → generate) ──
    /// Expand the configuration into its flat address list.
    Expand {
        /// Path to the YAML configuration, or `-` for stdin.
        config: String,
    },

    /// Show the paginated layout plan without rendering anything.
    Plan {
        /// Path to the YAML configuration, or `-` for stdin.
        config: String,
    },

    // ── Document generation ─────────────────────────────────────────
    /// Generate the PDF sticker sheet.
    Generate {
        /// Path to the YAML configuration, or `-` for stdin.
        config: String,
        /// Where to write the PDF.
        #[arg(long, short, default_value = "stickers.pdf")]
        out: String,
        /// Treat per-item skips (bad patterns, unencodable payloads) as
        /// failures: exit 1 if any label was skipped or degraded.
        #[arg(long)]
        strict: bool,
    },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Expand { config } => cmd_expand(&config, format)?,
        Cmd::Plan { config } => cmd_plan(&config, format)?,
        Cmd::Generate {
            config,
            out,
            strict,
        } => cmd_generate(&config, &out, strict, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_expand(config_path: &str, format: Format) -> Result<()> {
    let config = load_config(config_path)?;
    let list = generate(&config);

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "addrs": list.records,
                "skipped": pattern_skips_json(&list.skipped),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            for record in &list.records {
                println!("{}", record.text);
            }
            report_pattern_skips(&list.skipped);
            eprintln!(
                "{} addresses, {} pattern(s) skipped",
                list.records.len(),
                list.skipped.len()
            );
        }
    }

    Ok(())
}

fn cmd_plan(config_path: &str, format: Format) -> Result<()> {
    let config = load_config(config_path)?;
    let list = generate(&config);
    let plan = plan(&config.render, &list.records)?;

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "plan": plan,
                "skipped": pattern_skips_json(&list.skipped),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            println!(
                "page size: {}x{} pt, {} page(s)",
                plan.page_width, plan.page_height, plan.page_count
            );
            for placement in &plan.placements {
                println!(
                    "page {} cell ({:.1}, {:.1}) {:.1}x{:.1}: {} ({} stroke(s))",
                    placement.page,
                    placement.x,
                    placement.y,
                    placement.cell_w,
                    placement.cell_h,
                    placement.label.text,
                    placement.strokes.len()
                );
            }
            report_pattern_skips(&list.skipped);
        }
    }

    Ok(())
}

fn cmd_generate(config_path: &str, out_path: &str, strict: bool, format: Format) -> Result<()> {
    let config = load_config(config_path)?;
    let doc = generate_document(&config)?;

    fs::write(out_path, &doc.pdf)
        .with_context(|| format!("failed to write PDF to '{out_path}'"))?;

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "out": out_path,
                "labels": doc.report.labels,
                "pages": doc.report.pages,
                "pattern_skips": pattern_skips_json(&doc.report.pattern_skips),
                "encode_skips": encode_skips_json(&doc.report.encode_skips),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            report_pattern_skips(&doc.report.pattern_skips);
            report_encode_skips(&doc.report.encode_skips);
            eprintln!(
                "{}: {} labels on {} page(s)",
                out_path, doc.report.labels, doc.report.pages
            );
        }
    }

    if strict && !doc.report.is_clean() {
        process::exit(1);
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Read and parse the configuration from a file path or stdin (`-`).
fn load_config(path: &str) -> Result<GenConfig> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read configuration from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file '{path}'"))?
    };
    GenConfig::from_yaml(&raw).with_context(|| format!("failed to parse configuration '{path}'"))
}
