use std::{fs, path};

use anyhow::{bail, Context};
use clap::{self, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[arg(long = "outdir", help = "also write meta.txt and report.txt here")]
    pub output_dir: Option<String>,
    #[arg(short = 'f', help = "remove everything in the ${outdir}")]
    pub force: bool,

    #[command(subcommand)]
    pub commands: Subcommands,
}

impl Cli {
    pub fn build_output_dir(&self) -> anyhow::Result<Option<&str>> {
        let output_dir = match &self.output_dir {
            Some(output_dir) => output_dir.as_str(),
            None => return Ok(None),
        };

        if path::Path::new(output_dir).exists() {
            if !self.force {
                bail!(
                    "output_dir: {} exists, use -f or change the output dir",
                    output_dir
                );
            }
            fs::remove_dir_all(output_dir)
                .with_context(|| format!("remove dir error {}", output_dir))?;
        }

        fs::create_dir_all(output_dir)
            .with_context(|| format!("create dir error. {}", output_dir))?;
        Ok(Some(output_dir))
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Subcommands {
    /// full quick sort, first element pivot
    Slow(SlowParams),
    /// quickselect, random pivot
    Fast(FastParams),
    /// run slow and fast on the same input
    Compare(FastParams),
}

#[derive(Debug, Args, Clone)]
pub struct SlowParams {
    #[arg(help = "one merchant per line: <name> <location>")]
    pub input: String,
}

#[derive(Debug, Args, Clone)]
pub struct FastParams {
    #[arg(help = "one merchant per line: <name> <location>")]
    pub input: String,

    #[arg(long = "seed", help = "seed for the pivot generator, default: random")]
    pub seed: Option<u64>,
}
