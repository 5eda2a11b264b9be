use anyhow::bail;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use report::{dump_report, Comparison};
use search::{search, SearchType};
use tracing_subscriber::EnvFilter;

mod cli;
mod distance;
mod median;
mod merchant;
mod pbar;
mod report;
mod search;

fn pivot_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn load(input: &str) -> anyhow::Result<Vec<merchant::Merchant>> {
    let merchants = merchant::read_merchants(input)?;
    if merchants.is_empty() {
        bail!("no merchants in {}", input);
    }
    tracing::info!("{} merchants loaded from {}", merchants.len(), input);
    Ok(merchants)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Cli::parse();
    let output_dir = args.build_output_dir()?;

    let text = match &args.commands {
        cli::Subcommands::Slow(param) => {
            let merchants = load(&param.input)?;
            let report = search(&merchants, SearchType::Slow, &mut rand::rng())?;
            report.to_string()
        }
        cli::Subcommands::Fast(param) => {
            let merchants = load(&param.input)?;
            let report = search(&merchants, SearchType::Fast, &mut pivot_rng(param.seed))?;
            report.to_string()
        }
        cli::Subcommands::Compare(param) => {
            let merchants = load(&param.input)?;
            let mut rng = pivot_rng(param.seed);
            let slow = search(&merchants, SearchType::Slow, &mut rng)?;
            let fast = search(&merchants, SearchType::Fast, &mut rng)?;
            if slow.optimal.location != fast.optimal.location {
                bail!(
                    "slow and fast disagree: {} vs {}",
                    slow.optimal,
                    fast.optimal
                );
            }
            Comparison { slow, fast }.to_string()
        }
    };

    println!("{}", text);
    if let Some(output_dir) = output_dir {
        dump_report(output_dir, &text)?;
    }

    Ok(())
}
