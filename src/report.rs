use std::{
    fmt::Display,
    fs,
    io::{BufWriter, Write},
    path::Path,
    time::Duration,
};

use anyhow::Context;

use crate::{merchant::Merchant, search::SearchType};

#[derive(Debug, Clone)]
pub struct Report {
    pub search_type: SearchType,
    pub num_merchants: usize,
    pub elapsed: Duration,
    pub optimal: Merchant,
    pub total: u128,
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "Search Type: {}", self.search_type)?;
        writeln!(f, "Number of Merchants: {}", self.num_merchants)?;
        writeln!(f, "Elapsed Time: {:.10}", self.elapsed.as_secs_f64())?;
        writeln!(f, "Optimal Store Location: {}", self.optimal)?;
        write!(f, "Sum of Distances: {}", self.total)
    }
}

/// Slow and fast reports over the same input.
pub struct Comparison {
    pub slow: Report,
    pub fast: Report,
}

impl Comparison {
    pub fn speedup(&self) -> Option<f64> {
        let fast_secs = self.fast.elapsed.as_secs_f64();
        if fast_secs > 0.0 {
            Some(self.slow.elapsed.as_secs_f64() / fast_secs)
        } else {
            None
        }
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.slow)?;
        write!(f, "{}", self.fast)?;
        if let Some(speedup) = self.speedup() {
            write!(f, "\nSpeedup: {:.2}x", speedup)?;
        }
        Ok(())
    }
}

pub fn command_line_str() -> String {
    std::env::args().collect::<Vec<_>>().join(" ")
}

/// Writes `meta.txt` and `report.txt` into `output_dir`.
pub fn dump_report<R: Display>(output_dir: &str, report: &R) -> anyhow::Result<()> {
    let meta_path = Path::new(output_dir).join("meta.txt");
    let mut meta_file = fs::File::create(&meta_path)
        .with_context(|| format!("create file error. {}", meta_path.display()))?;
    meta_file.write_all(format!("version: {}\n", env!("CARGO_PKG_VERSION")).as_bytes())?;
    meta_file.write_all(format!("cmd_line: {}\n", command_line_str()).as_bytes())?;

    let report_path = Path::new(output_dir).join("report.txt");
    let report_file = fs::File::create(&report_path)
        .with_context(|| format!("create file error. {}", report_path.display()))?;
    let mut writer = BufWriter::new(report_file);
    writeln!(&mut writer, "{}", report)?;
    writer.flush()?;

    tracing::debug!("report written to {}", report_path.display());
    Ok(())
}
