use std::{
    fmt::Display,
    fs,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{anyhow, Context};

use crate::pbar::{get_spin_pb, DEFAULT_INTERVAL};

/// Anything that carries a one dimensional location.
///
/// The median algorithms only ever look at this key, so they can run over
/// owned merchants as well as over borrowed ones.
pub trait Located {
    fn location(&self) -> i64;
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> i64 {
        (**self).location()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merchant {
    pub name: String,
    pub location: i64,
}

impl Merchant {
    pub fn new<S: Into<String>>(name: S, location: i64) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

impl Located for Merchant {
    fn location(&self) -> i64 {
        self.location
    }
}

impl Display for Merchant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Merchant(name='{}', location={})",
            self.name, self.location
        )
    }
}

/// One merchant per line: `<name> <location>`. Blank lines are skipped,
/// tokens after the location are ignored.
pub fn parse_merchants<R: BufRead>(reader: R) -> anyhow::Result<Vec<Merchant>> {
    let mut merchants = vec![];
    for (idx, line) in reader.lines().enumerate() {
        let lineno = idx + 1;
        let line = line.with_context(|| format!("read line {lineno} error"))?;
        let mut fields = line.split_whitespace();
        let name = match fields.next() {
            Some(name) => name,
            None => continue,
        };
        let location = fields
            .next()
            .ok_or_else(|| anyhow!("line {lineno}: missing location for '{name}'"))?;
        let location = location.parse::<i64>().with_context(|| {
            format!("line {lineno}: invalid location '{location}' for '{name}'")
        })?;

        merchants.push(Merchant::new(name, location));
    }

    Ok(merchants)
}

pub fn read_merchants<P: AsRef<Path>>(filepath: P) -> anyhow::Result<Vec<Merchant>> {
    let filepath = filepath.as_ref();
    let file = fs::File::open(filepath)
        .with_context(|| format!("open merchant file error. {}", filepath.display()))?;

    let pb = get_spin_pb(format!("reading {}", filepath.display()), DEFAULT_INTERVAL);
    let merchants = parse_merchants(BufReader::new(pb.wrap_read(file)))
        .with_context(|| format!("parse merchant file error. {}", filepath.display()))?;
    pb.finish_and_clear();

    tracing::debug!(
        "loaded {} merchants from {}",
        merchants.len(),
        filepath.display()
    );
    Ok(merchants)
}
