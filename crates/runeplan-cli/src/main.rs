// Copyright (c) 2025 Runeplan Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line surface for the runeplan build planner.
//!
//! Collects the rune budget and the already-built station counts, builds
//! a validated model, runs the planner, and prints the report. All input
//! validation happens here, before the core is invoked: the rune flags are
//! unsigned so negative amounts are unrepresentable, and `--built` pairs
//! are parsed and checked against the catalog.

use anyhow::Context;
use clap::Parser;
use runeplan_model::model::ModelBuilder;
use runeplan_model::rune::ResourceVector;
use runeplan_solver::solver::Planner;

/// Plan rune spending for maximum restart bonus.
#[derive(Parser, Debug)]
#[command(name = "runeplan", version, about)]
struct Args {
    /// MANA runes available to spend.
    #[arg(long, default_value_t = 0)]
    mana: u64,

    /// POISON runes available to spend.
    #[arg(long, default_value_t = 0)]
    poison: u64,

    /// BLOOD runes available to spend.
    #[arg(long, default_value_t = 0)]
    blood: u64,

    /// MOON runes available to spend.
    #[arg(long, default_value_t = 0)]
    moon: u64,

    /// DARK runes available to spend.
    #[arg(long, default_value_t = 0)]
    dark: u64,

    /// Already-built units of a station, as NAME=COUNT. Repeatable.
    #[arg(long = "built", value_name = "NAME=COUNT", value_parser = parse_built)]
    built: Vec<(String, u64)>,

    /// Print search statistics after the report.
    #[arg(long)]
    stats: bool,
}

/// Parses one `NAME=COUNT` pair.
fn parse_built(raw: &str) -> Result<(String, u64), String> {
    let (name, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=COUNT, got '{}'", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing station name in '{}'", raw));
    }

    let count: u64 = count
        .trim()
        .parse()
        .map_err(|_| format!("count in '{}' must be a non-negative integer", raw))?;

    Ok((name.to_string(), count))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let budget =
        ResourceVector::new([args.mana, args.poison, args.blood, args.moon, args.dark]);
    let mut builder = ModelBuilder::<u64>::new().budget(budget);
    for (name, count) in &args.built {
        builder = builder.built(name.clone(), *count);
    }
    let model = builder.build().context("invalid built counts")?;

    let report = Planner::new().plan(&model);
    print!("{}", report);

    if args.stats {
        println!();
        print!("{}", report.statistics());
    }

    Ok(())
}
