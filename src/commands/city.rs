use anyhow::Result;

use crate::cli::{Cli, CityArgs};
use crate::data::JudgeTable;
use crate::report::CityReport;
use crate::ring::ColorTiers;

pub fn run(cli: &Cli, args: &CityArgs) -> Result<()> {
    if cli.verbose > 0 {
        tracing::info!(
            table = %args.table.display(),
            city = args.city.as_deref().unwrap_or("<default>"),
            sort = %args.sort,
            "[city] building report"
        );
    }

    let table = JudgeTable::load(&args.table)?;
    let report = CityReport::build(&table, args.city.as_deref(), &args.sort, args.lang.into(), &ColorTiers::from(args.tiers));
    if !report.found {
        tracing::warn!(city = %report.city_name, "city is not in the table");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
