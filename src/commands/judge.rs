use anyhow::Result;

use crate::cli::{Cli, JudgeArgs};
use crate::data::JudgeTable;
use crate::report::JudgeReport;

pub fn run(cli: &Cli, args: &JudgeArgs) -> Result<()> {
    if cli.verbose > 0 {
        tracing::info!(table = %args.table.display(), judge = %args.name, "[judge] building report");
    }

    let table = JudgeTable::load(&args.table)?;
    let report = JudgeReport::build(&table, &args.name, args.lang.into());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
