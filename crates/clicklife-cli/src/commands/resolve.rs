//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use clicklife_engine::resolve_with_stage;

/// Execute the resolve command.
pub fn execute_resolve(args: ResolveArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let table = session.table();
    let text = args.text.as_deref().unwrap_or(&args.plate);
    let resolution = resolve_with_stage(&args.plate, text, &table);
    let client = resolution.client_or(&session.engine().config().unknown_client);

    println!(
        "{}",
        formatter.resolution(&args.plate, client, resolution.stage)?
    );
    Ok(())
}
