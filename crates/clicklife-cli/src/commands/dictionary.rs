//! Dictionary command implementation.

use crate::cli::{DictionaryAction, DictionaryArgs};
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the dictionary command.
pub fn execute_dictionary(
    args: DictionaryArgs,
    session: &Session,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        DictionaryAction::List => println!("{}", formatter.dictionary(&session.table())?),
        DictionaryAction::Count => println!("{}", formatter.count(&session.table())?),
        DictionaryAction::Clear => {
            session.clear()?;
            println!("{}", formatter.success("Stored dictionary cleared"));
        }
    }
    Ok(())
}
