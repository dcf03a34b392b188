use crate::cli::InitArgs;
use crate::config::Config;
use crate::store::QuoteStore;
use crate::utils::{print_success, report_error};
use anyhow::Result;

pub fn handle_init_command(config: Config, args: &InitArgs) -> Result<()> {
    let store = QuoteStore::new(config);

    match store.init(args.force) {
        Ok(path) => {
            print_success(&format!("Seeded quotes file: {}", path.display()));
        }
        Err(err) => {
            report_error(&err);
        }
    }

    Ok(())
}
