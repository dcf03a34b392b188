use crate::config::Config;
use crate::store::QuoteStore;
use crate::utils::{OutputStyle, handle_empty_list, print_info};
use anyhow::Result;

pub async fn handle_topics_command(config: Config) -> Result<()> {
    let store = QuoteStore::new(config);
    let outcome = store.load().await;

    if let Some(notice) = &outcome.notice {
        print_info(notice);
    }

    if outcome.db.is_empty() {
        handle_empty_list("topics");
        return Ok(());
    }

    OutputStyle::print_topic_list(&outcome.db);
    Ok(())
}
