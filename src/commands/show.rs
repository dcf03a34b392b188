use crate::cli::ShowArgs;
use crate::config::Config;
use crate::core::data::Quote;
use crate::core::resolver;
use crate::store::QuoteStore;
use crate::utils::{OutputStyle, handle_not_found, print_info, print_warning};
use anyhow::Result;

/// Print every quote stored under the resolved topic. Unlike generate,
/// this never falls back to the default topic: an unmatched input is
/// reported as not found.
pub async fn handle_show_command(config: Config, args: &ShowArgs) -> Result<()> {
    let store = QuoteStore::new(config);
    let outcome = store.load().await;

    if let Some(notice) = &outcome.notice {
        print_info(notice);
    }

    let normalized = resolver::normalize(&args.topic);
    if normalized.is_empty() {
        print_warning("Please enter a topic");
        return Ok(());
    }

    match resolver::find_topic(&normalized, &outcome.db) {
        Some((key, quotes)) => {
            println!(
                "📚 {} ({} quote{})",
                OutputStyle::topic(key),
                quotes.len(),
                if quotes.len() == 1 { "" } else { "s" }
            );
            println!("{}", OutputStyle::header_separator());
            for raw in quotes {
                OutputStyle::print_quote_card(&Quote::parse(raw));
            }
        }
        None => handle_not_found("Topic", &args.topic),
    }

    Ok(())
}
