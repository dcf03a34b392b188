use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::session::Session;
use crate::store::QuoteStore;
use crate::utils::{OutputStyle, print_info, print_warning};
use anyhow::Result;
use rand::Rng;
use std::time::Duration;

pub async fn handle_generate_command(config: Config, args: &GenerateArgs) -> Result<()> {
    let Some(topic) = &args.topic else {
        return crate::commands::interactive::handle_interactive_command(config).await;
    };

    let delay_ms = if args.no_delay {
        0
    } else {
        config.general.delay_ms
    };

    let store = QuoteStore::new(config);
    let mut session = Session::start(store.load().await);

    if let Some(notice) = session.notice() {
        print_info(notice.message());
    }

    let mut rng = rand::thread_rng();
    run_request(&mut session, topic, delay_ms, &mut rng).await;

    Ok(())
}

/// Drive one request through the session: mark it in flight, apply the
/// configured delay, then resolve and render.
pub(crate) async fn run_request<R: Rng>(
    session: &mut Session,
    topic: &str,
    delay_ms: u64,
    rng: &mut R,
) {
    if !session.begin_request(topic) {
        print_warning("A request is already running. Please wait.");
        return;
    }

    if delay_ms > 0 {
        println!("{}", OutputStyle::muted("Finding quotes..."));
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }

    match session.complete_request(rng) {
        Ok(quotes) => OutputStyle::print_quote_cards(quotes),
        Err(err) => print_warning(&err.to_string()),
    }
}
