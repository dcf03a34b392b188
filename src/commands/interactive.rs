use crate::commands::generate::run_request;
use crate::config::Config;
use crate::session::Session;
use crate::store::QuoteStore;
use crate::utils::{OutputStyle, print_info, prompt_topic};
use anyhow::Result;

/// Read-submit loop: the terminal stand-in for the widget's text field,
/// submit button, and topic shortcut list.
pub async fn handle_interactive_command(config: Config) -> Result<()> {
    let delay_ms = config.general.delay_ms;
    let store = QuoteStore::new(config);
    let outcome = store.load().await;

    OutputStyle::print_header("✨ Quote Generator");
    println!(
        "{}",
        OutputStyle::muted("Enter a topic to discover inspiring quotes. Tab completes, Esc quits.")
    );
    println!();

    let mut session = Session::start(outcome);
    if let Some(notice) = session.notice() {
        print_info(notice.message());
    }
    OutputStyle::print_topic_shortcuts(session.db());
    println!();

    let topics: Vec<String> = session.db().keys().map(str::to_string).collect();
    let mut rng = rand::thread_rng();

    loop {
        let Some(input) = prompt_topic("topic> ", &topics)? else {
            break;
        };
        if matches!(input.as_str(), "quit" | "exit") {
            break;
        }
        run_request(&mut session, &input, delay_ms, &mut rng).await;
    }

    println!("{}", OutputStyle::muted("Goodbye!"));
    Ok(())
}
