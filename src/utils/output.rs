use crate::core::data::{Quote, QuoteDatabase};
use crate::utils::format::truncate_string;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn quote(text: &str) -> ColoredString {
        text.bright_cyan().italic()
    }

    pub fn attribution(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn topic(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    /// Print one quote as a card: the text in quotation marks, the
    /// attribution on its own line when present.
    pub fn print_quote_card(quote: &Quote) {
        println!("  “{}”", Self::quote(&quote.text));
        if let Some(author) = &quote.author {
            println!("      {} {}", Self::muted("—"), Self::attribution(author));
        }
    }

    /// Print a batch of sampled quotes with separators between cards.
    pub fn print_quote_cards(quotes: &[Quote]) {
        println!();
        for (i, quote) in quotes.iter().enumerate() {
            Self::print_quote_card(quote);
            if i < quotes.len() - 1 {
                println!("{}", Self::muted(&Self::separator()));
            }
        }
        println!();
    }

    /// Print the available topic shortcuts as a single line.
    pub fn print_topic_shortcuts(db: &QuoteDatabase) {
        let topics: Vec<String> = db.keys().map(|k| Self::topic(k).to_string()).collect();
        println!("{} {}", Self::muted("Popular topics:"), topics.join(", "));
    }

    /// Print every topic with its quote count and a short preview.
    pub fn print_topic_list(db: &QuoteDatabase) {
        println!("📚 Available Topics ({})", db.len());
        println!("{}", Self::header_separator());
        for (key, quotes) in db.iter() {
            let count = format!("{} quote{}", quotes.len(), if quotes.len() == 1 { "" } else { "s" });
            match quotes.first() {
                Some(first) => println!(
                    "  {} ({}): {}",
                    Self::topic(key),
                    Self::muted(&count),
                    Self::muted(&truncate_string(first, 60))
                ),
                None => println!("  {} ({})", Self::topic(key), Self::muted(&count)),
            }
        }
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

pub fn print_info(message: &str) {
    println!("ℹ️  {}", OutputStyle::info(message));
}

pub fn handle_not_found(item_type: &str, search_term: &str) {
    let msg = format!("{} '{}' not found", item_type, search_term);
    println!("⚠️  {}", OutputStyle::warning(&msg));
}

pub fn handle_empty_list(item_type: &str) {
    let msg = format!("No {} found", item_type);
    println!("{}", OutputStyle::muted(&msg));
}
