use crate::utils::output::OutputStyle;
use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute, style,
    terminal::{self, ClearType},
};
use std::io::{self, Write};

pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

pub fn prompt_yes_no(question: &str) -> Result<bool> {
    let answer = prompt_input(&format!("{} [y/N]: ", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Prompt for a topic with tab-completion against the known topic keys.
///
/// Returns `None` when the user cancels with Esc or Ctrl-C.
pub fn prompt_topic(prompt: &str, suggestions: &[String]) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    terminal::enable_raw_mode()?;
    let result = read_topic_line(prompt, suggestions);
    terminal::disable_raw_mode()?;
    println!();

    result
}

fn read_topic_line(prompt: &str, suggestions: &[String]) -> Result<Option<String>> {
    let mut input = String::new();
    let mut suggestion = String::new();

    loop {
        if let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        {
            match code {
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    suggestion = completion_for(&input, suggestions);
                    redraw_line(prompt, &input, &suggestion)?;
                }
                KeyCode::Backspace => {
                    input.pop();
                    suggestion = completion_for(&input, suggestions);
                    redraw_line(prompt, &input, &suggestion)?;
                }
                KeyCode::Tab => {
                    if !suggestion.is_empty() {
                        input.push_str(&suggestion);
                        suggestion.clear();
                        redraw_line(prompt, &input, &suggestion)?;
                    }
                }
                KeyCode::Enter => {
                    return Ok(Some(input.trim().to_string()));
                }
                KeyCode::Esc => {
                    return Ok(None);
                }
                _ => {}
            }
        }
    }
}

/// The remainder of the first topic key that extends the current input.
fn completion_for(input: &str, suggestions: &[String]) -> String {
    if input.is_empty() {
        return String::new();
    }
    suggestions
        .iter()
        .find(|s| s.starts_with(input) && s.as_str() != input)
        .map(|s| s[input.len()..].to_string())
        .unwrap_or_default()
}

fn redraw_line(prompt: &str, input: &str, suggestion: &str) -> Result<()> {
    execute!(
        io::stdout(),
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        style::Print(prompt),
        style::Print(input),
        style::Print(OutputStyle::muted(suggestion))
    )?;
    if !suggestion.is_empty() {
        execute!(io::stdout(), cursor::MoveLeft(suggestion.len() as u16))?;
    }
    io::stdout().flush()?;
    Ok(())
}
