//! Line-oriented console front end.
//!
//! Each input line is one UI event: typing in the search box, submitting the add
//! form, or pressing one of the buttons.

use crate::app::{BlogApp, Flow};
use crate::error::AtomicBlogError;

use std::io::Write;

use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search box changed
    Search(String),

    /// Add form submitted
    SubmitPost { title: String, body: String },

    /// "Clear posts" pressed
    ClearPosts,

    /// "Show/Hide archive posts" pressed
    ToggleArchive,

    /// Browse archive page (1-based)
    ArchivePage(usize),

    /// "Add as new post" pressed on archive post (1-based)
    CopyArchivePost(usize),

    /// Dark mode button pressed
    ToggleDarkMode,

    /// Re-render the post list
    List,

    Help,

    Quit,
}

/// Map one console line to a UI event.
///
/// # Errors
///
/// Returns [`AtomicBlogError::InvalidInput`] for unknown commands, unexpected
/// arguments, or archive numbers that are not positive integers.
pub fn parse_event(line: &str) -> Result<UiEvent, AtomicBlogError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

    match command {
        "" | "list" => no_arguments(command, rest, UiEvent::List),
        // The rest of the line is the query, spaces included.
        "search" => Ok(UiEvent::Search(rest.to_string())),
        "add" => {
            let (title, body) = rest.split_once('|').unwrap_or((rest, ""));
            Ok(UiEvent::SubmitPost {
                title: title.trim().to_string(),
                body: body.trim().to_string(),
            })
        }
        "clear" => no_arguments(command, rest, UiEvent::ClearPosts),
        "archive" => parse_archive(rest),
        "dark" => no_arguments(command, rest, UiEvent::ToggleDarkMode),
        "help" | "?" => Ok(UiEvent::Help),
        "quit" | "exit" => Ok(UiEvent::Quit),
        other => Err(AtomicBlogError::invalid_input(format!(
            "Unknown command `{other}`. Type `help` for the list of commands."
        ))),
    }
}

fn no_arguments(command: &str, rest: &str, event: UiEvent) -> Result<UiEvent, AtomicBlogError> {
    if rest.trim().is_empty() {
        Ok(event)
    } else {
        Err(AtomicBlogError::invalid_input(format!(
            "`{command}` takes no arguments"
        )))
    }
}

fn parse_archive(rest: &str) -> Result<UiEvent, AtomicBlogError> {
    let parts: Vec<&str> = rest.split_whitespace().collect();

    match parts.as_slice() {
        [] => Ok(UiEvent::ToggleArchive),
        ["page", number] => Ok(UiEvent::ArchivePage(parse_position(number)?)),
        ["add", number] => Ok(UiEvent::CopyArchivePost(parse_position(number)?)),
        _ => Err(AtomicBlogError::invalid_input(
            "Usage: `archive`, `archive page <n>` or `archive add <n>`",
        )),
    }
}

fn parse_position(text: &str) -> Result<usize, AtomicBlogError> {
    match text.parse::<usize>() {
        Ok(0) | Err(_) => Err(AtomicBlogError::invalid_input(format!(
            "`{text}` is not a valid number (numbers start at 1)"
        ))),
        Ok(n) => Ok(n),
    }
}

/// Read events from `input` until `quit` or end of input, writing output to `output`.
///
/// Invalid lines and failed events are reported on `output` and the loop continues.
///
/// # Errors
///
/// Returns [`AtomicBlogError::App`] if reading input or writing output fails.
pub async fn run<R, W>(app: &mut BlogApp, input: R, output: &mut W) -> Result<(), AtomicBlogError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(output, "{}", app.render_page())?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let outcome = match parse_event(&line) {
            Ok(event) => app.handle_event(event).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Flow::Continue(text)) => writeln!(output, "{text}")?,
            Ok(Flow::Quit) => {
                info!("Quit requested");
                return Ok(());
            }
            Err(e) => {
                warn!("{}", e);
                writeln!(output, "⚠️  {}", e.message())?;
            }
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    info!("Input closed");
    Ok(())
}
