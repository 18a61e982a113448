use actix::{Actor, Addr};
use std::io::{self, BufRead};
use std::iter;
use std::thread;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    actors::{GetView, KeyPress, OverlayActor},
    config::{Config, OutputFormat},
    session::Key,
    view::OverlayView,
    words::WordList,
    Error,
};

/// Turn one input line into keystrokes.
///
/// `/new`, `/hide`, `/quit` and `/back` are hotkeys and an empty line is Enter.
/// `abc?` edits the buffer to `abc` without submitting, anything else is edited in
/// and submitted. `typed` is the buffer the overlay currently shows.
pub fn parse_line(line: &str, typed: &str) -> Vec<Key> {
    match line.trim() {
        "/new" => vec![Key::NewRound],
        "/hide" => vec![Key::ToggleVisibility],
        "/quit" => vec![Key::Quit],
        "/back" => vec![Key::Backspace],
        "" => vec![Key::Enter],
        text => match text.strip_suffix('?') {
            Some(partial) => edit_keys(typed, partial),
            None => {
                let mut keys = edit_keys(typed, text);
                keys.push(Key::Enter);
                keys
            }
        },
    }
}

/// Backspace down to the shared prefix, then type the rest
fn edit_keys(current: &str, target: &str) -> Vec<Key> {
    let target = target.trim().to_ascii_lowercase();
    let common = current
        .chars()
        .zip(target.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let backspaces = current.chars().count() - common;

    iter::repeat(Key::Backspace)
        .take(backspaces)
        .chain(target.chars().skip(common).map(Key::Letter))
        .collect()
}

/// Read lines on a plain thread and hand them over through a channel.
///
/// A read blocked on the terminal never holds up runtime shutdown, so ctrl-c exits
/// without waiting for one more line.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::Receiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    thread::spawn(move || {
        for line in reader.lines() {
            // Receiver gone means the driver has stopped
            if tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    rx
}

fn render(view: &OverlayView, format: OutputFormat) -> crate::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", view),
        OutputFormat::Json => println!("{}", serde_json::to_string(view)?),
    }
    Ok(())
}

async fn press(overlay: &Addr<OverlayActor>, key: Key) -> crate::Result<Option<OverlayView>> {
    overlay
        .send(KeyPress(key))
        .await
        .map_err(|e| Error::Actor(format!("Overlay did not take key {:?}: {}", key, e)))
}

pub async fn run(config: Config) -> miette::Result<()> {
    info!("Setting up overlay session");

    let word_list = WordList::load_first_available(&config.wordlist_paths);
    let overlay = OverlayActor::new(word_list, config.suggestion_limit).start();

    let view = overlay
        .send(GetView)
        .await
        .map_err(|e| Error::Actor(format!("Failed to read overlay view: {}", e)))?;
    render(&view, config.output_format)?;

    // Buffer as last shown, used to turn whole lines into edits
    let mut typed = view.typed;

    let mut lines = spawn_line_reader(io::BufReader::new(io::stdin()));
    while let Some(line) = lines.recv().await {
        let line = line.map_err(Error::Io)?;
        let keys = parse_line(&line, &typed);
        debug!("Line {:?} became {} keys", line, keys.len());

        let quitting = keys.contains(&Key::Quit);

        let mut latest = None;
        for key in keys {
            latest = press(&overlay, key).await?;
        }

        if let Some(view) = latest {
            render(&view, config.output_format)?;
            typed = view.typed;
        }

        if quitting {
            break;
        }
    }

    info!("Input closed, overlay shutting down");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotkeys() {
        assert_eq!(parse_line("/new", ""), vec![Key::NewRound]);
        assert_eq!(parse_line(" /hide ", ""), vec![Key::ToggleVisibility]);
        assert_eq!(parse_line("/quit", "t"), vec![Key::Quit]);
        assert_eq!(parse_line("/back", "t"), vec![Key::Backspace]);
        assert_eq!(parse_line("", "tea"), vec![Key::Enter]);
    }

    #[test]
    fn test_word_line_extends_buffer() {
        assert_eq!(
            parse_line("tea", "t"),
            vec![Key::Letter('e'), Key::Letter('a'), Key::Enter]
        );
    }

    #[test]
    fn test_word_line_replaces_buffer() {
        assert_eq!(
            parse_line("Tan", "tea"),
            vec![
                Key::Backspace,
                Key::Backspace,
                Key::Letter('a'),
                Key::Letter('n'),
                Key::Enter
            ]
        );
    }

    /// Reader that blocks until its sender is dropped, like an idle terminal
    struct IdleReader(std::sync::mpsc::Receiver<()>);

    impl io::Read for IdleReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            let _ = self.0.recv();
            Ok(0)
        }
    }

    #[actix_rt::test]
    async fn test_line_reader_forwards_lines() {
        let input = io::Cursor::new("cat\n/new\n");
        let mut lines = spawn_line_reader(input);

        assert_eq!(lines.recv().await.unwrap().unwrap(), "cat");
        assert_eq!(lines.recv().await.unwrap().unwrap(), "/new");
        assert!(lines.recv().await.is_none());
    }

    #[test]
    fn test_idle_reader_does_not_block_shutdown() {
        let (release, idle) = std::sync::mpsc::channel();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let mut lines = runtime.block_on(async {
            spawn_line_reader(io::BufReader::new(IdleReader(idle)))
        });
        assert!(lines.try_recv().is_err());

        // Returns even though the reader thread is still waiting for input
        drop(runtime);

        drop(release);
        assert!(lines.blocking_recv().is_none());
    }

    #[test]
    fn test_preview_line_does_not_submit() {
        assert_eq!(parse_line("ti?", "t"), vec![Key::Letter('i')]);
        assert_eq!(parse_line("?", "ti"), vec![Key::Backspace, Key::Backspace]);
    }
}
