//! Reads external commands, one per line, from any async reader.
use crate::errors::{DeskError, Result};
use crate::models::WindowId;
use crate::Command;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;

/// Holds a receiver fed by a task reading the source line by line.
#[derive(Debug)]
pub struct CommandPipe {
    rx: mpsc::UnboundedReceiver<Command>,
}

impl Drop for CommandPipe {
    fn drop(&mut self) {
        self.rx.close();
    }
}

impl CommandPipe {
    /// Start listening to `source`, e.g. stdin. The pipe closes once the
    /// source reaches EOF.
    pub fn new<R>(source: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            if let Err(err) = read_from_source(source, &tx).await {
                tracing::error!("Command source failed: {}", err);
            }
        });
        Self { rx }
    }

    pub async fn read_command(&mut self) -> Option<Command> {
        self.rx.recv().await
    }
}

async fn read_from_source<R>(source: R, tx: &mpsc::UnboundedSender<Command>) -> Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(source).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_command(line) {
            Ok(cmd) => {
                if tx.send(cmd).is_err() {
                    // Nobody is listening anymore.
                    return Ok(());
                }
            }
            Err(err) => tracing::error!("An error occurred while parsing the command: {}", err),
        }
    }
    Ok(())
}

/// Parse a single command line such as `OpenWindow about` or `DragTo 120 80`.
///
/// # Errors
///
/// Will error with `InvalidCommand` if a known command is missing an argument
/// or an argument is malformed. Unknown commands parse as `Command::Other`.
pub fn parse_command(s: &str) -> Result<Command> {
    let (head, rest) = s.split_once(' ').unwrap_or((s, ""));
    let rest = rest.trim();
    match head {
        "OpenWindow" => build_window(rest).map(Command::OpenWindow),
        "CloseWindow" => build_window(rest).map(Command::CloseWindow),
        "MinimizeWindow" => build_window(rest).map(Command::MinimizeWindow),
        "RestoreWindow" => build_window(rest).map(Command::RestoreWindow),
        "ToggleMaximized" => build_window(rest).map(Command::ToggleMaximized),
        "FocusWindow" => build_window(rest).map(Command::FocusWindow),
        "StartDrag" => build_start_drag(rest),
        "DragTo" => build_point(rest).map(|(x, y)| Command::DragTo { x, y }),
        "EndDrag" => Ok(Command::EndDrag),
        "TaskbarClick" => build_window(rest).map(Command::TaskbarClick),
        "IconClick" => build_window(rest).map(Command::IconClick),
        "IconDoubleClick" => build_window(rest).map(Command::IconDoubleClick),
        "EndTask" => build_window(rest).map(Command::EndTask),
        "OpenTaskManager" => Ok(Command::OpenTaskManager),
        _ => Ok(Command::Other(s.into())),
    }
}

fn build_window(raw: &str) -> Result<WindowId> {
    if raw.is_empty() || raw.contains(char::is_whitespace) {
        return Err(DeskError::InvalidCommand(format!(
            "expected a single window id, got {raw:?}"
        )));
    }
    Ok(WindowId::from(raw))
}

fn build_start_drag(raw: &str) -> Result<Command> {
    let (window, point) = raw
        .split_once(' ')
        .ok_or_else(|| DeskError::InvalidCommand("missing pointer position".to_owned()))?;
    let (x, y) = build_point(point)?;
    Ok(Command::StartDrag {
        window: build_window(window)?,
        x,
        y,
    })
}

fn build_point(raw: &str) -> Result<(i32, i32)> {
    let mut parts = raw.split_whitespace().map(str::parse::<i32>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => Ok((x, y)),
        _ => Err(DeskError::InvalidCommand(format!(
            "expected two integer coordinates, got {raw:?}"
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn read_good_command() {
        let (mut writer, reader) = tokio::io::duplex(64);
        let mut command_pipe = CommandPipe::new(reader);

        writer.write_all(b"OpenWindow about\n").await.unwrap();
        writer.flush().await.unwrap();
        assert_eq!(
            Command::OpenWindow("about".into()),
            command_pipe.read_command().await.unwrap()
        );
    }

    #[tokio::test]
    async fn read_bad_command() {
        let (mut writer, reader) = tokio::io::duplex(64);
        let mut command_pipe = CommandPipe::new(reader);

        writer.write_all(b"Hello World\n").await.unwrap();
        assert_eq!(
            Command::Other("Hello World".to_string()),
            command_pipe.read_command().await.unwrap()
        );
    }

    #[tokio::test]
    async fn malformed_lines_are_skipped() {
        let (mut writer, reader) = tokio::io::duplex(128);
        let mut command_pipe = CommandPipe::new(reader);

        writer
            .write_all(b"DragTo 10\n\nStartDrag cmd 5 6\n")
            .await
            .unwrap();
        assert_eq!(
            Command::StartDrag {
                window: "cmd".into(),
                x: 5,
                y: 6
            },
            command_pipe.read_command().await.unwrap()
        );
    }

    #[tokio::test]
    async fn pipe_closes_at_end_of_input() {
        let (mut writer, reader) = tokio::io::duplex(64);
        let mut command_pipe = CommandPipe::new(reader);

        writer.write_all(b"EndDrag\n").await.unwrap();
        drop(writer);
        assert_eq!(Some(Command::EndDrag), command_pipe.read_command().await);
        assert_eq!(None, command_pipe.read_command().await);
    }

    #[test]
    fn build_commands_with_arguments() {
        assert_eq!(
            parse_command("DragTo -40 25").unwrap(),
            Command::DragTo { x: -40, y: 25 }
        );
        assert_eq!(
            parse_command("TaskbarClick notepad").unwrap(),
            Command::TaskbarClick("notepad".into())
        );
        assert_eq!(parse_command("OpenTaskManager").unwrap(), Command::OpenTaskManager);
    }

    #[test]
    fn missing_arguments_are_errors() {
        assert!(parse_command("OpenWindow").is_err());
        assert!(parse_command("OpenWindow about cmd").is_err());
        assert!(parse_command("StartDrag about").is_err());
        assert!(parse_command("DragTo x y").is_err());
        assert!(parse_command("DragTo 1 2 3").is_err());
    }
}
