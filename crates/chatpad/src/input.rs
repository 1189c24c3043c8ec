use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Reads one line from `reader`, `None` at end of input.
///
/// Keep one reader for the whole session. Buffered bytes past the line
/// stay in the reader for the next call.
pub async fn read_line<R>(reader: &mut R) -> Option<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    match reader.read_line(&mut line).await {
        Ok(0) => None,
        Ok(_) => Some(line),
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
