//! Bounded line input.

use std::io::{self, BufRead, Read};

/// Reads one line from `reader`, keeping at most `limit` bytes of it.
///
/// The trailing newline is stripped. When a line is longer than `limit`,
/// the first `limit` bytes are returned and the remainder of the line is
/// consumed and discarded, so the next call starts on a fresh line. Input
/// that is not valid UTF-8 is converted lossily. Returns `Ok(None)` at end
/// of input.
pub fn read_line_bounded<R: BufRead>(reader: &mut R, limit: usize) -> io::Result<Option<String>> {
    let mut raw = Vec::new();
    let n = reader.by_ref().take(limit as u64).read_until(b'\n', &mut raw)?;
    if n == 0 {
        return Ok(None);
    }
    if raw.last() == Some(&b'\n') {
        raw.pop();
    } else {
        // Hit the limit mid-line (or EOF): drop the rest of the line.
        drain_line(reader)?;
    }
    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}

fn drain_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let (done, used) = match reader.fill_buf()? {
            [] => (true, 0),
            buf => match buf.iter().position(|&b| b == b'\n') {
                Some(i) => (true, i + 1),
                None => (false, buf.len()),
            },
        };
        reader.consume(used);
        if done {
            return Ok(());
        }
    }
}
