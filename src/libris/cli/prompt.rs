use std::io::{self, BufRead, Write};

/// Print `label`, flush, and read one trimmed line from stdin.
/// `None` means stdin reached EOF.
pub fn read_line(label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut buf = String::new();
    let read = io::stdin().lock().read_line(&mut buf)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
