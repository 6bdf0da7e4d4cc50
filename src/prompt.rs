//! Interactive selection of a scanned video file.
//!
//! The prompt is line-oriented and generic over its reader and writer so the
//! re-prompt loop can be exercised in tests with in-memory buffers.

use std::io::{BufRead, Error as IoError, ErrorKind, Write};

use crate::error::TailframesError;
use crate::scan::VideoFile;

/// Present the file listing and read a validated numeric selection.
///
/// Prints one `N: name` line per file, then prompts until the user enters a
/// number between 1 and the number of files. Non-numeric input and
/// out-of-range numbers are rejected with a short message and a re-prompt;
/// the loop never terminates the process.
///
/// # Errors
///
/// Returns [`TailframesError::Io`] when the reader reaches end-of-input
/// before a valid selection is made, or when the terminal cannot be written
/// to.
pub fn select_video<'a, R, W>(
    files: &'a [VideoFile],
    mut input: R,
    mut output: W,
) -> Result<&'a VideoFile, TailframesError>
where
    R: BufRead,
    W: Write,
{
    for file in files {
        writeln!(output, "{}: {}", file.index, file.name)?;
    }

    loop {
        write!(output, "Select a video file by number: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(TailframesError::Io(IoError::new(
                ErrorKind::UnexpectedEof,
                "input closed before a selection was made",
            )));
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=files.len()).contains(&choice) => {
                log::debug!("selected {}: {}", choice, files[choice - 1].name);
                return Ok(&files[choice - 1]);
            }
            Ok(_) => writeln!(output, "Invalid choice, try again.")?,
            Err(_) => writeln!(output, "Invalid input, please enter a number.")?,
        }
    }
}
