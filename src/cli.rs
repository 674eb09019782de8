use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::agent::DockerfileGenerator;

pub const LANGUAGE_QUESTION: &str = "Enter the programming language (e.g., Python, Node.js, Java): ";
pub const RESULT_HEADER: &str = "\nGenerated Dockerfile:\n";

/// Ask for a language on `output`, read it from `input`, print the generated
/// Dockerfile.
///
/// Nothing past the question is written unless the model call succeeds.
pub async fn run<R, W>(generator: &DockerfileGenerator, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", LANGUAGE_QUESTION)?;
    output.flush()?;

    let language = read_language(input)?;
    let dockerfile = generator
        .generate(&language)
        .await
        .context("Dockerfile generation failed")?;

    writeln!(output, "{}", RESULT_HEADER)?;
    writeln!(output, "{}", dockerfile)?;
    output.flush()?;
    Ok(())
}

/// One line without its terminator. Fails when input is already at EOF.
pub fn read_language<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read language from stdin")?;
    if read == 0 {
        anyhow::bail!("No language given: stdin closed");
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
