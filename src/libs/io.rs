use std::io::{BufWriter, Write};

/// Buffered output to stdout, or to a newly created file.
///
/// ```
/// use std::io::Write;
/// let mut writer = swalign::writer("stdout").unwrap();
/// writer.write_all(b"").unwrap();
/// ```
pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .map_err(|why| anyhow::anyhow!("could not create {}: {}", output, why))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}
