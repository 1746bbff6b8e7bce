//! Output line rendering: command segments joined by `|`

use std::io::Write;

use crate::core::error::Result;
use crate::policy::command::Decision;

/// Render one round's decisions as a single protocol line (no newline)
pub fn render_batch(batch: &[Decision], annotate: bool) -> String {
    batch
        .iter()
        .map(|d| d.command.render(annotate.then(|| d.intent.label())))
        .collect::<Vec<_>>()
        .join("|")
}

/// Write one round's line and flush so the referee sees it immediately
pub fn write_batch<W: Write>(out: &mut W, batch: &[Decision], annotate: bool) -> Result<String> {
    let line = render_batch(batch, annotate);
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(line)
}
