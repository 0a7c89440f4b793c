//! Terminal size provider.

use crossterm::terminal;
use tracing::warn;

use term_snake_engine::Geometry;

/// Reads the live terminal size through crossterm
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalGeometry;

impl Geometry for TerminalGeometry {
    fn size(&self) -> (u32, u32) {
        match terminal::size() {
            Ok((cols, rows)) => (u32::from(cols), u32::from(rows)),
            Err(err) => {
                // A zero-sized board trips the boundary check on the first tick.
                warn!(error = %err, "terminal size unavailable");
                (0, 0)
            }
        }
    }
}
