//! Core utilities and shared types
//!
//! This module contains the pager plumbing shared by the commands.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it. Rendered diffs are raw bytes; invalid UTF-8 is replaced rather
/// than rejected so a stray binary byte can't abort the page.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writer.write_all(&rendered)?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl PagerWriter {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Whether output should go through the pager at all
pub fn should_page(requested: bool) -> bool {
    requested && io::stdout().is_terminal() && io::stdin().is_terminal()
}

/// Show `output` in the pager, blocking until the user quits it
pub fn page_all(output: &[u8], prompt: &str) -> anyhow::Result<()> {
    let pager = Pager::new();
    pager.set_prompt(prompt)?;

    let mut writer = PagerWriter::new(pager.clone());
    writer.write_all(output)?;

    minus::page_all(writer.pager().clone())?;
    Ok(())
}
