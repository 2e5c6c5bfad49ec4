use crate::areas::git::Git;
use crate::artifacts::core::{page_all, should_page};
use std::cell::{RefCell, RefMut};
use std::io::{BufRead, Write};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn Write>>,
    reader: RefCell<Box<dyn BufRead>>,
    git: Git,
    paging: bool,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn Write>) -> anyhow::Result<Self> {
        Self::with_reader(
            path,
            writer,
            Box::new(std::io::BufReader::new(std::io::stdin())),
        )
    }

    pub fn with_reader(
        path: &str,
        writer: Box<dyn Write>,
        reader: Box<dyn BufRead>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        Ok(Repository {
            git: Git::new(path.clone().into_boxed_path()),
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            reader: RefCell::new(reader),
            paging: false,
        })
    }

    /// Route long output through the pager when attached to a terminal
    pub fn with_paging(mut self, requested: bool) -> Self {
        self.paging = should_page(requested);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn reader(&'_ self) -> RefMut<'_, Box<dyn BufRead>> {
        self.reader.borrow_mut()
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    /// Show a rendered page, through the pager or straight to the writer
    pub fn page(&self, output: &[u8], prompt: &str) -> anyhow::Result<()> {
        if self.paging {
            return page_all(output, prompt);
        }

        let mut writer = self.writer();
        writer.write_all(output)?;
        if !output.is_empty() && !output.ends_with(b"\n") {
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        Ok(())
    }
}
