/// Position within a non-empty list of commits, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> anyhow::Result<Self> {
        if len == 0 {
            anyhow::bail!("No commits to walk");
        }

        Ok(Self { position: 0, len })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    pub fn is_last(&self) -> bool {
        self.position + 1 == self.len
    }

    pub fn previous(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    pub fn next(&mut self) {
        self.position = (self.position + 1).min(self.len - 1);
    }
}
