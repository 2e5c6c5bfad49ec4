use crate::artifacts::walk::cursor::Cursor;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Moves: u8 {
        const QUIT = 0b0001;
        const RUN = 0b0010;
        const PREVIOUS = 0b0100;
        const NEXT = 0b1000;
    }
}

impl Moves {
    pub fn at(cursor: &Cursor) -> Self {
        let mut moves = Self::QUIT | Self::RUN;
        if !cursor.is_first() {
            moves |= Self::PREVIOUS;
        }
        if !cursor.is_last() {
            moves |= Self::NEXT;
        }
        moves
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Quit,
    Run,
    Previous,
    Next,
    /// Zero-based index into the changed files
    File(usize),
}

/// The options offered at one stop of the walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    moves: Moves,
    files: usize,
}

impl Menu {
    pub fn new(cursor: &Cursor, files: usize) -> Self {
        Self {
            moves: Moves::at(cursor),
            files,
        }
    }

    /// Option summary shown in the prompt, e.g. `qrpn1-12`
    pub fn options(&self) -> String {
        let mut options = String::new();
        for (key, flag) in [
            ('q', Moves::QUIT),
            ('r', Moves::RUN),
            ('p', Moves::PREVIOUS),
            ('n', Moves::NEXT),
        ] {
            if self.moves.contains(flag) {
                options.push(key);
            }
        }

        match self.files {
            0 => {}
            1 => options.push('1'),
            n => options.push_str(&format!("1-{n}")),
        }

        options
    }

    /// Interpret one whitespace-delimited token of user input
    ///
    /// Letters are matched on their first character; numbers must name one
    /// of the listed files. Anything else yields `None`.
    pub fn parse(&self, token: &str) -> Option<Choice> {
        let token = token.trim();
        let first = token.chars().next()?;

        if first.is_ascii_digit() {
            let index = token.parse::<usize>().ok()?;
            return (1..=self.files)
                .contains(&index)
                .then(|| Choice::File(index - 1));
        }

        let (flag, choice) = match first.to_ascii_lowercase() {
            'q' => (Moves::QUIT, Choice::Quit),
            'r' => (Moves::RUN, Choice::Run),
            'p' => (Moves::PREVIOUS, Choice::Previous),
            'n' => (Moves::NEXT, Choice::Next),
            _ => return None,
        };

        self.moves.contains(flag).then_some(choice)
    }
}
