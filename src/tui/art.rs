//! ASCII art shown beside the timer.
//!
//! Each picture is a fixed set of lines plus colour overlays. An overlay
//! recolours `len` characters of line `row` starting at column `col`; later
//! overlays win where they overlap.

/// A coloured region within a picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    /// Line within the picture.
    pub row: usize,
    /// First character column.
    pub col: usize,
    /// Number of characters.
    pub len: usize,
    /// Palette colour name.
    pub color: &'static str,
}

/// A named picture.
#[derive(Debug, Clone, Copy)]
pub struct Art {
    /// Name used for lookup and config.
    pub name: &'static str,
    /// Picture lines, top to bottom.
    pub lines: &'static [&'static str],
    /// Coloured regions drawn over the base picture.
    pub overlays: &'static [Overlay],
}

const fn overlay(row: usize, col: usize, len: usize, color: &'static str) -> Overlay {
    Overlay {
        row,
        col,
        len,
        color,
    }
}

/// All pictures in cycling order.
pub static ARTS: &[Art] = &[
    Art {
        name: "bunny",
        lines: &[
            "    .---.",
            r"   /.@.@.\",
            "  ( (*^*) )",
            "   '-----'",
            r"    /   \",
            r"   /     \",
        ],
        // eyes, nose
        overlays: &[overlay(1, 2, 5, "blue"), overlay(2, 3, 3, "magenta")],
    },
    Art {
        name: "coffee",
        lines: &[
            "    )  (",
            "   (   ) )",
            "    ) ( (",
            "  ______)_",
            " |       |",
            r" |/\/\/\/|",
            r" |/\/\/\/|",
            " |_______|",
            "  '-----'",
        ],
        // cup, steam
        overlays: &[
            overlay(4, 1, 7, "yellow"),
            overlay(5, 1, 7, "yellow"),
            overlay(6, 1, 7, "yellow"),
            overlay(0, 4, 3, "cyan"),
        ],
    },
    Art {
        name: "cat",
        lines: &[
            r"   /\___/\",
            "  (  o o  )",
            "  (  =^=  ) ",
            "   (______)",
            "     |  |",
            "     |  |",
            "    _|  |_",
        ],
        overlays: &[overlay(1, 3, 5, "green"), overlay(2, 3, 5, "magenta")],
    },
    Art {
        name: "terminal",
        lines: &[
            "  +--------+",
            "  |$_      |",
            "  |        |",
            "  | [====] |",
            "  |        |",
            "  +--------+",
        ],
        // progress bar, prompt
        overlays: &[overlay(3, 3, 6, "green"), overlay(1, 2, 2, "cyan")],
    },
    Art {
        name: "penguin",
        lines: &[
            "    .---.",
            r"   /     \",
            r"   \.@.@./",
            "  (  (^)  )",
            "   '-----'",
            r"   /     \",
            r"  /       \",
        ],
        // eyes, beak
        overlays: &[overlay(2, 3, 5, "blue"), overlay(3, 4, 3, "yellow")],
    },
];

/// Index of the art called `name`.
#[must_use]
pub fn find(name: &str) -> Option<usize> {
    ARTS.iter().position(|art| art.name == name)
}

/// Art at `index`, wrapping out-of-range indices.
#[must_use]
pub fn get(index: usize) -> &'static Art {
    &ARTS[index % ARTS.len()]
}

/// Index after `index`, wrapping to the first.
#[must_use]
pub fn next_index(index: usize) -> usize {
    (index + 1) % ARTS.len()
}

/// Index before `index`, wrapping to the last.
#[must_use]
pub fn previous_index(index: usize) -> usize {
    (index + ARTS.len() - 1) % ARTS.len()
}

impl Art {
    /// Widest line, in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Split line `row` into runs sharing a colour.
    ///
    /// `None` marks characters not covered by any overlay.
    #[must_use]
    pub fn segments(&self, row: usize) -> Vec<(String, Option<&'static str>)> {
        let Some(line) = self.lines.get(row) else {
            return Vec::new();
        };
        let chars: Vec<char> = line.chars().collect();
        let mut colors: Vec<Option<&'static str>> = vec![None; chars.len()];

        for ov in self.overlays.iter().filter(|ov| ov.row == row) {
            let end = (ov.col + ov.len).min(chars.len());
            for slot in colors.iter_mut().take(end).skip(ov.col) {
                *slot = Some(ov.color);
            }
        }

        let mut segments: Vec<(String, Option<&'static str>)> = Vec::new();
        for (ch, color) in chars.into_iter().zip(colors) {
            if let Some((text, last)) = segments.last_mut() {
                if *last == color {
                    text.push(ch);
                    continue;
                }
            }
            segments.push((ch.to_string(), color));
        }
        segments
    }
}
