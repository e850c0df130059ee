//! Haiku record and the compiled-in content table.

/// One poem: a title, three body lines and an attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Haiku {
    pub title: &'static str,
    pub body: [&'static str; 3],
    pub author: &'static str,
}

impl Haiku {
    /// Label shown in the list panel, e.g. "1. Ancient Pond"
    pub fn menu_label(&self, ordinal: usize) -> String {
        format!("{}. {}", ordinal, self.title)
    }
}

/// Content table, in display order
pub static HAIKUS: &[Haiku] = &[
    Haiku {
        title: "Ancient Pond",
        body: ["An ancient pond", "A frog jumps in", "The sound of water"],
        author: "— Matsuo Bashō",
    },
    Haiku {
        title: "First Autumn Morning",
        body: [
            "First autumn morning",
            "The mirror I stare into",
            "Shows my father's face",
        ],
        author: "— Murakami Kijo",
    },
    Haiku {
        title: "Terminal Love",
        body: [
            "Cursor blinking slow",
            "Segfault in my heart malloc",
            "Free() cannot help",
        ],
        author: "— Anonymous Hacker",
    },
];
