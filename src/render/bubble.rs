//! Speech and thought bubble drawing.

/// Bubble style selected by the calling tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleKind {
    Say,
    Think,
}

impl BubbleKind {
    /// Character drawn on the connector trail between bubble and figure.
    pub const fn thoughts(&self) -> &'static str {
        match self {
            BubbleKind::Say => "\\",
            BubbleKind::Think => "o",
        }
    }
}

/// Draw the bubble around `text`, word-wrapped at `width` columns.
pub fn bubble(text: &str, kind: BubbleKind, width: usize) -> String {
    let lines = wrap(text, width);
    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push(' ');
    out.push_str(&"_".repeat(inner + 2));
    out.push('\n');

    let count = lines.len();
    for (index, line) in lines.iter().enumerate() {
        let (open, close) = borders(kind, index, count);
        let padding = inner - line.chars().count();
        out.push(open);
        out.push(' ');
        out.push_str(line);
        out.push_str(&" ".repeat(padding + 1));
        out.push(close);
        out.push('\n');
    }

    out.push(' ');
    out.push_str(&"-".repeat(inner + 2));
    out
}

fn borders(kind: BubbleKind, index: usize, count: usize) -> (char, char) {
    match kind {
        BubbleKind::Think => ('(', ')'),
        BubbleKind::Say if count == 1 => ('<', '>'),
        BubbleKind::Say if index == 0 => ('/', '\\'),
        BubbleKind::Say if index == count - 1 => ('\\', '/'),
        BubbleKind::Say => ('|', '|'),
    }
}

/// Word-wrap `text` at `width` columns, hard-splitting words longer than a
/// full line. Explicit newlines in the input are preserved.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for input_line in text.split('\n') {
        let mut current = String::new();
        for word in input_line.split_whitespace() {
            for piece in split_long_word(word, width) {
                let needed = if current.is_empty() {
                    piece.chars().count()
                } else {
                    current.chars().count() + 1 + piece.chars().count()
                };
                if needed > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&piece);
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    if word.chars().count() <= width {
        return vec![word.to_string()];
    }
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
