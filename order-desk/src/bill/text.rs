/// Display width in chars
pub fn width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate to at most `max_width` chars
pub fn truncate(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad (or truncate) to exactly `width` chars
pub fn pad(s: &str, target: usize, align_right: bool) -> String {
    let s = truncate(s, target);
    let fill = " ".repeat(target - width(&s));
    if align_right {
        format!("{}{}", fill, s)
    } else {
        format!("{}{}", s, fill)
    }
}

/// Split text into lines of at most `max_width` chars
///
/// Breaks at whitespace; a word longer than a whole line is split.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while width(&word) > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(truncate(&word, max_width));
            word = word.chars().skip(max_width).collect();
        }
        if word.is_empty() {
            continue;
        }
        if !current.is_empty() && width(&current) + 1 + width(&word) > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Line buffer for fixed-width text
pub struct TextBuilder {
    buf: String,
    width: usize,
}

impl TextBuilder {
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::new(),
            width,
        }
    }

    pub fn write_line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Write `text` wrapped to the line width: `first` prefixes the first
    /// line, `rest` every continuation line
    pub fn write_wrapped(&mut self, first: &str, rest: &str, text: &str) {
        let available = self.width.saturating_sub(width(first).max(width(rest)));
        for (i, part) in wrap(text, available).iter().enumerate() {
            let prefix = if i == 0 { first } else { rest };
            self.write_line(&format!("{}{}", prefix, part));
        }
    }

    pub fn eq_sep(&mut self) {
        self.write_line(&"=".repeat(self.width));
    }

    pub fn dash_sep(&mut self) {
        self.write_line(&"-".repeat(self.width));
    }

    pub fn text_center(&mut self, s: &str) {
        let s = truncate(s, self.width);
        let left = (self.width - width(&s)) / 2;
        self.write_line(&format!("{}{}", " ".repeat(left), s));
    }

    /// Left text, right text, spaces in between
    pub fn line_lr(&mut self, left: &str, right: &str) {
        let rw = width(right);
        if rw >= self.width {
            self.write_line(&truncate(right, self.width));
            return;
        }
        // Keep at least one space between the columns
        let left = truncate(left, self.width - rw - 1);
        let spaces = self.width - width(&left) - rw;
        self.write_line(&format!("{}{}{}", left, " ".repeat(spaces), right));
    }

    pub fn finalize(self) -> String {
        self.buf
    }
}
