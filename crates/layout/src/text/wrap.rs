use crate::typography::TextStyle;

/// Greedy word wrap against measured Helvetica widths.
///
/// Explicit newlines start a new line. A single word wider than
/// `max_width` is split by character. Always returns at least one line.
pub fn wrap_text(text: &str, style: TextStyle, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, style, max_width, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, style: TextStyle, max_width: f32, lines: &mut Vec<String>) {
    let space = style.measure(" ");
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in paragraph.split_whitespace() {
        let word_width = style.measure(word);

        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            for piece in split_long_word(word, style, max_width) {
                lines.push(piece);
            }
            // Continue on the last fragment so following words can share it.
            if let Some(last) = lines.pop() {
                current_width = style.measure(&last);
                current = last;
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    lines.push(current);
}

fn split_long_word(word: &str, style: TextStyle, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for ch in word.chars() {
        let mut candidate = piece.clone();
        candidate.push(ch);
        if !piece.is_empty() && style.measure(&candidate) > max_width {
            pieces.push(std::mem::take(&mut piece));
            piece.push(ch);
        } else {
            piece = candidate;
        }
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Shortens `text` with a trailing `...` until it fits in `max_width`.
pub fn truncate_to_width(text: &str, style: TextStyle, max_width: f32) -> String {
    if style.measure(text) <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate: String = chars.iter().collect::<String>() + "...";
        if style.measure(&candidate) <= max_width {
            return candidate;
        }
    }
    String::new()
}
