// Author: Dustin Pilgrim
// License: MIT

/// Characters that may follow a closing quote. Anything else keeps the run open.
const QUOTE_CLOSERS: &[char] = &['=', ',', ']', ';'];

/// Characters after which a `"` opens a quoted run.
const TOKEN_BOUNDARIES: &[char] = &['=', ',', '['];

/// Byte offsets and characters found outside quoted runs.
///
/// A `"` opens a run only at the start of a token (start of text, or after
/// `=`, `,` or `[` plus optional spaces) and closes it only when followed by
/// optional spaces and one of [`QUOTE_CLOSERS`] or the end of text. An
/// opening quote that never closes is plain text.
pub(crate) fn structural(text: &str) -> Vec<(usize, char)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut literal_quotes: Vec<usize> = Vec::new();

    loop {
        match scan(&chars, &literal_quotes) {
            Ok(out) => return out,
            Err(unclosed) => literal_quotes.push(unclosed),
        }
    }
}

/// One pass over `chars`. Fails with the position of an opening quote whose
/// run reaches the end of text without a closer.
fn scan(chars: &[(usize, char)], literal_quotes: &[usize]) -> Result<Vec<(usize, char)>, usize> {
    let mut out = Vec::new();
    let mut open_at: Option<usize> = None;
    let mut token_start = true;

    for (pos, &(idx, ch)) in chars.iter().enumerate() {
        if open_at.is_some() {
            if ch == '"' && closes_run(&chars[pos + 1..]) {
                open_at = None;
            }
            continue;
        }

        if ch.is_whitespace() {
            out.push((idx, ch));
            continue;
        }

        if ch == '"' && token_start && !literal_quotes.contains(&pos) {
            open_at = Some(pos);
            token_start = false;
            continue;
        }

        token_start = TOKEN_BOUNDARIES.contains(&ch);
        out.push((idx, ch));
    }

    match open_at {
        Some(pos) => Err(pos),
        None => Ok(out),
    }
}

fn closes_run(rest: &[(usize, char)]) -> bool {
    match rest.iter().map(|&(_, c)| c).find(|c| !c.is_whitespace()) {
        None => true,
        Some(c) => QUOTE_CLOSERS.contains(&c),
    }
}

/// First byte offset of `target` outside quoted runs.
pub(crate) fn find_structural(text: &str, target: char) -> Option<usize> {
    structural(text)
        .into_iter()
        .find(|&(_, c)| c == target)
        .map(|(idx, _)| idx)
}

/// Whether `text` opens with `[` and that bracket is closed by the final
/// character, with every bracket in between balanced.
pub(crate) fn is_enclosed(text: &str) -> bool {
    let marks = structural(text);
    if marks.first().map(|&(_, c)| c) != Some('[') {
        return false;
    }

    let mut depth: usize = 0;
    for (n, &(idx, c)) in marks.iter().enumerate() {
        match c {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return n == marks.len() - 1 && idx + 1 == text.len();
                }
            }
            _ => {}
        }
    }
    false
}

/// Split the interior of an array on commas at bracket depth zero.
pub(crate) fn split_top_level(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (idx, c) in structural(inner) {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&inner[start..idx]);
                start = idx + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

/// Whether `quoted` (which must start with `"`) reads back as one quoted run
/// spanning the whole text.
pub(crate) fn is_single_quoted_run(quoted: &str) -> bool {
    if !quoted.starts_with('"') || quoted.len() < 2 {
        return false;
    }
    // Any structural character means the run closed before the end.
    structural(quoted).is_empty()
}
