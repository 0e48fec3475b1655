use crate::coords::{Align, Vec2};

/// Splits `text` into display lines.
///
/// Lines always break at `\n`. With a `max_width` budget each explicit line is
/// additionally word-wrapped greedily: words (separated by spaces) accumulate
/// while `measure` of the joined line stays within the budget, and the next
/// word that would overflow starts a new line. A single word wider than the
/// budget gets a line of its own and is not split. Empty explicit lines are
/// kept so blank lines between paragraphs survive.
pub fn wrap_lines(
    text: &str,
    max_width: Option<f32>,
    mut measure: impl FnMut(&str) -> f32,
) -> Vec<String> {
    let mut out = Vec::new();

    for para in text.split('\n') {
        let Some(budget) = max_width else {
            out.push(para.to_string());
            continue;
        };

        let mut current = String::new();
        let mut emitted = false;

        for word in para.split(' ').filter(|w| !w.is_empty()) {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= budget {
                current = candidate;
            } else {
                out.push(std::mem::replace(&mut current, word.to_string()));
                emitted = true;
            }
        }

        if !current.is_empty() {
            out.push(current);
        } else if !emitted {
            out.push(String::new());
        }
    }

    out
}

/// Top-left corners for a block of lines anchored at `origin`.
///
/// The block is `max(widths)` wide and `line_height * widths.len()` tall and is
/// placed with the same nine-way rule as a single image. Each line is aligned
/// horizontally inside the block by the anchor's horizontal component.
pub fn place_lines(widths: &[f32], origin: Vec2, align: Align, line_height: f32) -> Vec<Vec2> {
    let block_w = widths.iter().copied().fold(0.0f32, f32::max);
    let block_h = line_height * widths.len() as f32;
    let top_left = align.place(origin, Vec2::new(block_w, block_h));

    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            Vec2::new(
                top_left.x + ((block_w - w) * align.horizontal()).floor(),
                top_left.y + line_height * i as f32,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Monospace measure: 10 px per character.
    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    // ── wrap_lines ────────────────────────────────────────────────────────

    #[test]
    fn two_words_per_line() {
        // "aa bb" = 50 fits in 60, "aa bb cc" = 80 does not.
        assert_eq!(wrap_lines("aa bb cc dd", Some(60.0), mono), vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn no_budget_splits_on_newlines_only() {
        let text = "a very long line that would wrap\nsecond";
        assert_eq!(
            wrap_lines(text, None, mono),
            vec!["a very long line that would wrap", "second"]
        );
    }

    #[test]
    fn oversized_word_stands_alone() {
        assert_eq!(
            wrap_lines("hi extraordinarily ok", Some(50.0), mono),
            vec!["hi", "extraordinarily", "ok"]
        );
    }

    #[test]
    fn wraps_each_explicit_line_separately() {
        assert_eq!(
            wrap_lines("aa bb cc\ndd ee", Some(50.0), mono),
            vec!["aa bb", "cc", "dd ee"]
        );
    }

    #[test]
    fn budget_is_inclusive() {
        assert_eq!(wrap_lines("ab cd", Some(50.0), mono), vec!["ab cd"]);
    }

    #[test]
    fn repeated_spaces_collapse_when_wrapping() {
        assert_eq!(wrap_lines("aa   bb", Some(100.0), mono), vec!["aa bb"]);
    }

    #[test]
    fn blank_lines_survive() {
        assert_eq!(wrap_lines("a\n\nb", Some(100.0), mono), vec!["a", "", "b"]);
        assert_eq!(wrap_lines("a\n\nb", None, mono), vec!["a", "", "b"]);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap_lines("", Some(10.0), mono), vec![""]);
    }

    #[test]
    fn measure_sees_joined_candidates() {
        let mut seen = Vec::new();
        wrap_lines("x y z", Some(1000.0), |s| {
            seen.push(s.to_string());
            mono(s)
        });
        assert_eq!(seen, vec!["x y", "x y z"]);
    }

    // ── place_lines ───────────────────────────────────────────────────────

    #[test]
    fn top_left_stacks_down_from_origin() {
        let p = place_lines(&[30.0, 50.0], Vec2::new(10.0, 20.0), Align::TopLeft, 12.0);
        assert_eq!(p, vec![Vec2::new(10.0, 20.0), Vec2::new(10.0, 32.0)]);
    }

    #[test]
    fn center_centers_block_and_lines() {
        // Block 50×24 centered on (100, 100): top-left (75, 88).
        let p = place_lines(&[30.0, 50.0], Vec2::new(100.0, 100.0), Align::Center, 12.0);
        assert_eq!(p, vec![Vec2::new(85.0, 88.0), Vec2::new(75.0, 100.0)]);
    }

    #[test]
    fn bottom_right_ends_at_origin() {
        let p = place_lines(&[20.0, 40.0, 10.0], Vec2::new(200.0, 90.0), Align::BottomRight, 10.0);
        assert_eq!(p[0], Vec2::new(180.0, 60.0));
        assert_eq!(p[1], Vec2::new(160.0, 70.0));
        assert_eq!(p[2], Vec2::new(190.0, 80.0));
    }

    #[test]
    fn block_height_is_line_height_times_count() {
        let p = place_lines(&[5.0; 4], Vec2::new(0.0, 100.0), Align::BottomLeft, 7.0);
        assert_eq!(p[0].y, 100.0 - 28.0);
    }
}
