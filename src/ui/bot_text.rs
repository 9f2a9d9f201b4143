//! Minimal formatting for bot answers: one block per line, lines starting
//! with `-` become list items.

use ratatui::text::{Line, Span};

use super::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotBlock<'a> {
    Paragraph(&'a str),
    ListItem(&'a str),
}

pub const BULLET: &str = "• ";
pub const LIST_INDENT: &str = "  ";

/// Split `text` on `\n`. A line that starts with `-` loses the hyphen and
/// surrounding whitespace; every other line is kept verbatim.
pub fn render_bot_text(text: &str) -> Vec<BotBlock<'_>> {
    text.split('\n')
        .map(|line| match line.strip_prefix('-') {
            Some(rest) => BotBlock::ListItem(rest.trim()),
            None => BotBlock::Paragraph(line),
        })
        .collect()
}

pub fn to_lines<'a>(blocks: &[BotBlock<'a>], theme: &Theme) -> Vec<Line<'a>> {
    blocks
        .iter()
        .map(|block| match *block {
            BotBlock::Paragraph(text) => {
                Line::from(Span::styled(text, theme.bot_text_style))
            }
            BotBlock::ListItem(text) => Line::from(vec![
                Span::raw(LIST_INDENT),
                Span::styled(BULLET, theme.bullet_style),
                Span::styled(text, theme.bot_text_style),
            ]),
        })
        .collect()
}

/// Same layout as [`to_lines`] without styling, for stdout.
pub fn to_plain_text(blocks: &[BotBlock<'_>]) -> String {
    let lines: Vec<String> = blocks
        .iter()
        .map(|block| match block {
            BotBlock::Paragraph(text) => (*text).to_string(),
            BotBlock::ListItem(text) => format!("{LIST_INDENT}{BULLET}{text}"),
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use BotBlock::{ListItem, Paragraph};

    #[test]
    fn hyphen_lines_become_list_items() {
        assert_eq!(
            render_bot_text("a\n-b\nc"),
            vec![Paragraph("a"), ListItem("b"), Paragraph("c")]
        );
    }

    #[test]
    fn list_items_are_trimmed_paragraphs_are_not() {
        assert_eq!(
            render_bot_text("-   spaced item  \n  indented para"),
            vec![ListItem("spaced item"), Paragraph("  indented para")]
        );
    }

    #[test]
    fn only_a_leading_hyphen_counts() {
        assert_eq!(
            render_bot_text(" - not a list\nx-y"),
            vec![Paragraph(" - not a list"), Paragraph("x-y")]
        );
        assert_eq!(render_bot_text("--double"), vec![ListItem("-double")]);
        assert_eq!(render_bot_text("-"), vec![ListItem("")]);
    }

    #[test]
    fn empty_lines_are_kept() {
        assert_eq!(
            render_bot_text("a\n\nb\n"),
            vec![Paragraph("a"), Paragraph(""), Paragraph("b"), Paragraph("")]
        );
        assert_eq!(render_bot_text(""), vec![Paragraph("")]);
    }

    #[test]
    fn plain_text_indents_bullets() {
        let blocks = render_bot_text("Topics:\n- sorting\n- graphs");
        assert_eq!(to_plain_text(&blocks), "Topics:\n  • sorting\n  • graphs");
    }

    #[test]
    fn styled_lines_match_block_count() {
        let theme = Theme::default();
        let blocks = render_bot_text("intro\n- one");
        let lines = to_lines(&blocks, &theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "intro");
        assert_eq!(lines[1].to_string(), "  • one");
    }
}
