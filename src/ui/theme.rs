use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub background_color: Color,

    // Transcript
    pub user_text_style: Style,
    pub bot_text_style: Style,
    pub bullet_style: Style,
    pub thinking_style: Style,
    pub transcript_border_style: Style,

    // Sidebar
    pub sidebar_title_style: Style,
    pub sidebar_item_style: Style,
    pub sidebar_footer_style: Style,

    // Input area
    pub input_border_style: Style,
    pub input_text_style: Style,
    pub input_placeholder_style: Style,
    pub input_cursor_style: Style,
    pub send_button_style: Style,
    pub send_button_disabled_style: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark_green()
    }
}

impl Theme {
    /// Dark background with green accents.
    pub fn dark_green() -> Self {
        let green = Color::Rgb(0x22, 0xc5, 0x5e);
        let deep_green = Color::Rgb(0x16, 0xa3, 0x4a);
        let border_green = Color::Rgb(0x15, 0x80, 0x3d);
        let text = Color::Rgb(0xf3, 0xf4, 0xf6);
        let muted = Color::Rgb(0x6b, 0x72, 0x80);

        Theme {
            background_color: Color::Rgb(0x03, 0x07, 0x12),

            user_text_style: Style::default().fg(Color::White).bg(deep_green),
            bot_text_style: Style::default().fg(text),
            bullet_style: Style::default().fg(green),
            thinking_style: Style::default().fg(Color::Rgb(0x86, 0xef, 0xac)),
            transcript_border_style: Style::default().fg(border_green),

            sidebar_title_style: Style::default().fg(green).add_modifier(Modifier::BOLD),
            sidebar_item_style: Style::default().fg(text),
            sidebar_footer_style: Style::default().fg(muted),

            input_border_style: Style::default().fg(border_green),
            input_text_style: Style::default().fg(Color::White),
            input_placeholder_style: Style::default().fg(Color::Rgb(0x9c, 0xa3, 0xaf)),
            input_cursor_style: Style::default().add_modifier(Modifier::REVERSED),
            send_button_style: Style::default()
                .fg(Color::White)
                .bg(deep_green)
                .add_modifier(Modifier::BOLD),
            send_button_disabled_style: Style::default()
                .fg(muted)
                .bg(Color::Rgb(0x1f, 0x29, 0x37))
                .add_modifier(Modifier::DIM),
        }
    }

    /// No colors at all, for `--no-color` sessions.
    pub fn monochrome() -> Self {
        let plain = Style::default();
        Theme {
            background_color: Color::Reset,
            user_text_style: plain,
            bot_text_style: plain,
            bullet_style: plain,
            thinking_style: plain,
            transcript_border_style: plain,
            sidebar_title_style: plain.add_modifier(Modifier::BOLD),
            sidebar_item_style: plain,
            sidebar_footer_style: plain,
            input_border_style: plain,
            input_text_style: plain,
            input_placeholder_style: plain,
            input_cursor_style: plain.add_modifier(Modifier::REVERSED),
            send_button_style: plain.add_modifier(Modifier::BOLD),
            send_button_disabled_style: plain.add_modifier(Modifier::DIM),
        }
    }
}
