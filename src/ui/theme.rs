use ratatui::style::{Color, Modifier, Style};

/// Style policy for the whole interface. The five built-ins mirror the code
/// themes the web tutor shipped; each also names the syntect palette used
/// for fenced code blocks.
#[derive(Debug, Clone)]
pub struct Theme {
    pub id: &'static str,
    pub display_name: &'static str,
    pub syntect_theme: &'static str,

    pub background: Color,
    pub user_style: Style,
    pub model_style: Style,
    /// Topic selections render italic and muted instead of as raw `*…*`.
    pub topic_style: Style,
    pub bold_style: Style,
    pub italic_style: Style,
    pub link_style: Style,
    pub code_style: Style,
    pub code_bg: Option<Color>,
    pub button_style: Style,
    pub diagram_style: Style,
    pub title_style: Style,
    pub input_style: Style,
    pub border_style: Style,
}

impl Theme {
    pub fn atom_one_dark() -> Self {
        Self::dark_base("atom-one-dark", "Atom One Dark", "base16-ocean.dark")
    }

    pub fn dracula() -> Self {
        let mut theme = Self::dark_base("dracula", "Dracula", "base16-mocha.dark");
        theme.bold_style = Style::default()
            .fg(Color::Rgb(255, 121, 198))
            .add_modifier(Modifier::BOLD);
        theme.link_style = Style::default()
            .fg(Color::Rgb(139, 233, 253))
            .add_modifier(Modifier::UNDERLINED);
        theme
    }

    pub fn monokai_sublime() -> Self {
        let mut theme =
            Self::dark_base("monokai-sublime", "Monokai Sublime", "base16-eighties.dark");
        theme.bold_style = Style::default()
            .fg(Color::Rgb(249, 38, 114))
            .add_modifier(Modifier::BOLD);
        theme
    }

    pub fn github_dark() -> Self {
        let mut theme = Self::dark_base("github-dark", "GitHub Dark", "Solarized (dark)");
        theme.link_style = Style::default()
            .fg(Color::Rgb(88, 166, 255))
            .add_modifier(Modifier::UNDERLINED);
        theme
    }

    pub fn solarized_light() -> Self {
        Theme {
            id: "solarized-light",
            display_name: "Solarized Light",
            syntect_theme: "Solarized (light)",
            background: Color::Rgb(253, 246, 227),
            user_style: Style::default().fg(Color::Rgb(38, 139, 210)),
            model_style: Style::default().fg(Color::Rgb(88, 110, 117)),
            topic_style: Style::default()
                .fg(Color::Rgb(147, 161, 161))
                .add_modifier(Modifier::ITALIC),
            bold_style: Style::default()
                .fg(Color::Rgb(7, 54, 66))
                .add_modifier(Modifier::BOLD),
            italic_style: Style::default()
                .fg(Color::Rgb(88, 110, 117))
                .add_modifier(Modifier::ITALIC),
            link_style: Style::default()
                .fg(Color::Rgb(38, 139, 210))
                .add_modifier(Modifier::UNDERLINED),
            code_style: Style::default().fg(Color::Rgb(101, 123, 131)),
            code_bg: Some(Color::Rgb(238, 232, 213)),
            button_style: Style::default()
                .fg(Color::Rgb(253, 246, 227))
                .bg(Color::Rgb(38, 139, 210)),
            diagram_style: Style::default().fg(Color::Rgb(42, 161, 152)),
            title_style: Style::default().fg(Color::Rgb(101, 123, 131)),
            input_style: Style::default().fg(Color::Rgb(7, 54, 66)),
            border_style: Style::default().fg(Color::Rgb(147, 161, 161)),
        }
    }

    fn dark_base(
        id: &'static str,
        display_name: &'static str,
        syntect_theme: &'static str,
    ) -> Self {
        Theme {
            id,
            display_name,
            syntect_theme,
            background: Color::Rgb(17, 24, 39),
            user_style: Style::default().fg(Color::Rgb(129, 140, 248)),
            model_style: Style::default().fg(Color::Rgb(209, 213, 219)),
            topic_style: Style::default()
                .fg(Color::Rgb(156, 163, 175))
                .add_modifier(Modifier::ITALIC),
            bold_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            italic_style: Style::default()
                .fg(Color::Rgb(209, 213, 219))
                .add_modifier(Modifier::ITALIC),
            link_style: Style::default()
                .fg(Color::Rgb(129, 140, 248))
                .add_modifier(Modifier::UNDERLINED),
            code_style: Style::default().fg(Color::Rgb(229, 231, 235)),
            code_bg: Some(Color::Rgb(31, 41, 55)),
            button_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(79, 70, 229)),
            diagram_style: Style::default().fg(Color::Rgb(94, 234, 212)),
            title_style: Style::default().fg(Color::Rgb(156, 163, 175)),
            input_style: Style::default().fg(Color::White),
            border_style: Style::default().fg(Color::Rgb(75, 85, 99)),
        }
    }

    /// Look up a built-in theme by id.
    pub fn find(id: &str) -> Option<Theme> {
        Self::all().into_iter().find(|t| t.id == id)
    }

    pub fn all() -> Vec<Theme> {
        vec![
            Theme::atom_one_dark(),
            Theme::dracula(),
            Theme::solarized_light(),
            Theme::monokai_sublime(),
            Theme::github_dark(),
        ]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::atom_one_dark()
    }
}
