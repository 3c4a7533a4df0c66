use crate::ui::ansi::{FG_LIGHT_GRAY, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET};
use crate::ui::width_util::WidthUtil;

const INNER_WIDTH: usize = 50;

/// Screen-level helpers for the demo (banner, rules).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    /// Boxed title, centered in the terminal.
    pub fn banner(&self) -> String {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}K G R V{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}A developer, in brief{STYLE_RESET}");
        let left = " ".repeat(self.util.center_pad(INNER_WIDTH + 2));
        [
            format!("╭{}╮", "─".repeat(INNER_WIDTH)),
            format!("│{}│", " ".repeat(INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&title, INNER_WIDTH)),
            format!("│{}│", self.center_in_box(&subtitle, INNER_WIDTH)),
            format!("│{}│", " ".repeat(INNER_WIDTH)),
            format!("╰{}╯", "─".repeat(INNER_WIDTH)),
        ]
        .iter()
        .map(|line| format!("{left}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// A horizontal rule of `ch`, `width` characters long.
    pub fn rule(&self, ch: char, width: usize) -> String {
        ch.to_string().repeat(width)
    }

    fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
