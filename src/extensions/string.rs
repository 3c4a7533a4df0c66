pub const BULLET: &str = "  • ";

pub trait Bulleted {
    /// One `  • item` line per entry, joined with newlines (no trailing one).
    fn bulleted(&self) -> String;
}

impl Bulleted for [String] {
    fn bulleted(&self) -> String {
        self.iter()
            .map(|item| format!("{BULLET}{item}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Bulleted for Vec<String> {
    fn bulleted(&self) -> String {
        self.as_slice().bulleted()
    }
}
