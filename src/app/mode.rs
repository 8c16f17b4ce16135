/// Which part of the screen receives keystrokes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Typing or pasting into the token input
    #[default]
    Editing,
    /// Typing into the command deck
    Command,
    /// Help overlay shown
    Help,
    Quit,
}
