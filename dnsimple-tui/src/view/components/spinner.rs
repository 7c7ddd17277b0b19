//! Loading indicator driven by the app tick

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn frame(tick: u64) -> &'static str {
    let index = usize::try_from(tick % 10).unwrap_or_default();
    FRAMES[index]
}
