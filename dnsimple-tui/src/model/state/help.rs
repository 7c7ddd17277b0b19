use crate::backend::StoragePaths;

/// Static help page.
#[derive(Debug)]
pub struct HelpState {
    pub paths: StoragePaths,
    pub demo: bool,
}
