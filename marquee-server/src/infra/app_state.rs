use std::{fmt, sync::Arc};

use marquee_core::Commands;

#[derive(Clone)]
pub struct AppState {
    pub commands: Arc<Commands>,
}

impl AppState {
    pub fn new(commands: Arc<Commands>) -> Self {
        Self { commands }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("home_region", self.commands.home_region())
            .finish_non_exhaustive()
    }
}
