use std::sync::Arc;

use safeplate_core::application::SafeplateService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SafeplateService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SafeplateService) -> Self {
        Self { args, service }
    }
}
