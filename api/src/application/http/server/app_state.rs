use std::sync::Arc;

use dongopet_core::application::DongoPetService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DongoPetService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DongoPetService) -> Self {
        Self { args, service }
    }
}
