use async_trait::async_trait;
use buildkit_summary::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SummaryWriter for testing that captures written content
#[derive(Default, Clone)]
pub struct MockSummaryWriter {
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl MockSummaryWriter {
    pub fn new() -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn written_content(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryWriter for MockSummaryWriter {
    async fn write(&self, content: &str) -> Result<()> {
        self.writes.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
