use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = if self.base_path.is_empty() {
            Path::new(path).to_path_buf()
        } else {
            Path::new(&self.base_path).join(path)
        };
        let data = fs::read(full_path)?;
        Ok(data)
    }
}
