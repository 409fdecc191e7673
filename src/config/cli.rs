use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
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
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<(String, u64)>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if metadata.is_file() {
                entries.push((entry.file_name().to_string_lossy().into_owned(), metadata.len()));
            }
        }
        entries.sort();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_list() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("2_console.png", b"png-bytes").await.unwrap();
        storage.write_file("1_pipeline.png", b"more-png-bytes").await.unwrap();

        let files = storage.list_files().await.unwrap();
        assert_eq!(
            files,
            vec![
                ("1_pipeline.png".to_string(), 14),
                ("2_console.png".to_string(), 9)
            ]
        );
    }

    #[tokio::test]
    async fn test_read_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());

        storage.write_file("console.txt", b"BUILD SUCCESS").await.unwrap();
        let data = storage.read_file("console.txt").await.unwrap();
        assert_eq!(data, b"BUILD SUCCESS");
    }
}
