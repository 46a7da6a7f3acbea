use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use ea3_reader::Ea3Reader;

#[derive(Clone)]
pub struct SignalInfo {
    pub reader: Arc<Ea3Reader>,
    pub file_id: String,
    pub original_name: String,  // Signal name inside the file (data_x / data_y)
}

#[derive(Clone)]
pub struct LoadedFile {
    pub reader: Arc<Ea3Reader>,
    pub name: String,
    pub headers: Vec<String>,   // Exposed (globally unique) signal names
}

#[derive(Clone)]
pub struct AppState {
    // unique_name -> SignalInfo
    pub signals: Arc<RwLock<HashMap<String, SignalInfo>>>,
    // file id -> decoded file
    pub files: Arc<RwLock<HashMap<String, LoadedFile>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            signals: Arc::new(RwLock::new(HashMap::new())),
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// `base`, or `base_1`, `base_2`, ... whichever is free first.
pub fn unique_name<V>(taken: &HashMap<String, V>, base: &str) -> String {
    if !taken.contains_key(base) {
        return base.to_string();
    }

    let mut i = 1;
    loop {
        let candidate = format!("{}_{}", base, i);
        if !taken.contains_key(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_name() {
        let mut taken: HashMap<String, ()> = HashMap::new();
        assert_eq!(unique_name(&taken, "data_x"), "data_x");

        taken.insert("data_x".into(), ());
        taken.insert("data_x_1".into(), ());
        assert_eq!(unique_name(&taken, "data_x"), "data_x_2");
        assert_eq!(unique_name(&taken, "data_y"), "data_y");
    }
}
