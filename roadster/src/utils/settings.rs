use anyhow::bail;
use anyhow::Result;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub struct SettingsStorage {
    path: String,
    cache: FxHashMap<String, String>,
    loaded: bool,
}

impl SettingsStorage {
    pub fn new(path: &str) -> Self {
        Self { path: path.to_string(), cache: FxHashMap::default(), loaded: false }
    }

    pub fn get<T>(&mut self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
    {
        if !self.loaded {
            self.load()?;
        }

        Ok(self.cache.get(key).and_then(|value| value.parse().ok()))
    }

    pub fn set<T>(&mut self, key: &str, value: T, overwrite: bool) -> Result<Option<T>>
    where
        T: FromStr + ToString,
    {
        if !self.loaded {
            self.load()?;
        }

        if self.cache.get(key).is_none() || overwrite {
            self.cache.insert(key.to_string(), value.to_string());
            fs::write(&self.path, self.serialize(&self.cache))?;

            Ok(Some(value))
        } else {
            Ok(self.cache.get(key).and_then(|value| value.parse().ok()))
        }
    }

    fn load(&mut self) -> Result<()> {
        self.cache = if Path::new(&self.path).exists() {
            let content = fs::read_to_string(&self.path)?;
            self.deserialize(&content)?
        } else {
            FxHashMap::default()
        };
        self.loaded = true;

        Ok(())
    }

    fn serialize(&self, settings: &FxHashMap<String, String>) -> String {
        let mut output = String::new();

        for item in settings {
            output.push_str(&format!("{}={}\n", item.0, item.1));
        }

        output.trim().to_string()
    }

    fn deserialize(&self, settings: &str) -> Result<FxHashMap<String, String>> {
        let mut output = FxHashMap::default();

        for line in settings.lines().map(|p| p.trim()).filter(|p| !p.is_empty()) {
            let tokens = line.split('=').collect::<Vec<&str>>();

            if tokens.len() != 2 {
                bail!("Invalid settings line ({})", line);
            }

            output.insert(tokens[0].trim().to_string(), tokens[1].trim().to_string());
        }

        Ok(output)
    }
}
