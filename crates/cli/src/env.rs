use crate::error::CliError;
use std::{collections::HashMap, fs, path::Path};

/// Process environment, optionally topped up from a `.env` file.
#[derive(Debug, Clone)]
pub struct EnvManager {
    vars: HashMap<String, String>,
}

impl EnvManager {
    pub fn new() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Loads variables from a `.env` file. Variables already set in the
    /// process environment are kept.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CliError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        for (key, value) in parse_assignments(&content)
            .map_err(|e| CliError::EnvFile(format!("{}: {e}", path.display())))?
        {
            self.vars.entry(key).or_insert(value);
        }
        Ok(())
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl Default for EnvManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `KEY=VALUE` lines as found in `.env` and form files.
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is ignored and
/// matching single or double quotes around the value are removed.
pub fn parse_assignments(content: &str) -> Result<Vec<(String, String)>, String> {
    let mut assignments = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);

        let Some((key, value)) = line.split_once('=') else {
            return Err(format!(
                "malformed line {} (expected KEY=VALUE)",
                line_num + 1
            ));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(format!("empty key at line {}", line_num + 1));
        }

        assignments.push((key.to_string(), unquote(value.trim()).to_string()));
    }

    Ok(assignments)
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
