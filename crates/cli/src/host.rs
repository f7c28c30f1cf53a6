use anyhow::{Result, bail};
use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

/// Dependency injection interface for the runner environment.
///
/// Commands read inputs, publish outputs and log through `&dyn Host`. Production code uses
/// `ActionsHost`, tests use `MockHost` which records everything in memory.
pub trait Host: Send + Sync {
    /// Value of an input, trimmed. Empty when the input was not supplied.
    fn get_input(&self, name: &str) -> String;

    /// `None` publishes the host's null value.
    ///
    /// # Errors
    /// Returns error if the output cannot be recorded.
    fn set_output(&self, name: &str, value: Option<&str>) -> Result<()>;

    /// Marks the run as failed with a message
    fn report_failure(&self, message: &str);

    fn log_info(&self, message: &str);

    fn log_error(&self, message: &str);
}

/// Environment variable that carries an input for a GitHub Actions step
pub(crate) fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Escape a workflow command message
pub(crate) fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property
pub(crate) fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// GitHub Actions runner protocol.
///
/// Inputs come from `INPUT_*` variables unless overridden (e.g. from command line flags). Outputs
/// go to the file named by `GITHUB_OUTPUT`, or to the legacy `::set-output` command without it.
#[derive(Debug, Default)]
pub struct ActionsHost {
    env: HashMap<String, String>,
    overrides: HashMap<String, String>,
}

impl ActionsHost {
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_env(std::env::vars().collect())
    }

    #[must_use]
    pub fn with_env(env: HashMap<String, String>) -> Self {
        Self {
            env,
            overrides: HashMap::new(),
        }
    }

    /// Input value that takes precedence over the environment
    #[must_use]
    pub fn with_input(mut self, name: &str, value: impl Into<String>) -> Self {
        self.overrides.insert(name.to_string(), value.into());
        self
    }

    fn output_file(&self) -> Option<&str> {
        self.env
            .get("GITHUB_OUTPUT")
            .map(String::as_str)
            .filter(|path| !path.is_empty())
    }
}

impl Host for ActionsHost {
    fn get_input(&self, name: &str) -> String {
        self.overrides
            .get(name)
            .or_else(|| self.env.get(&input_env_name(name)))
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    fn set_output(&self, name: &str, value: Option<&str>) -> Result<()> {
        let value = value.unwrap_or_default();
        let Some(output_file) = self.output_file() else {
            println!("::set-output name={}::{}", escape_property(name), escape_data(value));
            return Ok(());
        };

        let delimiter = format!("ghadelimiter_{}", nanoid::nanoid!());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            bail!("Unexpected input: output {name} contains the delimiter {delimiter}");
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_file)?;
        write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")?;
        Ok(())
    }

    fn report_failure(&self, message: &str) {
        println!("::error::{}", escape_data(message));
    }

    fn log_info(&self, message: &str) {
        println!("{message}");
    }

    fn log_error(&self, message: &str) {
        println!("::error::{}", escape_data(message));
    }
}

/// Mock implementation that serves predefined inputs and records the rest (for testing)
#[derive(Debug, Default)]
pub struct MockHost {
    inputs: HashMap<String, String>,
    outputs: Mutex<Vec<(String, Option<String>)>>,
    failures: Mutex<Vec<String>>,
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

fn snapshot<T: Clone>(records: &Mutex<Vec<T>>) -> Vec<T> {
    records
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn record<T>(records: &Mutex<Vec<T>>, value: T) {
    records
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(value);
}

impl MockHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_input(mut self, name: &str, value: impl Into<String>) -> Self {
        self.inputs.insert(name.to_string(), value.into());
        self
    }

    /// Last value set for `name`; `Some(None)` is an explicit null
    pub fn output(&self, name: &str) -> Option<Option<String>> {
        snapshot(&self.outputs)
            .into_iter()
            .rev()
            .find(|(output, _)| output == name)
            .map(|(_, value)| value)
    }

    pub fn outputs(&self) -> Vec<(String, Option<String>)> {
        snapshot(&self.outputs)
    }

    pub fn failures(&self) -> Vec<String> {
        snapshot(&self.failures)
    }

    pub fn infos(&self) -> Vec<String> {
        snapshot(&self.infos)
    }

    pub fn errors(&self) -> Vec<String> {
        snapshot(&self.errors)
    }
}

impl Host for MockHost {
    fn get_input(&self, name: &str) -> String {
        self.inputs
            .get(name)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }

    fn set_output(&self, name: &str, value: Option<&str>) -> Result<()> {
        record(&self.outputs, (name.to_string(), value.map(String::from)));
        Ok(())
    }

    fn report_failure(&self, message: &str) {
        record(&self.failures, message.to_string());
    }

    fn log_info(&self, message: &str) {
        record(&self.infos, message.to_string());
    }

    fn log_error(&self, message: &str) {
        record(&self.errors, message.to_string());
    }
}
