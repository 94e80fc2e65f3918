use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::env;

const ENV_PREFIX: &str = "DASHBOARD_VAR_";

/// Matches `${ANY-KEY}` or a bare `$NAME`; a bare name extends as far as identifier characters go
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\{([^}]+)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("placeholder pattern is valid")
});

/// Replace `${NAME}` and `$NAME` placeholders whose name appears in `replacements`.
///
/// The braced form accepts any key up to the closing brace (`${my-ns}`); the
/// bare form only identifiers. Unknown placeholders are kept verbatim, and substituted values are not
/// scanned again.
pub fn substitute_variables(content: &str, replacements: &HashMap<String, String>) -> String {
    if replacements.is_empty() {
        return content.to_string();
    }

    PLACEHOLDER
        .replace_all(content, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match replacements.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Collects substitution values from the environment and the command line
pub struct VariableResolver {
    variables: HashMap<String, String>,
}

impl Default for VariableResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableResolver {
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Add variables from environment (DASHBOARD_VAR_NAME -> NAME)
    pub fn add_env_vars(&mut self) {
        self.add_vars_from(env::vars());
    }

    fn add_vars_from(&mut self, vars: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in vars {
            if let Some(var_name) = key.strip_prefix(ENV_PREFIX)
                && !var_name.is_empty()
            {
                self.variables.insert(var_name.to_string(), value);
            }
        }
    }

    /// Add variables from CLI flags; these win over the environment
    pub fn add_cli_vars(&mut self, cli_vars: &[(String, String)]) {
        for (key, value) in cli_vars {
            self.variables.insert(key.clone(), value.clone());
        }
    }

    pub fn get_variables(&self) -> &HashMap<String, String> {
        &self.variables
    }

    pub fn get_variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn substitute(&self, content: &str) -> String {
        substitute_variables(content, &self.variables)
    }
}

/// Parse a `NAME=VALUE` pair as given to `--var`
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    if name.is_empty() {
        return Err(format!("variable name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
