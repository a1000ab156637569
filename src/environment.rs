use std::env;

/// Retrieves an environment variable and splits it into a vector of strings based on a delimiter.
///
/// Returns `None` when the variable is unset, so callers can tell "unset" apart
/// from "set to an empty list". Empty segments are dropped.
///
/// # Arguments
/// - `var`: The name of the environment variable.
/// - `delimiter`: The character to split the environment variable's value by.
pub fn get_env_var_as_vec(var: &str, delimiter: char) -> Option<Vec<String>> {
    env::var(var).ok().map(|value| {
        value
            .split(delimiter)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

/// Retrieves an environment variable, falling back to `default` when unset or blank.
pub fn get_env_var_or(var: &str, default: &str) -> String {
    match env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}
