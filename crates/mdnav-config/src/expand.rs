//! `${VAR}` substitution in configuration strings.

use std::borrow::Cow;
use std::env::VarError;

use crate::ConfigError;

/// Substitute environment references in an optional string field in place.
///
/// `${VAR}` must be set; `${VAR:-default}` falls back when it is not.
/// Values without a `${` sequence are left exactly as written, including
/// bare `$VAR`.
pub(crate) fn expand_field(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    let Some(raw) = value.as_deref().filter(|raw| raw.contains("${")) else {
        return Ok(());
    };
    let expanded = substitute(raw, field)?;
    *value = Some(expanded);
    Ok(())
}

fn substitute(raw: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(raw, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|e| {
            let reason = match e.cause {
                VarError::NotPresent => "not set",
                VarError::NotUnicode(_) => "not valid unicode",
            };
            ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} {reason}", e.var_name),
            }
        })
}
