use tracing::debug;

/// Resolve a configured value. If the value starts with '$', treat it as an
/// environment variable reference and resolve it through `lookup`.
pub fn resolve_credential(value: &str, lookup: &dyn Fn(&str) -> Option<String>) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match lookup(var_name) {
            Some(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            None => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Mask a secret for display, keeping only the first four characters of
/// long values.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 8 {
        "[REDACTED]".to_string()
    } else {
        let prefix: String = secret.chars().take(4).collect();
        format!("{}…[REDACTED]", prefix)
    }
}
