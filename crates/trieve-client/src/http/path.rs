//! Path template substitution
//!
//! Replaces every `{name}` placeholder in an endpoint path template with its
//! classified value. A placeholder left without a binding fails the call
//! before anything reaches the wire.

use std::collections::HashMap;

use crate::{Error, Result};

/// Render a path template against the classified path-parameter map
///
/// All occurrences of a given placeholder are replaced, not just the first.
pub fn render_path(template: &str, path_params: &HashMap<String, String>) -> Result<String> {
    let mut path = template.to_string();
    for (name, value) in path_params {
        let placeholder = format!("{{{}}}", name);
        path = path.replace(&placeholder, value);
    }

    let re = regex::Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid placeholder pattern");
    if let Some(caps) = re.captures(&path) {
        return Err(Error::UnresolvedPlaceholder {
            placeholder: caps[1].to_string(),
            template: template.to_string(),
        });
    }

    Ok(path)
}
