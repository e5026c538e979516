use anyhow::Result;
use uuid::Uuid;

use crate::errors::InvalidArgument;

/// Resolve an optional leading `~/` to the current user's HOME path.
pub fn resolve_home(path: &str) -> Result<String> {
    if path.starts_with("~/") {
        let home = home_dir()?;
        Ok(path.replacen('~', &home, 1))
    } else {
        Ok(path.to_string())
    }
}

/// Return the path to the current user home directory.
///
/// Implement simple variable lookup for linux.
/// Other OS are not currently supported.
fn home_dir() -> Result<String> {
    match std::env::var("HOME") {
        Err(std::env::VarError::NotPresent) => anyhow::bail!("unable to lookup the $HOME path"),
        Err(std::env::VarError::NotUnicode(_)) => anyhow::bail!("unable to UTF-8 decode $HOME"),
        Ok(path) => Ok(path),
    }
}

/// Parse a numeric resource ID given on the command line.
pub fn parse_id(kind: &str, value: &str) -> Result<i32> {
    value
        .parse::<i32>()
        .map_err(|_| InvalidArgument::new(format!("{} ID", kind), value).into())
}

/// Parse a UUID resource ID given on the command line.
pub fn parse_uuid(kind: &str, value: &str) -> Result<Uuid> {
    Uuid::parse_str(value).map_err(|_| InvalidArgument::new(format!("{} ID", kind), value).into())
}

/// Report on the set status of an optional value (set vs not set).
pub fn set_or_not<T>(value: &Option<T>) -> &'static str {
    match value.is_some() {
        true => "Set",
        false => "Not Set",
    }
}

/// Report an optional value, or indicate if it is not set.
pub fn value_or_not_set<T: ToString>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from("Not Set"),
    }
}

/// Report an optional value, or an empty string if it is not set.
pub fn value_or_empty<T: ToString>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::InvalidArgument;

    #[test]
    fn parse_id_rejects_names() {
        let error = super::parse_id("template", "web").unwrap_err();
        assert!(error.downcast_ref::<InvalidArgument>().is_some());
        assert_eq!(error.to_string(), "Invalid template ID [web]");
    }

    #[test]
    fn parse_uuid_accepts_hyphenated() {
        let id = super::parse_uuid("domain", "6c5d0b9f-1f9b-4c55-9d2b-4a7c0c6d2a10").unwrap();
        assert_eq!(id.to_string(), "6c5d0b9f-1f9b-4c55-9d2b-4a7c0c6d2a10");
    }

    #[test]
    fn resolve_home_keeps_absolute_paths() {
        let path = super::resolve_home("/tmp/contexts").unwrap();
        assert_eq!(path, "/tmp/contexts");
    }

    #[test]
    fn optional_values() {
        assert_eq!(super::value_or_not_set::<i32>(&None), "Not Set");
        assert_eq!(super::value_or_empty(&Some(3)), "3");
        assert_eq!(super::set_or_not(&Some("key")), "Set");
    }
}
