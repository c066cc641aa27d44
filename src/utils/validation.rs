use crate::utils::error::{Result, RevWhoisError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl ToString, reason: impl Into<String>) -> RevWhoisError {
    RevWhoisError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// The reverse-WHOIS endpoint must be an absolute http(s) URL with a host.
pub fn validate_endpoint(field: &str, endpoint: &str) -> Result<()> {
    let url = Url::parse(endpoint)
        .map_err(|e| invalid(field, endpoint, format!("not a lookup endpoint URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field,
            endpoint,
            format!("lookup endpoint must use http or https, got {}", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field, endpoint, "lookup endpoint has no host"));
    }
    Ok(())
}

pub fn validate_timeout(field: &str, seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(invalid(
            field,
            seconds,
            "a zero timeout would fail every lookup; use at least 1 second",
        ));
    }
    Ok(())
}

pub fn validate_credential_path(field: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field, path, "API key file path is empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field, path, "API key file path contains a NUL byte"));
    }
    Ok(())
}

pub fn validate_user_agent(field: &str, user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(invalid(field, user_agent, "User-Agent header cannot be blank"));
    }
    if user_agent.chars().any(char::is_control) {
        return Err(invalid(
            field,
            user_agent.escape_debug(),
            "User-Agent header cannot contain control characters",
        ));
    }
    Ok(())
}

/// `host:port`, where host may be a name or an address.
pub fn validate_bind_address(field: &str, bind: &str) -> Result<()> {
    let Some((host, port)) = bind.rsplit_once(':') else {
        return Err(invalid(field, bind, "expected host:port"));
    };
    if host.trim().is_empty() {
        return Err(invalid(field, bind, "missing host before the port"));
    }
    port.parse::<u16>()
        .map_err(|_| invalid(field, bind, format!("'{}' is not a valid port", port)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_endpoint() {
        assert!(validate_endpoint("api.endpoint", "https://reverse-whois.whoisxmlapi.com/api/v2").is_ok());
        assert!(validate_endpoint("api.endpoint", "http://127.0.0.1:8080/api/v2").is_ok());
        assert!(validate_endpoint("api.endpoint", "").is_err());
        assert!(validate_endpoint("api.endpoint", "reverse-whois").is_err());
        assert!(validate_endpoint("api.endpoint", "ftp://whoisxmlapi.com").is_err());
    }

    #[test]
    fn test_validate_timeout() {
        assert!(validate_timeout("api.timeout_seconds", 30).is_ok());
        assert!(validate_timeout("api.timeout_seconds", 0).is_err());
    }

    #[test]
    fn test_validate_credential_path() {
        assert!(validate_credential_path("credentials.path", "/home/user/.config/whoisxml.conf").is_ok());
        assert!(validate_credential_path("credentials.path", "  ").is_err());
        assert!(validate_credential_path("credentials.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_user_agent() {
        assert!(validate_user_agent("api.user_agent", "Mozilla/5.0").is_ok());
        assert!(validate_user_agent("api.user_agent", "   ").is_err());
        assert!(validate_user_agent("api.user_agent", "agent\r\nX-Injected: 1").is_err());
    }

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("server.bind", "127.0.0.1:5000").is_ok());
        assert!(validate_bind_address("server.bind", "localhost:8080").is_ok());
        assert!(validate_bind_address("server.bind", "5000").is_err());
        assert!(validate_bind_address("server.bind", ":5000").is_err());
        assert!(validate_bind_address("server.bind", "0.0.0.0:http").is_err());
    }
}
