//! API key lookup.
//!
//! The key is taken from the `password` of the `machine openai` entry in the
//! user's netrc file. When the file or the entry is missing, the
//! `OPENAI_API_KEY` environment variable is used instead.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Netrc machine name holding the API key.
pub const NETRC_HOST: &str = "openai";

/// Environment variable consulted when netrc has no key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Default netrc location: `$NETRC`, else `~/.netrc`.
pub fn default_netrc_path() -> Option<PathBuf> {
    std::env::var_os("NETRC")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".netrc")))
}

/// Look up the API key from the default netrc file and the environment.
pub fn get_api_key(netrc: Option<&Path>) -> Result<Option<String>, CredentialError> {
    let default_path = default_netrc_path();
    let netrc = netrc.or(default_path.as_deref());
    let env_value = std::env::var(API_KEY_ENV).ok();

    lookup_api_key(netrc, NETRC_HOST, env_value)
}

/// Resolve a key from an optional netrc file, falling back to `env_value`.
///
/// A missing netrc file is not an error; any other read failure is.
/// Empty values count as absent.
pub fn lookup_api_key(
    netrc: Option<&Path>,
    host: &str,
    env_value: Option<String>,
) -> Result<Option<String>, CredentialError> {
    if let Some(path) = netrc {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                if let Some(password) = netrc_password(&content, host) {
                    tracing::debug!("Using API key from {} (machine {})", path.display(), host);
                    return Ok(Some(password));
                }
                tracing::debug!("No machine {} entry in {}", host, path.display());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No netrc file at {}", path.display());
            }
            Err(source) => {
                return Err(CredentialError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    let key = env_value.filter(|value| !value.trim().is_empty());
    if key.is_some() {
        tracing::debug!("Using API key from {}", API_KEY_ENV);
    }
    Ok(key)
}

/// Extract the password of `machine <host>` from netrc content.
pub fn netrc_password(content: &str, host: &str) -> Option<String> {
    let mut tokens = netrc_tokens(content).into_iter();
    let mut machine: Option<&str> = None;

    while let Some(token) = tokens.next() {
        match token {
            "machine" => machine = tokens.next(),
            "default" => machine = None,
            "password" => {
                let value = tokens.next();
                if machine == Some(host) {
                    if let Some(value) = value.filter(|v| !v.is_empty()) {
                        return Some(value.to_string());
                    }
                }
            }
            "login" | "account" => {
                tokens.next();
            }
            _ => {}
        }
    }

    None
}

/// Whitespace-separated tokens, skipping comment lines and macro bodies.
fn netrc_tokens(content: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut in_macro = false;

    for line in content.lines() {
        if in_macro {
            // Macro bodies run until the next empty line.
            if line.trim().is_empty() {
                in_macro = false;
            }
            continue;
        }
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line.split_whitespace() {
            if token == "macdef" {
                in_macro = true;
                break;
            }
            tokens.push(token);
        }
    }

    tokens
}
