//! Token and URL resolution from multiple sources

use log::debug;

use crate::config::{api, settings as settings_config};
use crate::error::{OctoError, Result};

use super::models::Settings;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve the API token from multiple sources with fallback:
/// 1. `--token`
/// 2. Environment variables (GITHUB_TOKEN, GH_TOKEN - in order)
/// 3. Settings file
pub fn resolve_token(cli_token: Option<&str>, settings: &Settings) -> Result<String> {
    resolve_token_with(cli_token, settings, |name| std::env::var(name).ok())
}

/// [`resolve_token`] with an explicit environment lookup
pub fn resolve_token_with<E>(cli_token: Option<&str>, settings: &Settings, env: E) -> Result<String>
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(token) = non_empty(cli_token.map(str::to_string)) {
        debug!("Using token from CLI argument");
        return Ok(token);
    }

    for &env_var in settings_config::TOKEN_ENV_VARS {
        if let Some(token) = non_empty(env(env_var)) {
            debug!("Using token from {} environment variable", env_var);
            return Ok(token);
        }
    }

    if let Some(token) = non_empty(settings.token.clone()) {
        debug!("Using token from settings file");
        return Ok(token);
    }

    Err(OctoError::TokenNotFound(format!(
        "No API token found. Please provide a token using one of:\n\
         \n\
         1. CLI argument:      octo-reports --token <TOKEN>\n\
         2. Environment var:   export GITHUB_TOKEN=<TOKEN>  (also: GH_TOKEN)\n\
         3. Settings file:     token: <TOKEN>  in ./{} or ~/{}/{}\n\
         \n\
         Checked: CLI argument, env vars [{}], settings file",
        settings_config::LOCAL_FILE,
        settings_config::DIR_NAME,
        settings_config::FILE_NAME,
        settings_config::TOKEN_ENV_VARS.join(", ")
    )))
}

/// Resolve the GraphQL endpoint:
/// 1. `--url`
/// 2. GITHUB_GRAPHQL_URL
/// 3. Settings file
/// 4. https://api.github.com/graphql
pub fn resolve_url(cli_url: Option<&str>, settings: &Settings) -> String {
    resolve_url_with(cli_url, settings, |name| std::env::var(name).ok())
}

/// [`resolve_url`] with an explicit environment lookup
pub fn resolve_url_with<E>(cli_url: Option<&str>, settings: &Settings, env: E) -> String
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(url) = non_empty(cli_url.map(str::to_string)) {
        debug!("Using URL from CLI argument: {}", url);
        return url;
    }

    if let Some(url) = non_empty(env(settings_config::URL_ENV_VAR)) {
        debug!(
            "Using URL from {} environment variable: {}",
            settings_config::URL_ENV_VAR,
            url
        );
        return url;
    }

    if let Some(url) = non_empty(settings.url.clone()) {
        debug!("Using URL from settings file: {}", url);
        return url;
    }

    debug!("Using default URL: {}", api::DEFAULT_URL);
    api::DEFAULT_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn settings(token: Option<&str>, url: Option<&str>) -> Settings {
        Settings {
            token: token.map(str::to_string),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_cli_token_wins() {
        let token = resolve_token_with(
            Some("cli"),
            &settings(Some("file"), None),
            env_from(&[("GITHUB_TOKEN", "env")]),
        )
        .unwrap();
        assert_eq!(token, "cli");
    }

    #[test]
    fn test_env_token_order() {
        let env = env_from(&[("GITHUB_TOKEN", "first"), ("GH_TOKEN", "second")]);
        assert_eq!(
            resolve_token_with(None, &Settings::default(), env).unwrap(),
            "first"
        );

        let env = env_from(&[("GH_TOKEN", "second")]);
        assert_eq!(
            resolve_token_with(None, &Settings::default(), env).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_settings_token_last() {
        let token =
            resolve_token_with(None, &settings(Some("file"), None), env_from(&[])).unwrap();
        assert_eq!(token, "file");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let token = resolve_token_with(
            Some(""),
            &settings(Some("file"), None),
            env_from(&[("GITHUB_TOKEN", "  ")]),
        )
        .unwrap();
        assert_eq!(token, "file");
    }

    #[test]
    fn test_token_not_found() {
        let err = resolve_token_with(None, &Settings::default(), env_from(&[])).unwrap_err();
        match err {
            OctoError::TokenNotFound(msg) => {
                assert!(msg.contains("No API token found"));
                assert!(msg.contains("GITHUB_TOKEN, GH_TOKEN"));
            }
            other => panic!("Expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_url_resolution_order() {
        let file = settings(None, Some("https://file.example.com/api/graphql"));
        let env = env_from(&[("GITHUB_GRAPHQL_URL", "https://env.example.com/api/graphql")]);

        assert_eq!(
            resolve_url_with(Some("https://cli.example.com/api/graphql"), &file, &env),
            "https://cli.example.com/api/graphql"
        );
        assert_eq!(
            resolve_url_with(None, &file, &env),
            "https://env.example.com/api/graphql"
        );
        assert_eq!(
            resolve_url_with(None, &file, env_from(&[])),
            "https://file.example.com/api/graphql"
        );
        assert_eq!(
            resolve_url_with(None, &Settings::default(), env_from(&[])),
            api::DEFAULT_URL
        );
    }
}
