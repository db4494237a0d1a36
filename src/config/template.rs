//! Commented starter configuration written by `ghub init`

/// Template for a new `ghub.yaml`
///
/// Every setting is commented out, so the file loads as an empty
/// configuration until the user fills it in.
pub const CONFIG_TEMPLATE: &str = r#"---
# ghub configuration
#
# Authentication is chosen once per run, in this order:
#   1. username + password  -> HTTP basic auth
#   2. token                -> access_token query parameter
#   3. nothing              -> anonymous
# GITHUB_USERNAME, GITHUB_PASSWORD and GITHUB_TOKEN override these values,
# and --username/--password/--token override both.

# username: octocat
# password: secret
# token: ghp_xxxxxxxxxxxxxxxxxxxx

# API origin, for GitHub Enterprise (GITHUB_API_URL overrides it)
# base_url: https://api.github.com

# PEM bundle trusted instead of the built-in roots, relative to this file
# ca_bundle: certs/ca.pem
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_template_parses_as_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghub.yaml");
        std::fs::write(&path, CONFIG_TEMPLATE).unwrap();

        let config = Config::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }
}
