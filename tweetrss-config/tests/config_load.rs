use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use tweetrss_config::{ConfigLoadError, TweetRssConfigLoader};

const ALL_VARS: [&str; 8] = [
    "TWITTER_CONSUMER_KEY",
    "TWITTER_CONSUMER_SECRET",
    "TWITTER_ACCESS_TOKEN",
    "TWITTER_ACCESS_TOKEN_SECRET",
    "TWITTER_DOMAIN",
    "TWITTER_WOEID",
    "TWITTER_COUNT",
    "TWITTER_API_BASE",
];

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

fn cleared_except(vars: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
    ALL_VARS
        .iter()
        .map(|name| {
            let value = vars.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
            (*name, value)
        })
        .collect()
}

#[test]
#[serial]
fn credentials_load_from_environment() {
    let vars = cleared_except(&[
        ("TWITTER_CONSUMER_KEY", "ck"),
        ("TWITTER_CONSUMER_SECRET", "cs"),
        ("TWITTER_ACCESS_TOKEN", "at"),
        ("TWITTER_ACCESS_TOKEN_SECRET", "ats"),
        ("TWITTER_DOMAIN", "https://feeds.example.com/"),
    ]);
    let cfg = temp_env::with_vars(vars, || TweetRssConfigLoader::new().load()).expect("load");

    assert_eq!(cfg.credentials.consumer_key, "ck");
    assert_eq!(cfg.credentials.access_token_secret, "ats");
    assert_eq!(cfg.domain, "https://feeds.example.com/");
    assert_eq!(cfg.woeid, 1118285);
}

#[test]
#[serial]
fn missing_variable_is_named() {
    let vars = cleared_except(&[
        ("TWITTER_CONSUMER_KEY", "ck"),
        ("TWITTER_CONSUMER_SECRET", "cs"),
        ("TWITTER_ACCESS_TOKEN", "at"),
    ]);
    let err = temp_env::with_vars(vars, || TweetRssConfigLoader::new().load()).unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::MissingCredential("TWITTER_ACCESS_TOKEN_SECRET")
    ));
}

#[test]
#[serial]
fn environment_overrides_file_values() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(
        &tmp,
        "tweetrss.yaml",
        r#"
consumer_key: "${TR_TEST_KEY}"
consumer_secret: file-secret
access_token: file-token
access_token_secret: file-token-secret
domain: "https://file.example.com/"
woeid: 1
count: 50
"#,
    );

    let mut vars = cleared_except(&[
        ("TWITTER_WOEID", "23424856"),
        ("TWITTER_ACCESS_TOKEN", "env-token"),
    ]);
    vars.push(("TR_TEST_KEY", Some("expanded-key")));

    let cfg = temp_env::with_vars(vars, || TweetRssConfigLoader::new().with_file(&p).load())
        .expect("load");

    assert_eq!(cfg.credentials.consumer_key, "expanded-key");
    assert_eq!(cfg.credentials.access_token, "env-token");
    assert_eq!(cfg.credentials.consumer_secret, "file-secret");
    assert_eq!(cfg.woeid, 23424856);
    assert_eq!(cfg.count, 50);
    assert_eq!(cfg.domain, "https://file.example.com/");
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let err = temp_env::with_vars(cleared_except(&[]), || {
        TweetRssConfigLoader::new()
            .with_file(tmp.path().join("absent.yaml"))
            .load()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Source(_)));
}

#[test]
#[serial]
fn api_base_defaults_and_can_be_overridden() {
    let creds = [
        ("TWITTER_CONSUMER_KEY", "ck"),
        ("TWITTER_CONSUMER_SECRET", "cs"),
        ("TWITTER_ACCESS_TOKEN", "at"),
        ("TWITTER_ACCESS_TOKEN_SECRET", "ats"),
    ];
    let cfg = temp_env::with_vars(cleared_except(&creds), || TweetRssConfigLoader::new().load())
        .expect("load");
    assert_eq!(cfg.api_base, "https://api.twitter.com");

    let mut vars = creds.to_vec();
    vars.push(("TWITTER_API_BASE", "http://127.0.0.1:8080"));
    let cfg = temp_env::with_vars(cleared_except(&vars), || TweetRssConfigLoader::new().load())
        .expect("load");
    assert_eq!(cfg.api_base, "http://127.0.0.1:8080");
}
