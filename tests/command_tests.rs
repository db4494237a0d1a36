//! Command execution against a mock GitHub API

mod support;

use ghub::commands::{
    ApiCommand, Command, GistsAction, GistsCommand, InitCommand, IssuesAction, IssuesCommand,
    PullsAction, PullsCommand,
};
use ghub::config::{CONFIG_TEMPLATE, Config};
use serde_json::json;
use support::{Workspace, context_for, json_response};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_config() -> Config {
    Config {
        token: Some("ghp_test".to_string()),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_api_command_posts_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(query_param("access_token", "ghp_test"))
        .and(body_json(json!({"name": "demo"})))
        .respond_with(json_response(201, json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let context = context_for(&server, token_config());
    let command = ApiCommand {
        path: "user/repos".to_string(),
        method: "post".to_string(),
        data: Some(r#"{"name":"demo"}"#.to_string()),
        include_headers: true,
    };

    command.execute(&context).await.unwrap();
}

#[tokio::test]
async fn test_api_command_fails_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/o/missing"))
        .respond_with(json_response(404, json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let context = context_for(&server, Config::default());
    let command = ApiCommand {
        path: "/repos/o/missing".to_string(),
        method: "GET".to_string(),
        data: None,
        include_headers: false,
    };

    let error = command.execute(&context).await.unwrap_err();
    assert!(error.to_string().contains("404"));
}

#[tokio::test]
async fn test_api_command_rejects_bad_input_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let context = context_for(&server, Config::default());
    let bad_path = ApiCommand {
        path: "https://evil.example.com/user".to_string(),
        method: "GET".to_string(),
        data: None,
        include_headers: false,
    };
    assert!(bad_path.execute(&context).await.is_err());

    let bad_data = ApiCommand {
        path: "/user".to_string(),
        method: "POST".to_string(),
        data: Some("not json".to_string()),
        include_headers: false,
    };
    assert!(bad_data.execute(&context).await.is_err());
}

#[tokio::test]
async fn test_gists_command_star() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/gists/aa5a315d61ae9438b18d/star"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let context = context_for(&server, token_config());
    let command = GistsCommand {
        action: GistsAction::Star {
            id: "aa5a315d61ae9438b18d".to_string(),
        },
        include_headers: false,
    };

    command.execute(&context).await.unwrap();
}

#[tokio::test]
async fn test_gists_command_list_for_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/gists"))
        .respond_with(json_response(200, json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let context = context_for(&server, Config::default());
    let command = GistsCommand {
        action: GistsAction::List {
            user: Some("octocat".to_string()),
        },
        include_headers: false,
    };

    command.execute(&context).await.unwrap();
}

#[tokio::test]
async fn test_issues_command_create_from_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/issues"))
        .and(body_json(json!({"title": "Broken", "labels": ["bug"]})))
        .respond_with(json_response(201, json!({"number": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let context = context_for(&server, token_config());
    let command = IssuesCommand {
        action: IssuesAction::Create {
            repo: "https://github.com/octocat/hello-world.git".to_string(),
            title: "Broken".to_string(),
            body: None,
            label: vec!["bug".to_string()],
        },
        include_headers: false,
    };

    command.execute(&context).await.unwrap();
}

#[tokio::test]
async fn test_issues_command_rejects_unknown_state() {
    let server = MockServer::start().await;
    let context = context_for(&server, Config::default());
    let command = IssuesCommand {
        action: IssuesAction::List {
            repo: "octocat/hello-world".to_string(),
            state: Some("merged".to_string()),
        },
        include_headers: false,
    };

    let error = command.execute(&context).await.unwrap_err();
    assert!(error.to_string().contains("merged"));
}

#[tokio::test]
async fn test_pulls_command_merge() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/pulls/42/merge"))
        .respond_with(json_response(200, json!({"merged": true})))
        .expect(1)
        .mount(&server)
        .await;

    let context = context_for(&server, token_config());
    let command = PullsCommand {
        action: PullsAction::Merge {
            repo: "git@github.com:octocat/hello-world.git".to_string(),
            number: 42,
        },
        include_headers: false,
    };

    command.execute(&context).await.unwrap();
}

#[tokio::test]
async fn test_pulls_command_list_with_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/pulls"))
        .and(query_param("state", "all"))
        .respond_with(json_response(200, json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let context = context_for(&server, Config::default());
    let command = PullsCommand {
        action: PullsAction::List {
            repo: "octocat/hello-world".to_string(),
            state: Some("all".to_string()),
        },
        include_headers: false,
    };

    command.execute(&context).await.unwrap();
}

#[tokio::test]
async fn test_init_command_writes_template() {
    let server = MockServer::start().await;
    let workspace = Workspace::new();
    let context = context_for(&server, Config::default());

    let command = InitCommand {
        output: workspace.config_str().to_string(),
        overwrite: false,
    };
    command.execute(&context).await.unwrap();

    let written = std::fs::read_to_string(&workspace.config_path).unwrap();
    assert_eq!(written, CONFIG_TEMPLATE);
    let loaded = Config::load(workspace.config_str()).unwrap();
    assert_eq!(loaded, Config::default());
}

#[tokio::test]
async fn test_init_command_respects_existing_file() {
    let server = MockServer::start().await;
    let workspace = Workspace::new();
    workspace.write_config("token: keep-me\n");
    let context = context_for(&server, Config::default());

    let refuse = InitCommand {
        output: workspace.config_str().to_string(),
        overwrite: false,
    };
    let error = refuse.execute(&context).await.unwrap_err();
    assert!(error.to_string().contains("already exists"));
    assert_eq!(
        std::fs::read_to_string(&workspace.config_path).unwrap(),
        "token: keep-me\n"
    );

    let overwrite = InitCommand {
        output: workspace.config_str().to_string(),
        overwrite: true,
    };
    overwrite.execute(&context).await.unwrap();
    assert_eq!(
        std::fs::read_to_string(&workspace.config_path).unwrap(),
        CONFIG_TEMPLATE
    );
}
