//! Rendering of API responses for the terminal

use anyhow::{Result, bail};
use colored::*;
use ghub_api::Response;
use std::fmt::Write;

/// Status line, e.g. `HTTP 201`, colored by status class
pub fn status_line(response: &Response) -> String {
    let line = format!("HTTP {}", response.status_code());
    match response.status_code() {
        200..=299 => line.green().bold().to_string(),
        300..=399 => line.yellow().bold().to_string(),
        _ => line.red().bold().to_string(),
    }
}

/// Render a response as text
///
/// The body is pretty-printed JSON; an empty or non-JSON body renders as
/// nothing. Headers are included when `include_headers` is set.
pub fn render(response: &Response, include_headers: bool) -> String {
    let mut out = String::new();

    if include_headers {
        let _ = writeln!(out, "{}", status_line(response));
        for (name, value) in response.headers() {
            let _ = writeln!(out, "{}: {}", name.cyan(), value);
        }
        out.push('\n');
    }

    if response.has_body() {
        let body = serde_json::to_string_pretty(response.body())
            .unwrap_or_else(|_| response.body().to_string());
        out.push_str(&body);
        out.push('\n');
    }

    out
}

/// Print a response and fail when the status is not 2xx
pub fn print_response(response: &Response, include_headers: bool) -> Result<()> {
    print!("{}", render(response, include_headers));

    if !response.is_success() {
        if !include_headers {
            eprintln!("{}", status_line(response));
        }
        bail!("GitHub API returned status {}", response.status_code());
    }
    Ok(())
}
