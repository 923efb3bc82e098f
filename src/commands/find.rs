use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::{config::Config, finder::Finder, source::SourceSpec};

/// Resolves every spec and prints the asset URLs, one per line.
///
/// All specs are parsed before the first request goes out, so a typo fails
/// fast without touching the network.
#[tracing::instrument(skip(config, out))]
pub async fn find<W: Write>(specs: &[String], config: &Config, out: &mut W) -> Result<()> {
    let targets = specs
        .iter()
        .map(|s| {
            let spec = s.parse::<SourceSpec>()?;
            let label = spec.to_string();
            Ok((label, spec.into_finder(&config.http_client, &config.api_url)))
        })
        .collect::<Result<Vec<_>>>()?;

    run(&targets, out).await
}

/// Runs the finders in order. The first failure stops the run.
pub async fn run<F: Finder, W: Write>(targets: &[(String, F)], out: &mut W) -> Result<()> {
    for (label, finder) in targets {
        let urls = finder
            .find()
            .await
            .with_context(|| format!("Failed to find assets for {}", label))?;

        debug!("{}: {} asset(s)", label, urls.len());

        for url in urls {
            writeln!(out, "{}", url).context("Failed to write output")?;
        }
    }
    out.flush().context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FindError;
    use crate::finder::MockFinder;
    use reqwest::StatusCode;

    fn mock_returning(urls: Vec<&'static str>) -> MockFinder {
        let mut finder = MockFinder::new();
        finder
            .expect_find()
            .times(1)
            .returning(move || Ok(urls.iter().map(|u| u.to_string()).collect()));
        finder
    }

    #[tokio::test]
    async fn test_run_prints_urls_in_order() {
        let targets = vec![
            (
                "owner/one".to_string(),
                mock_returning(vec!["https://x/a.tar.gz", "https://x/b.zip"]),
            ),
            ("owner/two".to_string(), mock_returning(vec!["https://y/c"])),
        ];

        let mut out = Vec::new();
        run(&targets, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "https://x/a.tar.gz\nhttps://x/b.zip\nhttps://y/c\n"
        );
    }

    #[tokio::test]
    async fn test_run_empty_release_prints_nothing() {
        let targets = vec![("owner/repo".to_string(), mock_returning(vec![]))];

        let mut out = Vec::new();
        run(&targets, &mut out).await.unwrap();

        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_stops_at_first_failure() {
        let mut failing = MockFinder::new();
        failing.expect_find().times(1).returning(|| {
            Err(FindError::Api {
                status: StatusCode::NOT_FOUND,
                url: "https://api.github.com/repos/owner/gone/releases/latest".to_string(),
            })
        });
        let mut never = MockFinder::new();
        never.expect_find().never();

        let targets = vec![
            ("owner/gone".to_string(), failing),
            ("owner/next".to_string(), never),
        ];

        let mut out = Vec::new();
        let err = run(&targets, &mut out).await.unwrap_err();

        assert!(out.is_empty());
        assert!(err.to_string().contains("owner/gone"));
        let cause = err.downcast_ref::<FindError>().unwrap();
        assert!(cause.to_string().contains("404 Not Found"));
    }

    #[tokio::test]
    async fn test_find_rejects_bad_spec_before_any_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let config = Config::new(Some(server.url()), None).unwrap();
        let specs = vec!["owner/repo".to_string(), "not-a-repo".to_string()];

        let mut out = Vec::new();
        let result = find(&specs, &config, &mut out).await;

        mock.assert_async().await;
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_find_mixes_release_and_direct_specs() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/owner/repo/releases/tags/v1.0.0")
            .with_status(200)
            .with_body(r#"{"assets":[{"browser_download_url":"https://x/tool.tar.gz"}]}"#)
            .create_async()
            .await;

        let config = Config::new(Some(server.url()), None).unwrap();
        let specs = vec![
            "owner/repo@v1.0.0".to_string(),
            "https://example.com/other.zip".to_string(),
        ];

        let mut out = Vec::new();
        find(&specs, &config, &mut out).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "https://x/tool.tar.gz\nhttps://example.com/other.zip\n"
        );
    }
}
