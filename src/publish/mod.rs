use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use uuid::Uuid;

/// GitHub credentials, injected rather than read from the environment inside
/// the publishing code. Both fields are required for a real push; without
/// them the publisher degrades to a placeholder URL.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub token: Option<String>,
    pub user: Option<String>,
}

#[async_trait]
pub trait Publish: Send + Sync {
    /// Republish the checkout under a new remote and return its URL.
    async fn publish(&self, checkout: &Path, original_url: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct CreatedRepo {
    html_url: String,
}

pub struct GithubPublisher {
    creds: Credentials,
    api_base: String,
}

impl GithubPublisher {
    pub fn new(creds: Credentials) -> Self {
        Self {
            creds,
            api_base: "https://api.github.com".to_string(),
        }
    }

    /// `fixed-<original-name>-<6-hex>` from the URL's last path segment.
    fn new_repo_name(original_url: &str) -> String {
        let name = original_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("repo")
            .trim_end_matches(".git");
        let suffix = Uuid::new_v4().simple().to_string();
        format!("fixed-{}-{}", name, &suffix[..6])
    }

    fn placeholder_url(&self, name: &str) -> String {
        let user = self.creds.user.as_deref().unwrap_or("example-user");
        format!("https://github.com/{}/{}", user, name)
    }

    async fn create_remote_repo(
        &self,
        token: &str,
        name: &str,
        original_url: &str,
    ) -> Result<String> {
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{}/user/repos", self.api_base))
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, "scanfix")
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&serde_json::json!({
                "name": name,
                "private": false,
                "description": format!("Fixed version of {}", original_url),
            }))
            .send()
            .await
            .context("creating repository via GitHub API")?;

        if !response.status().is_success() {
            bail!("GitHub repo creation returned {}", response.status());
        }
        let created: CreatedRepo = response
            .json()
            .await
            .context("decoding GitHub repo creation response")?;
        Ok(created.html_url)
    }

    fn push_checkout(&self, checkout: &Path, token: &str, user: &str, name: &str) -> Result<()> {
        git(checkout, &["init", "-q"])?;
        git(checkout, &["add", "-A"])?;
        git(
            checkout,
            &[
                "-c",
                "user.name=scanfix",
                "-c",
                "user.email=scanfix@localhost",
                "commit",
                "-q",
                "--allow-empty",
                "-m",
                "Auto-fixed code",
            ],
        )?;
        let remote = format!("https://{}@github.com/{}/{}.git", token, user, name);
        git(checkout, &["push", "--force", &remote, "HEAD:main"])?;
        Ok(())
    }

    async fn try_publish(
        &self,
        checkout: &Path,
        original_url: &str,
        name: &str,
        token: &str,
        user: &str,
    ) -> Result<String> {
        let html_url = self.create_remote_repo(token, name, original_url).await?;
        self.push_checkout(checkout, token, user, name)?;
        Ok(html_url)
    }
}

#[async_trait]
impl Publish for GithubPublisher {
    async fn publish(&self, checkout: &Path, original_url: &str) -> Result<String> {
        let name = Self::new_repo_name(original_url);

        let (Some(token), Some(user)) = (self.creds.token.clone(), self.creds.user.clone())
        else {
            log::warn!("no GitHub credentials configured, returning placeholder URL");
            return Ok(self.placeholder_url(&name));
        };

        match self
            .try_publish(checkout, original_url, &name, &token, &user)
            .await
        {
            Ok(url) => Ok(url),
            Err(e) => {
                // The fixed checkout and report are already complete; a
                // failed push degrades to the placeholder, never aborts.
                log::warn!("publish failed: {:#}", e);
                Ok(self.placeholder_url(&name))
            }
        }
    }
}

fn git(dir: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("running git {}", args.join(" ")))?;
    if !output.status.success() {
        bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }
    Ok(())
}
