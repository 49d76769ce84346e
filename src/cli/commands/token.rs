//! Implementation of the `kiwoom token` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

use super::{build_client, CommandContext, CredentialArgs};
use crate::application::TokenFlow;
use crate::cli::display::format_expiry;
use crate::cli::output::{failure_to_human, output, CommandOutput};
use crate::domain::models::{Envelope, TokenField};
use crate::infrastructure::credentials;

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Response field holding the token
    #[arg(long, default_value = "access_token")]
    pub token_field: TokenField,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TokenOutput(pub Envelope);

impl CommandOutput for TokenOutput {
    fn to_human(&self) -> String {
        if !self.0.success {
            return failure_to_human(&self.0);
        }

        let data = self.0.data.as_ref();
        let text = |key: &str| {
            data.and_then(|d| d.get(key))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        };

        let mut lines = vec![format!(
            "{} token issued",
            console::style("\u{2713}").green().bold()
        )];
        if let Some(token_type) = text("token_type") {
            lines.push(format!("  type:    {token_type}"));
        }
        if let Some(expires) = text("expires_dt") {
            lines.push(format!("  expires: {}", format_expiry(&expires)));
        }
        if let Some(token) = text("token") {
            lines.push(format!("  token:   {token}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        self.0.to_json()
    }
}

pub async fn execute(args: TokenArgs, ctx: &CommandContext) -> Result<()> {
    let (credentials, source) = credentials::resolve(
        args.credentials.app_key.as_deref(),
        args.credentials.secret_key.as_deref(),
        &ctx.config,
    )?;
    tracing::debug!(?source, token_field = %args.token_field, "Issuing token");

    let flow = TokenFlow::new(Arc::new(build_client(&ctx.config)?));
    let envelope = flow.run(&credentials, args.token_field).await;

    output(&TokenOutput(envelope), ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_human_output_shows_token_details() {
        let out = TokenOutput(Envelope::success(json!({
            "token": "abc",
            "token_type": "bearer",
            "expires_dt": "20241107083713"
        })));
        let text = out.to_human();

        assert!(text.contains("token issued"));
        assert!(text.contains("bearer"));
        assert!(text.contains("2024-11-07 08:37:13"));
        assert!(text.contains("abc"));
    }

    #[test]
    fn test_json_output_is_the_envelope() {
        let envelope = Envelope::failure("토큰 발급 실패");
        assert_eq!(
            TokenOutput(envelope.clone()).to_json(),
            serde_json::to_value(envelope).unwrap()
        );
    }
}
