//! Implementation of the `kiwoom balance` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

use super::{build_client, CommandContext, CredentialArgs};
use crate::application::BalanceFlow;
use crate::cli::display::render_balance;
use crate::cli::output::{failure_to_human, output, CommandOutput};
use crate::domain::models::{Envelope, Exchange, QueryType, TokenField};
use crate::infrastructure::credentials;

#[derive(Args, Debug)]
pub struct BalanceArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Response field holding the token
    #[arg(long, default_value = "token")]
    pub token_field: TokenField,

    /// Query type: 1 (aggregated) or 2 (per-item); defaults to config
    #[arg(long)]
    pub qry_tp: Option<QueryType>,

    /// Exchange: KRX or NXT; defaults to config
    #[arg(long)]
    pub exchange: Option<Exchange>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct BalanceOutput(pub Envelope);

impl CommandOutput for BalanceOutput {
    fn to_human(&self) -> String {
        match (self.0.success, self.0.data.as_ref()) {
            (true, Some(data)) => render_balance(data),
            _ => failure_to_human(&self.0),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        self.0.to_json()
    }
}

pub async fn execute(args: BalanceArgs, ctx: &CommandContext) -> Result<()> {
    let (credentials, source) = credentials::resolve(
        args.credentials.app_key.as_deref(),
        args.credentials.secret_key.as_deref(),
        &ctx.config,
    )?;
    let query = ctx.config.query.to_query(args.qry_tp, args.exchange);
    tracing::debug!(?source, ?query, token_field = %args.token_field, "Fetching balance");

    let flow = BalanceFlow::new(Arc::new(build_client(&ctx.config)?));
    let envelope = flow.run(&credentials, args.token_field, &query).await;

    output(&BalanceOutput(envelope), ctx.format);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_human_output_renders_table_on_success() {
        let out = BalanceOutput(Envelope::success(json!({"tot_pur_amt": "000000001000"})));
        assert!(out.to_human().contains("1,000"));
    }

    #[test]
    fn test_human_output_on_failure() {
        let out = BalanceOutput(Envelope::failure("토큰 발급 실패"));
        assert!(out.to_human().contains("토큰 발급 실패"));
    }
}
