//! Table view of an account evaluation balance (kt00018) payload.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};
use serde_json::Value;

use super::format::{format_amount, format_price, format_rate};

/// Summary fields: (payload key, label, is_rate)
const TOTALS: &[(&str, &str, bool)] = &[
    ("tot_pur_amt", "Total purchase", false),
    ("tot_evlt_amt", "Total evaluation", false),
    ("tot_evlt_pl", "Evaluation P/L", false),
    ("tot_prft_rt", "Return", true),
    ("prsm_dpst_aset_amt", "Estimated deposit assets", false),
];

/// Holding rows live under this key
pub const HOLDINGS_KEY: &str = "acnt_evlt_remn_indv_tot";

fn field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Create a borderless table with the given headers.
fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

fn numeric(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Render totals and holdings; unknown payloads fall back to pretty JSON
pub fn render_balance(data: &Value) -> String {
    let totals: Vec<(&str, String)> = TOTALS
        .iter()
        .filter_map(|(key, label, is_rate)| {
            field(data, key).map(|raw| {
                let text = if *is_rate {
                    format_rate(raw)
                } else {
                    format_amount(raw)
                };
                (*label, text)
            })
        })
        .collect();

    let holdings = data.get(HOLDINGS_KEY).and_then(Value::as_array);

    if totals.is_empty() && holdings.is_none() {
        return serde_json::to_string_pretty(data).unwrap_or_default();
    }

    let mut sections = Vec::new();

    if !totals.is_empty() {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING);
        for (label, text) in totals {
            table.add_row(vec![Cell::new(label), numeric(text)]);
        }
        sections.push(format!("{}\n{table}", console::style("Account summary").bold()));
    }

    match holdings {
        Some(rows) if !rows.is_empty() => {
            let mut table = list_table(&[
                "code", "name", "qty", "avg price", "price", "p/l", "return",
            ]);
            for row in rows {
                let text = |key: &str| field(row, key).unwrap_or("-").trim().to_string();
                table.add_row(vec![
                    Cell::new(text("stk_cd")),
                    Cell::new(text("stk_nm")),
                    numeric(format_amount(&text("rmnd_qty"))),
                    numeric(format_price(&text("pur_pric"))),
                    numeric(format_price(&text("cur_prc"))),
                    numeric(format_amount(&text("evltv_prft"))),
                    numeric(format_rate(&text("prft_rt"))),
                ]);
            }
            sections.push(format!(
                "{} {}:\n{table}",
                console::style(rows.len()).bold(),
                if rows.len() == 1 { "holding" } else { "holdings" }
            ));
        }
        Some(_) => sections.push("No holdings found.".to_string()),
        None => {}
    }

    sections.join("\n\n")
}
