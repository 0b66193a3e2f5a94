//! HTML rendering for the prediction form

use crate::models::{FeatureDefaults, PredictionRequest};

/// Everything the form page shows
#[derive(Debug, Clone)]
pub struct PageView<'a> {
    pub defaults: &'a FeatureDefaults,
    /// Values echoed back into the inputs
    pub request: &'a PredictionRequest,
    /// Counter value the predict button submits next
    pub next_click: u64,
    /// Result region text, empty while idle
    pub output: &'a str,
}

/// `"The predicted selling price of the car is: 1,234,567 Baht"`
///
/// Ties round to even; the full magnitude is printed, never clamped.
pub fn format_price(price: f64, currency_label: &str) -> String {
    format!(
        "The predicted selling price of the car is: {} {}",
        group_thousands(&format!("{:.0}", price.round_ties_even())),
        currency_label
    )
}

fn group_thousands(number: &str) -> String {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let mut out = String::with_capacity(number.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn value_attr(value: Option<f64>) -> String {
    value.map(|v| format!(r#" value="{}""#, v)).unwrap_or_default()
}

pub fn render(view: &PageView<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Car Price Prediction</title>
<style>
body {{ font-family: sans-serif; }}
.panel {{ width: 50%; margin: auto; text-align: left; }}
.field {{ margin-bottom: 30px; }}
.field input {{ width: 100%; margin-top: 10px; }}
h1 {{ text-align: center; font-size: 32px; }}
h3 {{ font-size: 18px; color: #555; margin-bottom: 20px; }}
#output-prediction {{ text-align: center; margin-top: 20px; font-size: 20px; }}
</style>
</head>
<body>
<h1>Car Price Prediction</h1>
<div class="panel">
<h3>Instruction:<br>Please fill out the fields below. If you don't know, leave them blank to use default values.</h3>
</div>
<form class="panel" method="post" action="/">
<div class="field">
<label for="input-year">year</label>
<input id="input-year" name="year" type="number" step="any" placeholder="Enter year" required{year}>
</div>
<div class="field">
<label for="input-mileage">mileage(kmpl):</label>
<input id="input-mileage" name="mileage" type="number" step="any" placeholder="Enter mileage (default: {mileage_default})"{mileage}>
</div>
<div class="field">
<label for="input-maxpower">max power(bhp):</label>
<input id="input-maxpower" name="max_power" type="number" step="any" placeholder="Enter max power (default: {max_power_default})"{max_power}>
</div>
<button id="predict-button" type="submit" name="n_clicks" value="{next_click}">predict</button>
</form>
<div id="output-prediction">{output}</div>
</body>
</html>
"#,
        year = value_attr(view.request.year),
        mileage = value_attr(view.request.mileage),
        max_power = value_attr(view.request.max_power),
        mileage_default = format!("{:?}", view.defaults.mileage),
        max_power_default = format!("{:?}", view.defaults.max_power),
        next_click = view.next_click,
        output = escape(view.output),
    )
}
