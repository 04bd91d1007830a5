use crate::bn::common::errors::Result;
use crate::bn::inference::SampleSet;
use crate::bn::model::Model;
use crate::bn::summary::{describe, grouped_describe, value_counts, ColumnStats};

/// Rows of the sample table shown on the generate page.
pub const HEAD_ROWS: usize = 5;

/// Bounds of the sample-count slider.
pub const SLIDER_MIN: usize = 100;
pub const SLIDER_MAX: usize = 1000;

/// Escapes text taken from a network definition before it is placed in HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn render_app_body(content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Bayesian Network Random Sampler</title>
    <style>
        body, html {{
            margin: 0;
            padding: 0;
            font-family: Arial, sans-serif;
        }}
        header {{
            background-color: #333;
            padding: 20px 0;
            text-align: center;
            color: white;
        }}
        main {{
            padding: 20px;
        }}
        table {{
            border-collapse: collapse;
            margin-bottom: 20px;
        }}
        th, td {{
            border: 1px solid #999;
            padding: 4px 10px;
            text-align: right;
        }}
        .bar {{
            display: inline-block;
            height: 16px;
            background-color: #007bff;
        }}
    </style>
</head>
<body>
    <header>
        <h1>Bayesian Network Random Sampler</h1>
        <p>This application simulates a student performance model using a Bayesian Network</p>
    </header>
    <main>
{content}
    </main>
</body>
</html>
"#
    )
}

/// The sampling form. The slider bounds are a presentation choice; the
/// sampler itself accepts any non-negative count, so the shown value is
/// clamped into the slider range.
pub fn render_form(default_samples: usize) -> String {
    let default_samples = default_samples.clamp(SLIDER_MIN, SLIDER_MAX);
    format!(
        r#"<h2>Sampling Parameters</h2>
<form action="/generate" method="get">
    <label for="samples">Number of samples: <output id="samples_value">{default_samples}</output></label><br>
    <input type="range" id="samples" name="samples" min="{SLIDER_MIN}" max="{SLIDER_MAX}" value="{default_samples}"
        oninput="document.getElementById('samples_value').value = this.value">
    <br><br>
    <button type="submit">Generate Samples</button>
</form>
"#
    )
}

pub fn render_samples(model: &Model, set: &SampleSet) -> Result<String> {
    let mut html = String::new();
    html.push_str(&render_form(set.len()));
    html.push_str("<h2>Generated Samples</h2>\n");
    html.push_str(&format!("<p>{} samples, id {}</p>\n", set.len(), set.id()));
    html.push_str(&render_head(model, set));

    html.push_str("<h2>Visualizations</h2>\n");
    for variable in model.variables() {
        let counts = value_counts(set, model, &variable.name)?;
        html.push_str(&render_histogram(model, &variable.name, &counts));
    }
    for (parent, child) in model.edges() {
        html.push_str(&render_grouped(model, set, parent, child)?);
    }

    html.push_str("<h2>Summary Statistics</h2>\n");
    html.push_str(&render_stats_table("column", &describe(set)));
    Ok(html)
}

fn render_head(model: &Model, set: &SampleSet) -> String {
    let mut html = String::from("<table>\n<tr><th></th>");
    for column in set.columns() {
        html.push_str(&format!("<th>{}</th>", escape_html(column)));
    }
    html.push_str("</tr>\n");
    for index in 0..set.len().min(HEAD_ROWS) {
        html.push_str(&format!("<tr><td>{index}</td>"));
        if let Some(record) = set.labeled_record(index, model) {
            for column in set.columns() {
                let label = record.get(column).map(String::as_str).unwrap_or("");
                html.push_str(&format!("<td>{}</td>", escape_html(label)));
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

fn render_histogram(model: &Model, raw_name: &str, counts: &[usize]) -> String {
    let total: usize = counts.iter().sum();
    let name = escape_html(raw_name);
    let mut html = format!("<h3>Distribution of {name}</h3>\n<table>\n<tr><th>{name}</th><th>Frequency</th><th></th></tr>\n");
    for (outcome, count) in counts.iter().enumerate() {
        let label = escape_html(&model
            .variable(raw_name)
            .map(|v| v.label(outcome))
            .unwrap_or_else(|| outcome.to_string()));
        let width = if total == 0 {
            0.0
        } else {
            300.0 * *count as f64 / total as f64
        };
        html.push_str(&format!(
            "<tr><td>{label}</td><td>{count}</td><td style=\"text-align:left\"><span class=\"bar\" style=\"width:{width:.0}px\"></span></td></tr>\n"
        ));
    }
    html.push_str("</table>\n");
    html
}

fn render_grouped(model: &Model, set: &SampleSet, by: &str, of: &str) -> Result<String> {
    let groups = grouped_describe(set, model, by, of)?;
    let mut stats = Vec::with_capacity(groups.len());
    for group in groups {
        let mut row = group.stats;
        row.name = format!("{by}={}", group.label);
        stats.push(row);
    }
    Ok(format!(
        "<h3>{} vs {}</h3>\n{}",
        escape_html(by),
        escape_html(of),
        render_stats_table(by, &stats)
    ))
}

fn render_stats_table(heading: &str, stats: &[ColumnStats]) -> String {
    let heading = escape_html(heading);
    let mut html = format!(
        "<table>\n<tr><th>{heading}</th><th>count</th><th>mean</th><th>std</th><th>min</th><th>25%</th><th>50%</th><th>75%</th><th>max</th></tr>\n"
    );
    for s in stats {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td><td>{:.3}</td></tr>\n",
            escape_html(&s.name), s.count, s.mean, s.std, s.min, s.q25, s.q50, s.q75, s.max
        ));
    }
    html.push_str("</table>\n");
    html
}
