use crate::scheduler::{Report, Summary};
use owo_colors::OwoColorize;

pub fn render_plain(report: &Report) -> String {
    let mut out = format!(
        "{} Time: {} Spd: {}/s All: {} ",
        report.mode, report.elapsed, report.rate, report.total
    );
    push_extras(&mut out, report);
    out
}

/// Mode and time in green, rate in cyan (red when over threshold), total in magenta.
pub fn render_colored(report: &Report) -> String {
    let head = format!("{} Time: {}", report.mode, report.elapsed);
    let speed = format!("Spd: {}/s", report.rate);
    let all = format!("All: {}", report.total);

    let mut out = if report.rate.over_threshold {
        format!("{} {} {} ", head.green(), speed.red(), all.magenta())
    } else {
        format!("{} {} {} ", head.green(), speed.cyan(), all.magenta())
    };
    push_extras(&mut out, report);
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!("All: {}", summary.total)
}

fn push_extras(out: &mut String, report: &Report) {
    if let Some(violations) = report.violations {
        out.push_str(&format!("Over: {violations} times "));
    }
    if let Some(matches) = report.matches {
        out.push_str(&format!("Match: {matches} Word "));
    }
    if let Some(memory) = &report.memory {
        out.push_str(&memory.to_string());
    }
}
