//! SVG line chart of a decay curve.
//!
//! x axis: days since last practice, y axis: strength 0..=100 %.

use skill_decay_algo::CurvePoint;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 56.0;
const X_TICKS: u32 = 5;
const Y_TICKS: [f64; 5] = [0.0, 25.0, 50.0, 75.0, 100.0];

pub const TITLE: &str = "Skill Decay Curve";
pub const X_LABEL: &str = "Days since last practice";
pub const Y_LABEL: &str = "Skill strength (%)";

struct Plot {
    max_day: f64,
}

impl Plot {
    fn x(&self, day: f64) -> f64 {
        let inner = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        MARGIN_LEFT + day / self.max_day * inner
    }

    fn y(&self, strength_pct: f64) -> f64 {
        let inner = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        MARGIN_TOP + (1.0 - strength_pct.clamp(0.0, 100.0) / 100.0) * inner
    }
}

pub fn render_decay_chart(samples: &[CurvePoint]) -> String {
    let last_day = samples.last().map(|p| p.day_offset).unwrap_or(0);
    // a single-point curve still gets a one-day wide axis
    let plot = Plot {
        max_day: f64::from(last_day.max(1)),
    };

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="12">"#
    ));
    lines.push(format!(
        r#"<text x="{}" y="24" text-anchor="middle" font-size="16">{TITLE}</text>"#,
        WIDTH / 2.0
    ));

    // axes
    let (x0, y0) = (plot.x(0.0), plot.y(0.0));
    lines.push(format!(
        r#"<line x1="{x0}" y1="{y0}" x2="{}" y2="{y0}" stroke="black"/>"#,
        plot.x(plot.max_day)
    ));
    lines.push(format!(
        r#"<line x1="{x0}" y1="{y0}" x2="{x0}" y2="{}" stroke="black"/>"#,
        plot.y(100.0)
    ));

    for value in Y_TICKS {
        lines.push(format!(
            r#"<text x="{}" y="{}" text-anchor="end">{value}</text>"#,
            x0 - 8.0,
            plot.y(value) + 4.0
        ));
    }

    let step = (last_day / X_TICKS).max(1);
    for day in (0..=last_day.max(1)).step_by(step as usize) {
        lines.push(format!(
            r#"<text x="{}" y="{}" text-anchor="middle">{day}</text>"#,
            plot.x(f64::from(day)),
            y0 + 18.0
        ));
    }

    lines.push(format!(
        r#"<text x="{}" y="{}" text-anchor="middle">{X_LABEL}</text>"#,
        (MARGIN_LEFT + WIDTH - MARGIN_RIGHT) / 2.0,
        HEIGHT - 12.0
    ));
    let mid_y = (MARGIN_TOP + HEIGHT - MARGIN_BOTTOM) / 2.0;
    lines.push(format!(
        r#"<text x="16" y="{mid_y}" text-anchor="middle" transform="rotate(-90 16 {mid_y})">{Y_LABEL}</text>"#
    ));

    let points = samples
        .iter()
        .map(|p| {
            format!(
                "{:.2},{:.2}",
                plot.x(f64::from(p.day_offset)),
                plot.y(p.strength_pct)
            )
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(format!(
        r##"<polyline fill="none" stroke="#1f77b4" stroke-width="2" points="{points}"/>"##
    ));

    lines.push("</svg>".to_string());

    let mut svg = lines.join("\n");
    svg.push('\n');
    svg
}
