//! Hand-rendered SVG charts for the statistics dashboard.
//!
//! Geometry is computed by pure functions so the chart math is testable
//! without a DOM; the components below only lay the results out.

use std::f64::consts::PI;

use contracts::dashboards::statistics::MonthlyStat;
use leptos::prelude::*;

const FALLBACK_COLOR: &str = "#94A3B8";

/// Colors per status label, matching the table badge palette.
pub fn status_color(label: &str) -> &'static str {
    match label {
        "En transit" => "#3B82F6",
        "Echec livraison, à récupérer" | "Échec livraison, à récupérer" => "#F59E0B",
        "Envoi livré" => "#10B981",
        "Envoi retourné" => "#EF4444",
        "Déposé" => "#8B5CF6",
        "2ème présentation" => "#06B6D4",
        _ => FALLBACK_COLOR,
    }
}

pub fn payment_color(label: &str) -> &'static str {
    match label {
        "Payé" => "#10B981",
        "Impayé" => "#EF4444",
        _ => FALLBACK_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub label: String,
    pub value: u64,
    /// Share of the total, in whole percent (rounded).
    pub percent: u32,
    /// SVG path of the annular sector.
    pub path: String,
    pub color: &'static str,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Annular sector between two angles (radians, clockwise from 3 o'clock).
fn sector_path(cx: f64, cy: f64, r_outer: f64, r_inner: f64, start: f64, end: f64) -> String {
    let large = if end - start > PI { 1 } else { 0 };
    let (x1, y1) = polar(cx, cy, r_outer, start);
    let (x2, y2) = polar(cx, cy, r_outer, end);
    let (x3, y3) = polar(cx, cy, r_inner, end);
    let (x4, y4) = polar(cx, cy, r_inner, start);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z",
        x1, y1, r_outer, r_outer, large, x2, y2, x3, y3, r_inner, r_inner, large, x4, y4
    )
}

/// Build donut slices from labeled counts. Zero-valued entries are skipped;
/// slices start at 12 o'clock. The color is chosen by the given mapping.
pub fn donut_slices(
    data: &[(String, u64)],
    color_of: fn(&str) -> &'static str,
) -> Vec<DonutSlice> {
    let total: u64 = data.iter().map(|(_, v)| v).sum();
    if total == 0 {
        return Vec::new();
    }

    let cx = 100.0;
    let cy = 100.0;
    let r_outer = 90.0;
    let r_inner = 50.0;
    // A lone slice is a full ring; an exact 2π sweep collapses the arc.
    let full_turn = 2.0 * PI - 1e-4;

    let mut slices = Vec::new();
    let mut angle = -PI / 2.0;
    for (label, value) in data {
        if *value == 0 {
            continue;
        }
        let sweep = (*value as f64 / total as f64) * full_turn;
        let percent = ((*value as f64 / total as f64) * 100.0).round() as u32;
        slices.push(DonutSlice {
            label: label.clone(),
            value: *value,
            percent,
            path: sector_path(cx, cy, r_outer, r_inner, angle, angle + sweep),
            color: color_of(label),
        });
        angle += sweep;
    }
    slices
}

/// Bar height in pixels; zero when the series maximum is zero.
pub fn bar_height(value: f64, max: f64, max_px: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max) * max_px
    }
}

const FRENCH_MONTHS: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

/// "mars 2024"-style label for the trends axis.
pub fn french_month_label(year: i32, month: u32) -> String {
    let name = FRENCH_MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, year)
}

/// Months sorted chronologically for the trends chart.
pub fn sorted_monthly(stats: &[MonthlyStat]) -> Vec<MonthlyStat> {
    let mut sorted = stats.to_vec();
    sorted.sort_by_key(|m| m.period_key());
    sorted
}

/// Shared card frame around one chart.
#[component]
pub fn ChartCard(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <div class="card-header">
                <h6>{title}</h6>
            </div>
            <div class="card-body">{children()}</div>
        </div>
    }
}

/// Donut chart with a legend below; renders a placeholder when the data
/// is all zeros.
#[component]
pub fn DonutChart(
    #[prop(into)] data: Signal<Vec<(String, u64)>>,
    color_of: fn(&str) -> &'static str,
) -> impl IntoView {
    view! {
        {move || {
            let slices = donut_slices(&data.get(), color_of);
            if slices.is_empty() {
                return view! {
                    <p class="text-muted text-center">"Aucune donnée disponible"</p>
                }
                .into_any();
            }
            view! {
                <svg viewBox="0 0 200 200" class="donut-chart" role="img">
                    {slices
                        .iter()
                        .map(|slice| {
                            let tooltip = format!("{}: {}", slice.label, slice.value);
                            view! {
                                <path d=slice.path.clone() fill=slice.color>
                                    <title>{tooltip}</title>
                                </path>
                            }
                        })
                        .collect_view()}
                </svg>
                <div class="chart-legend">
                    {slices
                        .iter()
                        .map(|slice| {
                            view! {
                                <div class="chart-legend__item">
                                    <span
                                        class="chart-legend__swatch"
                                        style=format!("background-color: {};", slice.color)
                                    ></span>
                                    <span>
                                        {format!(
                                            "{} — {} ({}%)",
                                            slice.label,
                                            slice.value,
                                            slice.percent
                                        )}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

/// Monthly trends: shipment count and CRBT bars per month, each series
/// scaled to its own maximum.
#[component]
pub fn TrendsChart(#[prop(into)] data: Signal<Vec<MonthlyStat>>) -> impl IntoView {
    const BAR_AREA: f64 = 120.0;

    view! {
        {move || {
            let months = sorted_monthly(&data.get());
            if months.is_empty() {
                return view! {
                    <p class="text-muted text-center">"Aucune donnée disponible"</p>
                }
                .into_any();
            }

            let max_colis = months.iter().map(|m| m.total_colis).max().unwrap_or(0) as f64;
            let max_crbt = months
                .iter()
                .map(|m| m.total_crbt)
                .fold(0.0_f64, f64::max);

            view! {
                <div class="trends-chart">
                    {months
                        .iter()
                        .map(|month| {
                            let colis_px =
                                bar_height(month.total_colis as f64, max_colis, BAR_AREA);
                            let crbt_px = bar_height(month.total_crbt, max_crbt, BAR_AREA);
                            let colis_tip =
                                format!("{} colis", month.total_colis);
                            let crbt_tip = format!("{:.0} MAD", month.total_crbt);
                            view! {
                                <div class="trends-chart__month">
                                    <div class="trends-chart__bars">
                                        <div
                                            class="trends-chart__bar trends-chart__bar--colis"
                                            style=format!("height: {:.0}px;", colis_px)
                                            title=colis_tip
                                        ></div>
                                        <div
                                            class="trends-chart__bar trends-chart__bar--crbt"
                                            style=format!("height: {:.0}px;", crbt_px)
                                            title=crbt_tip
                                        ></div>
                                    </div>
                                    <small class="trends-chart__label">
                                        {french_month_label(month.year, month.month)}
                                    </small>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="chart-legend">
                    <div class="chart-legend__item">
                        <span
                            class="chart-legend__swatch"
                            style="background-color: #3B82F6;"
                        ></span>
                        <span>"Total envois"</span>
                    </div>
                    <div class="chart-legend__item">
                        <span
                            class="chart-legend__swatch"
                            style="background-color: #10B981;"
                        ></span>
                        <span>"Total CRBT"</span>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

/// Horizontal bars of the busiest destination cities.
#[component]
pub fn CityChart(
    #[prop(into)] data: Signal<Vec<(String, u64)>>,
    #[prop(default = 8)] top: usize,
) -> impl IntoView {
    view! {
        {move || {
            let cities = data.get();
            if cities.is_empty() {
                return view! {
                    <p class="text-muted text-center">"Aucune donnée disponible"</p>
                }
                .into_any();
            }
            let max = cities.iter().map(|(_, c)| *c).max().unwrap_or(0) as f64;
            view! {
                <div class="city-chart">
                    {cities
                        .iter()
                        .take(top)
                        .map(|(name, count)| {
                            let width = bar_height(*count as f64, max, 100.0);
                            view! {
                                <div class="city-chart__row">
                                    <span class="city-chart__name">{name.clone()}</span>
                                    <div class="city-chart__track">
                                        <div
                                            class="city-chart__bar"
                                            style=format!("width: {:.0}%;", width)
                                        ></div>
                                    </div>
                                    <span class="city-chart__count">{*count}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donut_slices_split_percentages() {
        let data = vec![
            ("Envoi livré".to_string(), 3),
            ("En transit".to_string(), 1),
        ];
        let slices = donut_slices(&data, status_color);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].percent, 75);
        assert_eq!(slices[1].percent, 25);
        assert_eq!(slices[0].color, "#10B981");
        assert!(slices[0].path.starts_with("M "));
    }

    #[test]
    fn test_donut_skips_zero_values_and_empty_totals() {
        let data = vec![
            ("Envoi livré".to_string(), 0),
            ("En transit".to_string(), 0),
        ];
        assert!(donut_slices(&data, status_color).is_empty());

        let data = vec![
            ("Envoi livré".to_string(), 5),
            ("En transit".to_string(), 0),
        ];
        let slices = donut_slices(&data, status_color);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].percent, 100);
    }

    #[test]
    fn test_unknown_labels_get_fallback_color() {
        assert_eq!(status_color("Perdu"), FALLBACK_COLOR);
        assert_eq!(payment_color("Autre"), FALLBACK_COLOR);
    }

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(5.0, 10.0, 100.0), 50.0);
        assert_eq!(bar_height(3.0, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_french_month_label() {
        assert_eq!(french_month_label(2024, 1), "janv. 2024");
        assert_eq!(french_month_label(2024, 8), "août 2024");
        assert_eq!(french_month_label(2024, 13), "? 2024");
    }

    #[test]
    fn test_sorted_monthly() {
        let stats = vec![
            MonthlyStat { year: 2024, month: 3, total_colis: 1, total_crbt: 0.0 },
            MonthlyStat { year: 2023, month: 12, total_colis: 2, total_crbt: 0.0 },
            MonthlyStat { year: 2024, month: 1, total_colis: 3, total_crbt: 0.0 },
        ];
        let sorted = sorted_monthly(&stats);
        assert_eq!(
            sorted.iter().map(|m| m.period_key()).collect::<Vec<_>>(),
            vec!["2023-12", "2024-01", "2024-03"]
        );
    }
}
