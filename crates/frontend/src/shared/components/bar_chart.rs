use leptos::prelude::*;

/// One colored bar inside a chart row.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    /// Text rendered to the right of the bar, e.g. the formatted value.
    pub label: String,
    pub value: f64,
    /// CSS color of the bar.
    pub color: &'static str,
}

/// One named row of a horizontal bar chart; a row may carry several bars
/// (e.g. gross and net commission side by side).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    /// Display name, already truncated by the series builder.
    pub name: String,
    /// Full untruncated name for the hover tooltip.
    pub title: String,
    pub bars: Vec<ChartBar>,
}

/// Longest chart row name shown, in characters.
const NAME_CHARS: usize = 15;

/// Truncate a display name to [`NAME_CHARS`], marking the cut with "...".
pub fn truncate_name(name: &str) -> String {
    let mut chars = name.chars();
    let prefix: String = chars.by_ref().take(NAME_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", prefix)
    } else {
        prefix
    }
}

/// Bar length as a percentage of the chart's largest value.
pub fn bar_width_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

fn max_value(rows: &[ChartRow]) -> f64 {
    rows.iter()
        .flat_map(|row| row.bars.iter())
        .map(|bar| bar.value)
        .fold(0.0, f64::max)
}

/// HBarChart component - horizontal bars scaled against the series maximum
#[component]
pub fn HBarChart(
    /// Chart heading
    #[prop(into)]
    heading: String,
    /// Prepared series rows
    #[prop(into)]
    rows: Signal<Vec<ChartRow>>,
) -> impl IntoView {
    view! {
        <div style="background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 20px 24px; margin-bottom: 16px;">
            <h2 style="margin: 0 0 14px 0; font-size: 16px; font-weight: 600; color: #212121;">{heading}</h2>
            {move || {
                let rows = rows.get();
                if rows.is_empty() {
                    return view! {
                        <div style="padding: 24px; text-align: center; color: #888; font-size: 14px;">
                            "ไม่พบข้อมูล"
                        </div>
                    }.into_any();
                }
                let max = max_value(&rows);
                rows.into_iter().map(|row| {
                    let bars = row.bars.into_iter().map(|bar| {
                        let width = bar_width_percent(bar.value, max);
                        view! {
                            <div style="display: flex; align-items: center; gap: 8px; margin: 2px 0;">
                                <div style=format!(
                                    "height: 14px; border-radius: 3px; background: {}; width: {:.1}%; min-width: 2px;",
                                    bar.color, width
                                )></div>
                                <span style="font-size: 12px; color: #555; white-space: nowrap;">{bar.label}</span>
                            </div>
                        }
                    }).collect_view();
                    view! {
                        <div style="display: flex; align-items: center; margin-bottom: 8px;">
                            <div
                                style="width: 150px; flex-shrink: 0; font-size: 13px; color: #333; overflow: hidden; white-space: nowrap;"
                                title=row.title
                            >
                                {row.name}
                            </div>
                            <div style="flex: 1;">{bars}</div>
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_name_short_names_untouched() {
        assert_eq!(truncate_name("Bangkok Tours"), "Bangkok Tours");
        assert_eq!(truncate_name("123456789012345"), "123456789012345");
    }

    #[test]
    fn test_truncate_name_long_names_get_ellipsis() {
        assert_eq!(truncate_name("1234567890123456"), "123456789012345...");
        // Thai names count characters, not bytes.
        assert_eq!(
            truncate_name("บริษัททัวร์ไทยแลนด์จำกัดมหาชน"),
            "บริษัททัวร์ไทยแ..."
        );
    }

    #[test]
    fn test_bar_width_scales_to_max() {
        assert_eq!(bar_width_percent(50.0, 100.0), 50.0);
        assert_eq!(bar_width_percent(100.0, 100.0), 100.0);
        assert_eq!(bar_width_percent(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_bar_width_zero_max_is_zero() {
        assert_eq!(bar_width_percent(10.0, 0.0), 0.0);
        assert_eq!(bar_width_percent(10.0, -5.0), 0.0);
    }

    #[test]
    fn test_bar_width_clamps_overflow() {
        assert_eq!(bar_width_percent(200.0, 100.0), 100.0);
    }

    #[test]
    fn test_max_value_spans_all_bars() {
        let rows = vec![
            ChartRow {
                name: "A".to_string(),
                title: "A".to_string(),
                bars: vec![
                    ChartBar {
                        label: String::new(),
                        value: 10.0,
                        color: "#1976d2",
                    },
                    ChartBar {
                        label: String::new(),
                        value: 70.0,
                        color: "#388e3c",
                    },
                ],
            },
            ChartRow {
                name: "B".to_string(),
                title: "B".to_string(),
                bars: vec![ChartBar {
                    label: String::new(),
                    value: 40.0,
                    color: "#1976d2",
                }],
            },
        ];
        assert_eq!(max_value(&rows), 70.0);
        assert_eq!(max_value(&[]), 0.0);
    }
}
