use chrono::{Datelike, Utc};
use contracts::reports::filter::{quarter_of_month, FilterMode};
use contracts::reports::options::UserAccount;
use leptos::prelude::*;

use crate::reports::options::{visible_job_positions, FilterOptions};
use crate::shared::date_utils::{month_options, quarter_options, year_options};

const LABEL_STYLE: &str =
    "display: block; margin-bottom: 6px; font-size: 0.85rem; font-weight: 500; color: #495057;";
const SELECT_STYLE: &str = "width: 100%; padding: 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;";

/// Shared filter bar used by every report page.
///
/// Owns no state; the page passes its filter signals in. Switching the mode
/// resets quarter/month to the current period, and changing the team or
/// job position clears the picked user so a hidden user can never stay
/// selected. With `monthly_only` the mode select disappears and the period
/// stays pinned to month + year.
#[component]
pub fn ReportFilterPanel(
    mode: RwSignal<FilterMode>,
    year: RwSignal<i32>,
    quarter: RwSignal<u32>,
    month: RwSignal<u32>,
    country_id: RwSignal<Option<i32>>,
    job_position: RwSignal<Option<String>>,
    team_number: RwSignal<Option<i32>>,
    user_id: RwSignal<Option<i64>>,
    #[prop(into)] options: Signal<FilterOptions>,
    #[prop(into)] visible_users: Signal<Vec<UserAccount>>,
    #[prop(optional)] monthly_only: bool,
) -> impl IntoView {
    let today = Utc::now().date_naive();
    let quarters = quarter_options(today);
    let years = year_options(today);
    let months = month_options();

    let on_mode_change = move |ev| {
        let Some(next) = FilterMode::parse(&event_target_value(&ev)) else {
            return;
        };
        mode.set(next);
        let today = Utc::now().date_naive();
        match next {
            FilterMode::Quarterly => quarter.set(quarter_of_month(today.month())),
            FilterMode::Monthly => month.set(today.month()),
            _ => {}
        }
    };

    // The period selects swap with the mode; the option lists are fixed for
    // the lifetime of the page.
    let period_selects = move || match mode.get() {
        FilterMode::Quarterly => {
            let quarters = quarters.clone();
            view! {
                <div>
                    <label style=LABEL_STYLE>"ไตรมาส"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || format!("{}-{}", year.get(), quarter.get())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            if let Some((y, q)) = value.split_once('-') {
                                if let (Ok(y), Ok(q)) = (y.parse::<i32>(), q.parse::<u32>()) {
                                    year.set(y);
                                    quarter.set(q);
                                }
                            }
                        }
                    >
                        {quarters
                            .iter()
                            .map(|option| {
                                let value = format!("{}-{}", option.year, option.quarter);
                                view! { <option value=value>{option.label.clone()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
            }
            .into_any()
        }
        FilterMode::Monthly => {
            let months = months.clone();
            let years = years.clone();
            view! {
                <div>
                    <label style=LABEL_STYLE>"เดือน"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || month.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                month.set(value);
                            }
                        }
                    >
                        {months
                            .iter()
                            .map(|(number, name)| {
                                view! { <option value=number.to_string()>{*name}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div>
                    <label style=LABEL_STYLE>"ปี"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || year.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                                year.set(value);
                            }
                        }
                    >
                        {years
                            .iter()
                            .map(|y| view! { <option value=y.to_string()>{*y}</option> })
                            .collect_view()}
                    </select>
                </div>
            }
            .into_any()
        }
        FilterMode::Yearly => {
            let years = years.clone();
            view! {
                <div>
                    <label style=LABEL_STYLE>"ปี"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || year.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                                year.set(value);
                            }
                        }
                    >
                        {years
                            .iter()
                            .map(|y| view! { <option value=y.to_string()>{*y}</option> })
                            .collect_view()}
                    </select>
                </div>
            }
            .into_any()
        }
        FilterMode::All => view! { <div></div> }.into_any(),
    };

    view! {
        <div style="background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 20px; margin-bottom: 20px;">
            <h2 style="margin: 0 0 16px 0; font-size: 1.05rem; color: #212529;">"ตัวกรอง"</h2>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 14px;">
                {(!monthly_only)
                    .then(|| {
                        view! {
                            <div>
                                <label style=LABEL_STYLE>"รูปแบบรายงาน"</label>
                                <select
                                    style=SELECT_STYLE
                                    prop:value=move || mode.get().as_str().to_string()
                                    on:change=on_mode_change
                                >
                                    <option value="all">"ทั้งหมด"</option>
                                    <option value="quarterly">"รายไตรมาส"</option>
                                    <option value="monthly">"รายเดือน"</option>
                                    <option value="yearly">"รายปี"</option>
                                </select>
                            </div>
                        }
                    })}

                {period_selects}

                <div>
                    <label style=LABEL_STYLE>"ประเทศ"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || {
                            country_id.get().map(|id| id.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            country_id.set(event_target_value(&ev).parse::<i32>().ok());
                        }
                    >
                        <option value="">"ทุกประเทศ"</option>
                        {move || {
                            options
                                .get()
                                .countries
                                .iter()
                                .map(|country| {
                                    view! {
                                        <option value=country
                                            .id
                                            .to_string()>{country.name_th.clone()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div>
                    <label style=LABEL_STYLE>"👥 ตำแหน่งงาน"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || job_position.get().unwrap_or_default()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            job_position.set(if value.is_empty() { None } else { Some(value) });
                            user_id.set(None);
                        }
                    >
                        <option value="">"ทุกตำแหน่ง"</option>
                        {move || {
                            visible_job_positions(&options.get().job_positions)
                                .into_iter()
                                .map(|(value, label)| {
                                    view! { <option value=value>{label}</option> }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div>
                    <label style=LABEL_STYLE>"🏢 ทีม"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || {
                            team_number.get().map(|team| team.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            team_number.set(event_target_value(&ev).parse::<i32>().ok());
                            user_id.set(None);
                        }
                    >
                        <option value="">"ทุกทีม"</option>
                        {move || {
                            options
                                .get()
                                .teams
                                .iter()
                                .map(|team| {
                                    view! {
                                        <option value=team
                                            .team_number
                                            .to_string()>
                                            {format!("Team {}", team.team_number)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div>
                    <label style=LABEL_STYLE>"👤 ผู้ใช้"</label>
                    <select
                        style=SELECT_STYLE
                        prop:value=move || {
                            user_id.get().map(|id| id.to_string()).unwrap_or_default()
                        }
                        on:change=move |ev| {
                            user_id.set(event_target_value(&ev).parse::<i64>().ok());
                        }
                    >
                        <option value="">"ทุกคน"</option>
                        {move || {
                            visible_users
                                .get()
                                .iter()
                                .map(|user| {
                                    view! {
                                        <option value=user
                                            .id
                                            .to_string()>{user.display_name()}</option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </div>
        </div>
    }
}
