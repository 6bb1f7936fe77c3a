use chrono::Utc;
use contracts::reports::filter::ReportFilter;
use contracts::reports::sales_discount::DiscountSalesRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::filter_panel::ReportFilterPanel;
use crate::reports::options::{filter_users, load_filter_options, retain_valid_user, FilterOptions};
use crate::reports::sales_discount::aggregate::{
    csv_summary_row, top_by_discount, top_by_percentage, DiscountSalesTotals,
};
use crate::reports::sales_discount::api::fetch_sales_discount_report;
use crate::shared::components::bar_chart::HBarChart;
use crate::shared::components::data_table::{SortableHeaderCell, TableCard, TD_STYLE, TH_STYLE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{EmptyNotice, ErrorNotice, LoadingNotice};
use crate::shared::components::summary_card::SummaryCard;
use crate::shared::export::{build_csv, csv_filename, download_csv};
use crate::shared::fetch_guard::FetchSequence;
use crate::shared::list_utils::{create_sort_callback, sort_list};
use crate::shared::number_format::{format_currency, format_percent};
use crate::system::auth::storage;

const LOAD_ERROR: &str = "เกิดข้อผิดพลาดในการโหลดข้อมูล กรุณาลองใหม่อีกครั้ง";

/// Discount sales report: headline cards, two top-seller charts and a
/// sortable per-salesperson table with CSV export.
#[component]
pub fn DiscountSalesPage() -> impl IntoView {
    let defaults = ReportFilter::for_date(Utc::now().date_naive());
    let mode = RwSignal::new(defaults.mode);
    let year = RwSignal::new(defaults.year);
    let quarter = RwSignal::new(defaults.quarter);
    let month = RwSignal::new(defaults.month);
    let country_id = RwSignal::new(defaults.country_id);
    let job_position = RwSignal::new(defaults.job_position);
    let team_number = RwSignal::new(defaults.team_number);
    let user_id = RwSignal::new(defaults.user_id);

    let (options, set_options) = signal(FilterOptions::default());
    let (data, set_data) = signal(Vec::<DiscountSalesRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (sort_field, set_sort_field) = signal("total_discount".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let fetch_seq = StoredValue::new(FetchSequence::new());

    Effect::new(move |_| {
        spawn_local(async move {
            let token = storage::get_token();
            match load_filter_options(token.as_deref()).await {
                Ok(loaded) => set_options.set(loaded),
                Err(err) => log::error!("Failed to load filter options: {}", err),
            }
        });
    });

    let visible_users = Signal::derive(move || {
        filter_users(
            &options.get().users,
            team_number.get(),
            job_position.get().as_deref(),
        )
    });

    Effect::new(move |_| {
        let visible = visible_users.get();
        let retained = retain_valid_user(user_id.get_untracked(), &visible);
        if retained != user_id.get_untracked() {
            user_id.set(retained);
        }
    });

    Effect::new(move |_| {
        let filter = ReportFilter {
            mode: mode.get(),
            year: year.get(),
            quarter: quarter.get(),
            month: month.get(),
            country_id: country_id.get(),
            job_position: job_position.get(),
            team_number: team_number.get(),
            user_id: user_id.get(),
        };
        let ticket = {
            let mut seq = fetch_seq.get_value();
            let ticket = seq.begin();
            fetch_seq.set_value(seq);
            ticket
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let token = storage::get_token();
            let result = fetch_sales_discount_report(&filter, token.as_deref()).await;
            if !fetch_seq.get_value().is_current(ticket) {
                return;
            }
            match result {
                Ok(mut records) => {
                    sort_list(&mut records, "total_discount", false);
                    set_data.set(records);
                    set_sort_field.set("total_discount".to_string());
                    set_sort_ascending.set(false);
                    set_loading.set(false);
                }
                Err(err) => {
                    log::error!("Failed to load sales discount report: {}", err);
                    set_error.set(Some(LOAD_ERROR.to_string()));
                    set_data.set(Vec::new());
                    set_loading.set(false);
                }
            }
        });
    });

    let totals = Signal::derive(move || DiscountSalesTotals::fold(&data.get()));
    let sorted_items = move || {
        let mut items = data.get();
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };
    let discount_chart = Signal::derive(move || top_by_discount(&data.get()));
    let percent_chart = Signal::derive(move || top_by_percentage(&data.get()));

    let on_sort = create_sort_callback(
        sort_field,
        set_sort_field,
        sort_ascending,
        set_sort_ascending,
    );

    let on_export = Callback::new(move |_| {
        let records = sorted_items();
        let csv = build_csv(&records, &csv_summary_row(&records));
        let filename = csv_filename("discount-sales", Utc::now());
        if let Err(err) = download_csv(&csv, &filename) {
            log::error!("CSV export failed: {}", err);
        }
    });

    view! {
        <div>
            <PageHeader
                title="Discount Sales Report"
                subtitle="รายงานยอดขายและส่วนลดของสินค้า"
            >
                {()}
            </PageHeader>

            <ReportFilterPanel
                mode=mode
                year=year
                quarter=quarter
                month=month
                country_id=country_id
                job_position=job_position
                team_number=team_number
                user_id=user_id
                options=options
                visible_users=visible_users
            />

            <div style="display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 16px;">
                <SummaryCard
                    icon="💰"
                    label="ยอดคอมมิชชั่นรวม"
                    value=Signal::derive(move || {
                        format!("฿{}", format_currency(totals.get().total_commission))
                    })
                    color="#1d4ed8"
                />
                <SummaryCard
                    icon="🏷️"
                    label="ส่วนลดรวม"
                    value=Signal::derive(move || {
                        format!("฿{}", format_currency(totals.get().total_discount))
                    })
                    color="#dc2626"
                />
                <SummaryCard
                    icon="✅"
                    label="คอมมิชชั่นสุทธิ"
                    value=Signal::derive(move || {
                        format!("฿{}", format_currency(totals.get().net_commission))
                    })
                    color="#16a34a"
                />
                <SummaryCard
                    icon="📊"
                    label="% ส่วนลดเฉลี่ย"
                    value=Signal::derive(move || {
                        format_percent(totals.get().avg_discount_percentage)
                    })
                    color="#7c3aed"
                />
            </div>

            {move || {
                if let Some(message) = error.get() {
                    return view! { <ErrorNotice message=message/> }.into_any();
                }
                if loading.get() {
                    return view! { <LoadingNotice/> }.into_any();
                }
                let items = sorted_items();
                if items.is_empty() {
                    return view! {
                        <EmptyNotice message="ไม่พบข้อมูลตามเงื่อนไขที่เลือก"/>
                    }
                    .into_any();
                }
                view! {
                    <HBarChart heading="Top 10 ส่วนลดตามเซลล์" rows=discount_chart/>
                    <HBarChart heading="Top 8 % ส่วนลดเฉลี่ยตามเซลล์" rows=percent_chart/>

                    <TableCard title="รายละเอียดส่วนลด" on_export=on_export>
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"ชื่อเซลล์"</th>
                                    <SortableHeaderCell
                                        label="Total Comm."
                                        sort_field="total_commission"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="ส่วนลด"
                                        sort_field="total_discount"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="% ส่วนลด"
                                        sort_field="discount_percentage"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="จำนวน Order"
                                        sort_field="order_count"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="คอมสุทธิ"
                                        sort_field="net_commission"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|record| {
                                        view! {
                                            <tr>
                                                <td style=format!(
                                                    "{} font-weight: 500; color: #212121;",
                                                    TD_STYLE,
                                                )>{record.sales_name.clone()}</td>
                                                <td style=format!("{} text-align: right;", TD_STYLE)>
                                                    {format!(
                                                        "฿{}",
                                                        format_currency(record.metrics.total_commission),
                                                    )}
                                                </td>
                                                <td style=format!(
                                                    "{} text-align: right; color: #dc2626;",
                                                    TD_STYLE,
                                                )>
                                                    {format!(
                                                        "฿{}",
                                                        format_currency(record.metrics.total_discount),
                                                    )}
                                                </td>
                                                <td style=format!(
                                                    "{} text-align: right; color: #7c3aed;",
                                                    TD_STYLE,
                                                )>
                                                    {format_percent(record.metrics.discount_percentage)}
                                                </td>
                                                <td style=format!("{} text-align: right;", TD_STYLE)>
                                                    {format_currency(record.metrics.order_count)}
                                                </td>
                                                <td style=format!(
                                                    "{} text-align: right; color: #16a34a;",
                                                    TD_STYLE,
                                                )>
                                                    {format!(
                                                        "฿{}",
                                                        format_currency(record.metrics.net_commission),
                                                    )}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </TableCard>
                }
                    .into_any()
            }}
        </div>
    }
}
