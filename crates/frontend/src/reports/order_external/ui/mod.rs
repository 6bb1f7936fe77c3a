use chrono::Utc;
use contracts::reports::filter::ReportFilter;
use contracts::reports::order_external::OrderExternalRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::filter_panel::ReportFilterPanel;
use crate::reports::options::{filter_users, load_filter_options, retain_valid_user, FilterOptions};
use crate::reports::order_external::aggregate::{csv_summary_row, OrderExternalSummary};
use crate::reports::order_external::api::fetch_order_external_report;
use crate::shared::components::data_table::{TableCard, TD_STYLE, TH_STYLE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{EmptyNotice, ErrorNotice, LoadingNotice};
use crate::shared::components::summary_card::SummaryCard;
use crate::shared::date_utils::thai_date;
use crate::shared::export::{build_csv, csv_filename, download_csv};
use crate::shared::fetch_guard::FetchSequence;
use crate::shared::number_format::format_currency;
use crate::system::auth::storage;

const LOAD_ERROR: &str = "เกิดข้อผิดพลาดในการโหลดข้อมูล กรุณาลองใหม่อีกครั้ง";

/// Backdated orders: first installment settled in a different month than the
/// order was created. Month-pinned filter, four totals and a flat table.
#[component]
pub fn OrderExternalPage() -> impl IntoView {
    let defaults = ReportFilter::monthly_for_date(Utc::now().date_naive());
    let mode = RwSignal::new(defaults.mode);
    let year = RwSignal::new(defaults.year);
    let quarter = RwSignal::new(defaults.quarter);
    let month = RwSignal::new(defaults.month);
    let country_id = RwSignal::new(defaults.country_id);
    let job_position = RwSignal::new(defaults.job_position);
    let team_number = RwSignal::new(defaults.team_number);
    let user_id = RwSignal::new(defaults.user_id);

    let (options, set_options) = signal(FilterOptions::default());
    let (data, set_data) = signal(Vec::<OrderExternalRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
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
            let result = fetch_order_external_report(&filter, token.as_deref()).await;
            if !fetch_seq.get_value().is_current(ticket) {
                return;
            }
            match result {
                Ok(records) => {
                    set_data.set(records);
                    set_loading.set(false);
                }
                Err(err) => {
                    log::error!("Failed to load order external report: {}", err);
                    set_error.set(Some(LOAD_ERROR.to_string()));
                    set_data.set(Vec::new());
                    set_loading.set(false);
                }
            }
        });
    });

    let summary = Signal::derive(move || OrderExternalSummary::fold(&data.get()));

    let on_export = Callback::new(move |_| {
        let records = data.get();
        let csv = build_csv(&records, &csv_summary_row(&records));
        let filename = csv_filename("order-external-summary", Utc::now());
        if let Err(err) = download_csv(&csv, &filename) {
            log::error!("CSV export failed: {}", err);
        }
    });

    view! {
        <div>
            <PageHeader
                title="Order แก้ย้อนหลัง"
                subtitle="รายงาน Orders ที่มีการชำระเงินงวดแรกสำเร็จ และวันที่ชำระเงินไม่อยู่ในเดือนเดียวกันกับวันที่สร้าง Order"
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
                monthly_only=true
            />

            {move || {
                if let Some(message) = error.get() {
                    return view! { <ErrorNotice message=message/> }.into_any();
                }
                if loading.get() {
                    return view! { <LoadingNotice/> }.into_any();
                }
                if data.get().is_empty() {
                    return view! {
                        <EmptyNotice message="ไม่พบข้อมูลตามเงื่อนไขที่เลือก"/>
                    }
                    .into_any();
                }
                view! {
                    <div style="display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 16px;">
                        <SummaryCard
                            icon="🧾"
                            label="จำนวน Orders"
                            value=Signal::derive(move || {
                                format_currency(summary.get().total_orders as f64)
                            })
                        />
                        <SummaryCard
                            icon="💵"
                            label="ยอดสุทธิรวม"
                            value=Signal::derive(move || {
                                format!("฿{}", format_currency(summary.get().total_net_amount))
                            })
                            color="#16a34a"
                        />
                        <SummaryCard
                            icon="💰"
                            label="ค่าคอมมิชชั่นรวม"
                            value=Signal::derive(move || {
                                format!("฿{}", format_currency(summary.get().total_commission))
                            })
                            color="#7c3aed"
                        />
                        <SummaryCard
                            icon="🏷️"
                            label="ส่วนลดรวม"
                            value=Signal::derive(move || {
                                format!("฿{}", format_currency(summary.get().total_discount))
                            })
                            color="#dc2626"
                        />
                    </div>

                    <TableCard title="รายละเอียด Orders" on_export=on_export>
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"รหัส Order"</th>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"วันที่สร้าง Order"</th>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"ชื่อลูกค้า"</th>
                                    <th style=format!(
                                        "{} text-align: right;",
                                        TH_STYLE,
                                    )>"ยอดสุทธิ"</th>
                                    <th style=format!(
                                        "{} text-align: right;",
                                        TH_STYLE,
                                    )>"ค่าคอมมิชชั่น"</th>
                                    <th style=format!(
                                        "{} text-align: right;",
                                        TH_STYLE,
                                    )>"ส่วนลด"</th>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"วันที่ชำระเงิน"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    data.get()
                                        .iter()
                                        .map(|record| order_row(record))
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </TableCard>
                }
                    .into_any()
            }}
        </div>
    }
}

fn order_row(record: &OrderExternalRecord) -> impl IntoView {
    view! {
        <tr>
            <td style=format!(
                "{} font-weight: 500; color: #2563eb;",
                TD_STYLE,
            )>{record.order_code.clone()}</td>
            <td style=TD_STYLE>{thai_date(&record.created_at)}</td>
            <td style=TD_STYLE>{record.customer_name.clone()}</td>
            <td style=format!("{} text-align: right;", TD_STYLE)>
                {format!("฿{}", format_currency(record.net_amount))}
            </td>
            <td style=format!("{} text-align: right; color: #7c3aed;", TD_STYLE)>
                {format!("฿{}", format_currency(record.supplier_commission))}
            </td>
            <td style=format!("{} text-align: right; color: #dc2626;", TD_STYLE)>
                {format!("฿{}", format_currency(record.discount))}
            </td>
            <td style=TD_STYLE>{thai_date(&record.paid_at)}</td>
        </tr>
    }
}
