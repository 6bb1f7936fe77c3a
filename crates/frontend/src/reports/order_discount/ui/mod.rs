use chrono::Utc;
use contracts::reports::filter::ReportFilter;
use contracts::reports::order_discount::OrderDiscountRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

use crate::reports::filter_panel::ReportFilterPanel;
use crate::reports::options::{filter_users, load_filter_options, retain_valid_user, FilterOptions};
use crate::reports::order_discount::aggregate::{
    apply_secondary_filters, csv_summary_row, seller_summaries, top_sellers_by_avg_percent,
    top_sellers_by_discount, OrderDiscountSummary, SecondaryFilters, SellerSummary,
};
use crate::reports::order_discount::api::fetch_order_discount_report;
use crate::shared::components::bar_chart::HBarChart;
use crate::shared::components::data_table::{SortableHeaderCell, TableCard, TD_STYLE, TH_STYLE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination::PaginationControls;
use crate::shared::components::status::{EmptyNotice, ErrorNotice, LoadingNotice};
use crate::shared::components::summary_card::SummaryCard;
use crate::shared::date_utils::thai_date;
use crate::shared::export::{build_csv, csv_filename, download_csv};
use crate::shared::fetch_guard::FetchSequence;
use crate::shared::list_utils::{create_sort_callback, sort_list};
use crate::shared::number_format::{format_currency, format_percent};
use crate::shared::paging::{clamp_page, page_bounds, page_count, PAGE_SIZE};
use crate::system::auth::storage;

const LOAD_ERROR: &str = "เกิดข้อผิดพลาดในการโหลดข้อมูล กรุณาลองใหม่อีกครั้ง";

const TOGGLE_LABEL_STYLE: &str = "display: inline-flex; align-items: center; gap: 6px; font-size: 0.875rem; color: #374151; cursor: pointer;";

/// Order discount report: summary cards over the toggled-down order list,
/// per-seller rollups with the discount-percent histogram, two top-seller
/// charts and a paginated order table with CSV export.
#[component]
pub fn OrderDiscountPage() -> impl IntoView {
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
    let (data, set_data) = signal(Vec::<OrderDiscountRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (sort_field, set_sort_field) = signal("discount".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let (discount_only, set_discount_only) = signal(false);
    let (unpaid_only, set_unpaid_only) = signal(false);
    let (page, set_page) = signal(1usize);
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
            let result = fetch_order_discount_report(&filter, token.as_deref()).await;
            if !fetch_seq.get_value().is_current(ticket) {
                return;
            }
            match result {
                Ok(records) => {
                    set_data.set(records);
                    set_page.set(1);
                    set_sort_field.set("discount".to_string());
                    set_sort_ascending.set(false);
                    set_loading.set(false);
                }
                Err(err) => {
                    log::error!("Failed to load order discount report: {}", err);
                    set_error.set(Some(LOAD_ERROR.to_string()));
                    set_data.set(Vec::new());
                    set_loading.set(false);
                }
            }
        });
    });

    // Secondary-filtered snapshot for the cards, the table and the export.
    let filtered = Signal::derive(move || {
        apply_secondary_filters(
            &data.get(),
            SecondaryFilters {
                discount_only: discount_only.get(),
                unpaid_only: unpaid_only.get(),
            },
        )
    });
    let summary = Signal::derive(move || OrderDiscountSummary::fold(&filtered.get()));

    // Seller rollups always cover the full fetched snapshot.
    let sellers = Signal::derive(move || seller_summaries(&data.get()));
    let discount_chart = Signal::derive(move || top_sellers_by_discount(&sellers.get()));
    let percent_chart = Signal::derive(move || top_sellers_by_avg_percent(&sellers.get()));

    let sorted_filtered = move || {
        let mut items = filtered.get();
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };

    let total_pages = Signal::derive(move || page_count(filtered.get().len(), PAGE_SIZE));
    let current_page = Signal::derive(move || clamp_page(page.get(), total_pages.get()));

    let on_sort = create_sort_callback(
        sort_field,
        set_sort_field,
        sort_ascending,
        set_sort_ascending,
    );

    let on_export = Callback::new(move |_| {
        let records = sorted_filtered();
        let csv = build_csv(&records, &csv_summary_row(&records));
        let filename = csv_filename("order-has-discount", Utc::now());
        if let Err(err) = download_csv(&csv, &filename) {
            log::error!("CSV export failed: {}", err);
        }
    });

    view! {
        <div>
            <PageHeader
                title="Order Discount Report"
                subtitle="รายงาน Order ที่มีส่วนลด พร้อมสรุปยอดตามผู้ขาย"
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

            // Post-fetch toggles; flipping one resets the table to page 1.
            <div style="background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 14px 20px; margin-bottom: 16px; display: flex; gap: 24px; flex-wrap: wrap;">
                <label style=TOGGLE_LABEL_STYLE>
                    <input
                        type="checkbox"
                        prop:checked=move || discount_only.get()
                        on:change=move |ev| {
                            set_discount_only.set(event_target_checked(&ev));
                            set_page.set(1);
                        }
                    />
                    "เฉพาะ Order ที่มีส่วนลด"
                </label>
                <label style=TOGGLE_LABEL_STYLE>
                    <input
                        type="checkbox"
                        prop:checked=move || unpaid_only.get()
                        on:change=move |ev| {
                            set_unpaid_only.set(event_target_checked(&ev));
                            set_page.set(1);
                        }
                    />
                    "เฉพาะ Order ที่ยังไม่ชำระเงิน"
                </label>
            </div>

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
                    color="#1d4ed8"
                />
                <SummaryCard
                    icon="💰"
                    label="ค่าคอมมิชชั่นรวม"
                    value=Signal::derive(move || {
                        format!("฿{}", format_currency(summary.get().total_commission))
                    })
                    color="#16a34a"
                />
                <SummaryCard
                    icon="🏷️"
                    label="ส่วนลดรวม"
                    value=Signal::derive(move || {
                        format!("฿{}", format_currency(summary.get().total_discount))
                    })
                    color="#dc2626"
                />
                <SummaryCard
                    icon="📊"
                    label="% ส่วนลดเฉลี่ย"
                    value=Signal::derive(move || {
                        format_percent(summary.get().avg_discount_percent)
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
                if data.get().is_empty() {
                    return view! {
                        <EmptyNotice message="ไม่พบข้อมูลตามเงื่อนไขที่เลือก"/>
                    }
                    .into_any();
                }
                view! {
                    <HBarChart heading="Top 10 ส่วนลดตามผู้ขาย" rows=discount_chart/>
                    <HBarChart heading="Top 8 % ส่วนลดเฉลี่ยตามผู้ขาย" rows=percent_chart/>

                    <div style="margin-bottom: 16px;">
                        <SellerSummaryTable sellers=sellers/>
                    </div>

                    <TableCard title="รายละเอียด Order" on_export=on_export>
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
                                    )>"วันที่สร้าง"</th>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"ลูกค้า"</th>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"ผู้ขาย"</th>
                                    <th style=format!("{} text-align: left;", TH_STYLE)>"CRM"</th>
                                    <th style=format!(
                                        "{} text-align: center;",
                                        TH_STYLE,
                                    )>"งวดชำระ"</th>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"สถานะ"</th>
                                    <SortableHeaderCell
                                        label="ยอดสุทธิ"
                                        sort_field="net_amount"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="คอมมิชชั่น"
                                        sort_field="supplier_commission"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="ส่วนลด"
                                        sort_field="discount"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="% ส่วนลด"
                                        sort_field="discount_percent"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    let items = sorted_filtered();
                                    let (start, end) = page_bounds(
                                        current_page.get(),
                                        items.len(),
                                        PAGE_SIZE,
                                    );
                                    items[start..end]
                                        .iter()
                                        .map(|record| order_row(record))
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                        <PaginationControls
                            current_page=current_page
                            total_pages=total_pages
                            total_count=Signal::derive(move || filtered.get().len())
                            on_page_change=Callback::new(move |next| set_page.set(next))
                        />
                    </TableCard>
                }
                    .into_any()
            }}
        </div>
    }
}

fn order_row(record: &OrderDiscountRecord) -> impl IntoView {
    let unpaid = record.is_unpaid();
    view! {
        <tr>
            <td style=format!(
                "{} font-weight: 500; color: #212121;",
                TD_STYLE,
            )>{record.order_info.order_code.clone()}</td>
            <td style=TD_STYLE>{thai_date(&record.order_info.created_at)}</td>
            <td style=TD_STYLE>{record.customer_info.customer_name.clone()}</td>
            <td style=TD_STYLE>{record.sales_crm.seller_name.clone()}</td>
            <td style=TD_STYLE>{record.sales_crm.crm_name.clone()}</td>
            <td style=format!(
                "{} text-align: center; color: {};",
                TD_STYLE,
                if unpaid { "#dc2626" } else { "#374151" },
            )>
                {format!(
                    "{}/{}",
                    record.payment_details.paid_installments,
                    record.payment_details.total_installments,
                )}
            </td>
            <td style=format!(
                "{} color: #6b7280; font-size: 13px;",
                TD_STYLE,
            )>{record.payment_details.status_list.clone()}</td>
            <td style=format!("{} text-align: right;", TD_STYLE)>
                {format!("฿{}", format_currency(record.financial_metrics.net_amount))}
            </td>
            <td style=format!("{} text-align: right;", TD_STYLE)>
                {format!(
                    "฿{}",
                    format_currency(record.financial_metrics.supplier_commission),
                )}
            </td>
            <td style=format!("{} text-align: right; color: #dc2626;", TD_STYLE)>
                {format!("฿{}", format_currency(record.financial_metrics.discount))}
            </td>
            <td style=format!("{} text-align: right; color: #7c3aed;", TD_STYLE)>
                {format_percent(record.financial_metrics.discount_percent)}
            </td>
        </tr>
    }
}

/// Per-seller rollup table, ranked by total discount. The last four columns
/// are the discount-percent histogram; their counts always add up to the
/// seller's order total.
#[component]
fn SellerSummaryTable(#[prop(into)] sellers: Signal<Vec<SellerSummary>>) -> impl IntoView {
    let ranked = move || {
        let mut rows = sellers.get();
        rows.sort_by(|a, b| {
            b.total_discount
                .partial_cmp(&a.total_discount)
                .unwrap_or(Ordering::Equal)
        });
        rows
    };
    view! {
        <TableCard title="สรุปตามผู้ขาย">
            <table style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr>
                        <th style=format!("{} text-align: left;", TH_STYLE)>"ผู้ขาย"</th>
                        <th style=format!(
                            "{} text-align: center;",
                            TH_STYLE,
                        )>"Order มีส่วนลด"</th>
                        <th style=format!(
                            "{} text-align: center;",
                            TH_STYLE,
                        )>"Order ทั้งหมด"</th>
                        <th style=format!(
                            "{} text-align: right;",
                            TH_STYLE,
                        )>"ส่วนลดรวม"</th>
                        <th style=format!(
                            "{} text-align: right;",
                            TH_STYLE,
                        )>"% ส่วนลดเฉลี่ย"</th>
                        <th style=format!("{} text-align: center;", TH_STYLE)>"0%"</th>
                        <th style=format!("{} text-align: center;", TH_STYLE)>"1-15%"</th>
                        <th style=format!("{} text-align: center;", TH_STYLE)>"15-20%"</th>
                        <th style=format!("{} text-align: center;", TH_STYLE)>">20%"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        ranked()
                            .into_iter()
                            .map(|seller| {
                                view! {
                                    <tr>
                                        <td style=format!(
                                            "{} font-weight: 500; color: #212121;",
                                            TD_STYLE,
                                        )>{seller.seller_name.clone()}</td>
                                        <td style=format!("{} text-align: center;", TD_STYLE)>
                                            {seller.order_count}
                                        </td>
                                        <td style=format!("{} text-align: center;", TD_STYLE)>
                                            {seller.total_orders}
                                        </td>
                                        <td style=format!(
                                            "{} text-align: right; color: #dc2626;",
                                            TD_STYLE,
                                        )>
                                            {format!("฿{}", format_currency(seller.total_discount))}
                                        </td>
                                        <td style=format!(
                                            "{} text-align: right; color: #7c3aed;",
                                            TD_STYLE,
                                        )>{format_percent(seller.avg_discount_percent)}</td>
                                        <td style=format!(
                                            "{} text-align: center; color: #6b7280;",
                                            TD_STYLE,
                                        )>{seller.no_discount}</td>
                                        <td style=format!("{} text-align: center;", TD_STYLE)>
                                            {seller.discount_1_15}
                                        </td>
                                        <td style=format!("{} text-align: center;", TD_STYLE)>
                                            {seller.discount_15_20}
                                        </td>
                                        <td style=format!(
                                            "{} text-align: center; color: #dc2626;",
                                            TD_STYLE,
                                        )>{seller.discount_over_20}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </TableCard>
    }
}
