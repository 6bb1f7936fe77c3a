use chrono::Utc;
use contracts::reports::filter::ReportFilter;
use contracts::reports::supplier::SupplierRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::filter_panel::ReportFilterPanel;
use crate::reports::options::{filter_users, load_filter_options, retain_valid_user, FilterOptions};
use crate::reports::supplier::aggregate::{chart_series, csv_summary_row};
use crate::reports::supplier::api::fetch_supplier_report;
use crate::shared::components::bar_chart::HBarChart;
use crate::shared::components::data_table::{SortableHeaderCell, TableCard, TD_STYLE, TH_STYLE};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status::{EmptyNotice, ErrorNotice, LoadingNotice};
use crate::shared::export::{build_csv, csv_filename, download_csv};
use crate::shared::fetch_guard::FetchSequence;
use crate::shared::list_utils::{create_sort_callback, sort_list};
use crate::shared::number_format::format_currency;
use crate::system::auth::storage;

const LOAD_ERROR: &str = "เกิดข้อผิดพลาดในการโหลดข้อมูล กรุณาลองใหม่อีกครั้ง";

/// Supplier performance report: top-10 commission chart plus a sortable
/// per-supplier table with CSV export.
#[component]
pub fn SupplierCommissionPage() -> impl IntoView {
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
    let (data, set_data) = signal(Vec::<SupplierRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (sort_field, set_sort_field) = signal("total_commission".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let fetch_seq = StoredValue::new(FetchSequence::new());

    // Load dropdown options once on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            let token = storage::get_token();
            match load_filter_options(token.as_deref()).await {
                Ok(loaded) => set_options.set(loaded),
                Err(err) => log::error!("Failed to load filter options: {}", err),
            }
        });
    });

    // Users visible under the current team/position selection.
    let visible_users = Signal::derive(move || {
        filter_users(
            &options.get().users,
            team_number.get(),
            job_position.get().as_deref(),
        )
    });

    // Drop a selected user that the team/position change hid.
    Effect::new(move |_| {
        let visible = visible_users.get();
        let retained = retain_valid_user(user_id.get_untracked(), &visible);
        if retained != user_id.get_untracked() {
            user_id.set(retained);
        }
    });

    // Refetch whenever any filter changes. The ticket keeps a slow older
    // response from overwriting a newer one.
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
            let result = fetch_supplier_report(&filter, token.as_deref()).await;
            if !fetch_seq.get_value().is_current(ticket) {
                return;
            }
            match result {
                Ok(mut records) => {
                    sort_list(&mut records, "total_commission", false);
                    set_data.set(records);
                    set_sort_field.set("total_commission".to_string());
                    set_sort_ascending.set(false);
                    set_loading.set(false);
                }
                Err(err) => {
                    log::error!("Failed to load supplier report: {}", err);
                    set_error.set(Some(LOAD_ERROR.to_string()));
                    set_data.set(Vec::new());
                    set_loading.set(false);
                }
            }
        });
    });

    let sorted_items = move || {
        let mut items = data.get();
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    };
    let chart_rows = Signal::derive(move || chart_series(&sorted_items()));

    let on_sort = create_sort_callback(
        sort_field,
        set_sort_field,
        sort_ascending,
        set_sort_ascending,
    );

    let on_export = Callback::new(move |_| {
        let records = sorted_items();
        let csv = build_csv(&records, &csv_summary_row(&records));
        let filename = csv_filename("supplier-commission", Utc::now());
        if let Err(err) = download_csv(&csv, &filename) {
            log::error!("CSV export failed: {}", err);
        }
    });

    view! {
        <div>
            <PageHeader
                title="Supplier Performance Report"
                subtitle="รายงานประสิทธิภาพและยอดขายของ Supplier"
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
                    <HBarChart heading="Top 10 Supplier Commission" rows=chart_rows/>

                    <TableCard title="รายละเอียด Supplier" on_export=on_export>
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr>
                                    <th style=format!(
                                        "{} text-align: left;",
                                        TH_STYLE,
                                    )>"Supplier Name"</th>
                                    <SortableHeaderCell
                                        label="Total Comm."
                                        sort_field="total_commission"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="Net Comm."
                                        sort_field="total_net_commission"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="จำนวนผู้เดินทาง"
                                        sort_field="total_pax"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                        align="center"
                                    />
                                    <SortableHeaderCell
                                        label="Avg Comm.(ต่อคน)"
                                        sort_field="avg_commission_per_pax"
                                        current_sort_field=sort_field
                                        sort_ascending=sort_ascending
                                        on_sort=on_sort
                                    />
                                    <SortableHeaderCell
                                        label="Avg Net(สุทธิต่อคน)"
                                        sort_field="avg_net_commission_per_pax"
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
                                                <td style=TD_STYLE>
                                                    <div style="font-weight: 500; color: #212121;">
                                                        {record.supplier_name_th.clone()}
                                                    </div>
                                                    <div style="color: #6b7280; font-size: 13px;">
                                                        {record.supplier_name_en.clone()}
                                                    </div>
                                                </td>
                                                <td style=format!(
                                                    "{} text-align: right; color: #212121;",
                                                    TD_STYLE,
                                                )>
                                                    {format!(
                                                        "฿{}",
                                                        format_currency(record.metrics.total_commission),
                                                    )}
                                                </td>
                                                <td style=format!(
                                                    "{} text-align: right; color: #16a34a;",
                                                    TD_STYLE,
                                                )>
                                                    {format!(
                                                        "฿{}",
                                                        format_currency(record.metrics.total_net_commission),
                                                    )}
                                                </td>
                                                <td style=format!("{} text-align: center;", TD_STYLE)>
                                                    <span style="background: #eff6ff; color: #1d4ed8; border-radius: 10px; padding: 2px 10px; font-size: 12px; font-weight: 500;">
                                                        {format_currency(record.metrics.total_pax)}
                                                    </span>
                                                </td>
                                                <td style=format!(
                                                    "{} text-align: right; color: #64748b;",
                                                    TD_STYLE,
                                                )>
                                                    {format!(
                                                        "฿{}",
                                                        format_currency(record.metrics.avg_commission_per_pax),
                                                    )}
                                                </td>
                                                <td style=format!(
                                                    "{} text-align: right; color: #212121;",
                                                    TD_STYLE,
                                                )>
                                                    {format!(
                                                        "฿{}",
                                                        format_currency(record.metrics.avg_net_commission_per_pax),
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
