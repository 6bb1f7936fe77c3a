use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::reports::request_discount::calc::{discounted_price, DiscountKind, Urgency};
use crate::shared::components::page_header::PageHeader;
use crate::shared::number_format::format_baht;

const SECTION_TITLE_STYLE: &str =
    "margin: 0 0 14px 0; font-size: 0.95rem; font-weight: 600; color: #212529;";
const LABEL_STYLE: &str =
    "display: block; margin-bottom: 6px; font-size: 0.85rem; font-weight: 500; color: #495057;";
const INPUT_STYLE: &str = "width: 100%; padding: 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; box-sizing: border-box;";
const FIELD_STYLE: &str = "margin-bottom: 14px;";
const SUMMARY_ROW_STYLE: &str =
    "display: flex; justify-content: space-between; margin-bottom: 12px; font-size: 0.875rem;";

/// Discount request form. Nothing is persisted; the submit is a simulated
/// round trip so the flow can be exercised before the backend exists.
#[component]
pub fn RequestDiscountPage() -> impl IntoView {
    let (customer_name, set_customer_name) = signal(String::new());
    let (customer_email, set_customer_email) = signal(String::new());
    let (customer_phone, set_customer_phone) = signal(String::new());
    let (product_service, set_product_service) = signal(String::new());
    let (original_price, set_original_price) = signal(String::new());
    let (requested_discount, set_requested_discount) = signal(String::new());
    let (discount_kind, set_discount_kind) = signal(DiscountKind::Percentage);
    let (reason, set_reason) = signal(String::new());
    let (urgency, set_urgency) = signal(Urgency::Normal);
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    // Unparseable or empty price fields count as zero in the live preview.
    let price_value = move || original_price.get().parse::<f64>().unwrap_or(0.0);
    let discount_value = move || requested_discount.get().parse::<f64>().unwrap_or(0.0);
    let final_price =
        move || discounted_price(price_value(), discount_value(), discount_kind.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_submitting.set(true);
        set_submitted.set(false);

        spawn_local(async move {
            // Simulated processing delay until the request endpoint lands.
            TimeoutFuture::new(2_000).await;
            set_submitting.set(false);
            set_submitted.set(true);
            set_customer_name.set(String::new());
            set_customer_email.set(String::new());
            set_customer_phone.set(String::new());
            set_product_service.set(String::new());
            set_original_price.set(String::new());
            set_requested_discount.set(String::new());
            set_discount_kind.set(DiscountKind::Percentage);
            set_reason.set(String::new());
            set_urgency.set(Urgency::Normal);
        });
    };

    view! {
        <div>
            <PageHeader title="Request Discount" subtitle="ส่งคำขอส่วนลดสำหรับลูกค้า">
                {()}
            </PageHeader>

            <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 20px; align-items: start;">
                <div style="background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 24px;">
                    <h2 style="margin: 0 0 20px 0; font-size: 1.05rem; color: #212529;">
                        "ข้อมูลคำขอ"
                    </h2>

                    {move || {
                        submitted
                            .get()
                            .then(|| {
                                view! {
                                    <div style="background: #f0fdf4; border: 1px solid #bbf7d0; color: #166534; border-radius: 6px; padding: 12px 16px; margin-bottom: 18px; font-size: 0.875rem;">
                                        "คำขอส่วนลดถูกส่งเรียบร้อยแล้ว"
                                    </div>
                                }
                            })
                    }}

                    <form on:submit=on_submit>
                        <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 18px; margin-bottom: 18px;">
                            <h3 style=SECTION_TITLE_STYLE>"ข้อมูลลูกค้า"</h3>
                            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 14px;">
                                <div>
                                    <label style=LABEL_STYLE>"ชื่อลูกค้า *"</label>
                                    <input
                                        type="text"
                                        style=INPUT_STYLE
                                        placeholder="กรอกชื่อลูกค้า"
                                        prop:value=move || customer_name.get()
                                        on:input=move |ev| {
                                            set_customer_name.set(event_target_value(&ev))
                                        }
                                        required
                                        disabled=move || submitting.get()
                                    />
                                </div>
                                <div>
                                    <label style=LABEL_STYLE>"อีเมล *"</label>
                                    <input
                                        type="email"
                                        style=INPUT_STYLE
                                        placeholder="example@email.com"
                                        prop:value=move || customer_email.get()
                                        on:input=move |ev| {
                                            set_customer_email.set(event_target_value(&ev))
                                        }
                                        required
                                        disabled=move || submitting.get()
                                    />
                                </div>
                            </div>
                            <div style="margin-top: 14px;">
                                <label style=LABEL_STYLE>"เบอร์โทรศัพท์"</label>
                                <input
                                    type="tel"
                                    style=INPUT_STYLE
                                    placeholder="08X-XXX-XXXX"
                                    prop:value=move || customer_phone.get()
                                    on:input=move |ev| {
                                        set_customer_phone.set(event_target_value(&ev))
                                    }
                                    disabled=move || submitting.get()
                                />
                            </div>
                        </div>

                        <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 18px; margin-bottom: 18px;">
                            <h3 style=SECTION_TITLE_STYLE>"ข้อมูลสินค้า/บริการ"</h3>
                            <div style=FIELD_STYLE>
                                <label style=LABEL_STYLE>"สินค้า/บริการ *"</label>
                                <input
                                    type="text"
                                    style=INPUT_STYLE
                                    placeholder="ระบุชื่อสินค้าหรือบริการ"
                                    prop:value=move || product_service.get()
                                    on:input=move |ev| {
                                        set_product_service.set(event_target_value(&ev))
                                    }
                                    required
                                    disabled=move || submitting.get()
                                />
                            </div>
                            <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 14px; margin-bottom: 14px;">
                                <div>
                                    <label style=LABEL_STYLE>"ราคาเต็ม (บาท) *"</label>
                                    <input
                                        type="number"
                                        min="0"
                                        step="0.01"
                                        style=INPUT_STYLE
                                        placeholder="0.00"
                                        prop:value=move || original_price.get()
                                        on:input=move |ev| {
                                            set_original_price.set(event_target_value(&ev))
                                        }
                                        required
                                        disabled=move || submitting.get()
                                    />
                                </div>
                                <div>
                                    <label style=LABEL_STYLE>"ประเภทส่วนลด"</label>
                                    <select
                                        style=INPUT_STYLE
                                        prop:value=move || discount_kind.get().as_str().to_string()
                                        on:change=move |ev| {
                                            if let Some(kind) = DiscountKind::parse(
                                                &event_target_value(&ev),
                                            ) {
                                                set_discount_kind.set(kind);
                                            }
                                        }
                                        disabled=move || submitting.get()
                                    >
                                        <option value="percentage">"เปอร์เซ็นต์ (%)"</option>
                                        <option value="fixed">"จำนวนเงิน (บาท)"</option>
                                    </select>
                                </div>
                            </div>
                            <div>
                                <label style=LABEL_STYLE>"ส่วนลดที่ขอ *"</label>
                                <div style="display: flex; align-items: center; gap: 8px;">
                                    <input
                                        type="number"
                                        min="0"
                                        step=move || {
                                            if discount_kind.get() == DiscountKind::Percentage {
                                                "1"
                                            } else {
                                                "0.01"
                                            }
                                        }
                                        style=INPUT_STYLE
                                        placeholder="0"
                                        prop:value=move || requested_discount.get()
                                        on:input=move |ev| {
                                            set_requested_discount.set(event_target_value(&ev))
                                        }
                                        required
                                        disabled=move || submitting.get()
                                    />
                                    <span style="color: #6b7280; font-size: 0.875rem;">
                                        {move || {
                                            if discount_kind.get() == DiscountKind::Percentage {
                                                "%"
                                            } else {
                                                "฿"
                                            }
                                        }}
                                    </span>
                                </div>
                            </div>
                        </div>

                        <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 18px; margin-bottom: 18px;">
                            <h3 style=SECTION_TITLE_STYLE>"รายละเอียดคำขอ"</h3>
                            <div style=FIELD_STYLE>
                                <label style=LABEL_STYLE>
                                    "เหตุผลในการขอส่วนลด *"
                                </label>
                                <textarea
                                    rows="4"
                                    style=INPUT_STYLE
                                    placeholder="อธิบายเหตุผลที่ขอส่วนลด เช่น ลูกค้าประจำ, ซื้อจำนวนมาก, แข่งขันราคา เป็นต้น"
                                    prop:value=move || reason.get()
                                    on:input=move |ev| set_reason.set(event_target_value(&ev))
                                    required
                                    disabled=move || submitting.get()
                                ></textarea>
                            </div>
                            <div>
                                <label style=LABEL_STYLE>"ความเร่งด่วน"</label>
                                <select
                                    style=INPUT_STYLE
                                    prop:value=move || urgency.get().as_str().to_string()
                                    on:change=move |ev| {
                                        if let Some(level) = Urgency::parse(&event_target_value(&ev))
                                        {
                                            set_urgency.set(level);
                                        }
                                    }
                                    disabled=move || submitting.get()
                                >
                                    {Urgency::ALL
                                        .iter()
                                        .map(|level| {
                                            view! {
                                                <option value=level.as_str()>{level.label_th()}</option>
                                            }
                                        })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>

                        <div style="display: flex; justify-content: flex-end;">
                            <button
                                type="submit"
                                style="background: #2563eb; color: white; border: none; border-radius: 6px; padding: 10px 24px; font-size: 0.875rem; font-weight: 500; cursor: pointer;"
                                disabled=move || submitting.get()
                            >
                                {move || {
                                    if submitting.get() {
                                        "กำลังส่ง..."
                                    } else {
                                        "ส่งคำขอ"
                                    }
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <div style="background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1); padding: 24px; position: sticky; top: 20px;">
                    <h3 style="margin: 0 0 16px 0; font-size: 1rem; font-weight: 600; color: #212529;">
                        "สรุปคำขอ"
                    </h3>

                    <div style=SUMMARY_ROW_STYLE>
                        <span style="color: #6b7280;">"ราคาเต็ม:"</span>
                        <span style="font-weight: 500;">
                            {move || format!("฿{}", format_baht(price_value()))}
                        </span>
                    </div>

                    <div style=SUMMARY_ROW_STYLE>
                        <span style="color: #6b7280;">"ส่วนลด:"</span>
                        <span style="font-weight: 500; color: #dc2626;">
                            {move || {
                                if requested_discount.get().is_empty() {
                                    "-".to_string()
                                } else if discount_kind.get() == DiscountKind::Percentage {
                                    format!("{}%", requested_discount.get())
                                } else {
                                    format!("฿{}", format_baht(discount_value()))
                                }
                            }}
                        </span>
                    </div>

                    <div style="border-top: 1px solid #e5e7eb; padding-top: 14px; margin-bottom: 14px;">
                        <div style="display: flex; justify-content: space-between;">
                            <span style="font-weight: 500; color: #212529;">
                                "ราคาหลังหักส่วนลด:"
                            </span>
                            <span style="font-weight: 700; color: #16a34a;">
                                {move || format!("฿{}", format_baht(final_price()))}
                            </span>
                        </div>
                    </div>

                    {move || {
                        let has_both = !original_price.get().is_empty()
                            && !requested_discount.get().is_empty();
                        has_both
                            .then(|| {
                                view! {
                                    <div style="background: #eff6ff; border-radius: 6px; padding: 10px 12px; margin-bottom: 14px; font-size: 0.8rem; color: #1e40af;">
                                        <strong>"ประหยัด: "</strong>
                                        {format!("฿{}", format_baht(price_value() - final_price()))}
                                    </div>
                                }
                            })
                    }}

                    <div style="border-top: 1px solid #e5e7eb; padding-top: 16px;">
                        <h4 style="margin: 0 0 10px 0; font-size: 0.85rem; font-weight: 600; color: #212529;">
                            "ความเร่งด่วน"
                        </h4>
                        <div style="display: flex; align-items: center; gap: 8px;">
                            <div style=move || {
                                format!(
                                    "width: 12px; height: 12px; border-radius: 50%; background: {};",
                                    urgency.get().indicator_color(),
                                )
                            }></div>
                            <span style="font-size: 0.875rem; color: #6b7280;">
                                {move || urgency.get().label_th()}
                            </span>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
