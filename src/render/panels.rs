//! The five collapsible detail panels at the bottom of a listing.

use crate::model::ListingRecord;

const PANEL_STYLE: &str = "margin-bottom:20px; padding:15px; border: 1px solid #dddddd; border-radius: 5px;";
const SUMMARY_STYLE: &str = "font-size:18px; font-weight:bold; color:#222; cursor:pointer;";

/// Product information, about this item, terms, shipping, about us.
pub fn detail_panels(record: &ListingRecord) -> String {
    let mut html = String::from(
        "\n    <div style=\"max-width: 90%; margin: 0 auto; margin-top:40px;font-family: 'Verdana', sans-serif; padding:0;\">\n",
    );
    html.push_str(&product_information(record));
    html.push_str(&about_this_item(&record.about_items));
    html.push_str(TERMS_AND_CONDITIONS);
    html.push_str(&shipping_details(record));
    html.push_str(&about_us(record));
    html.push_str("    </div>\n");
    html
}

/// Split an about-item on its first colon. The label keeps the colon.
///
/// `"DESIGN: Retro"` → `(Some("DESIGN:"), " Retro")`; no colon → `(None, item)`.
pub fn split_about_item(item: &str) -> (Option<&str>, &str) {
    match item.find(':') {
        Some(idx) => (Some(&item[..=idx]), &item[idx + 1..]),
        None => (None, item),
    }
}

fn product_information(record: &ListingRecord) -> String {
    let mut body = String::new();

    if !record.description.trim().is_empty() {
        body.push_str(&format!(
            r#"            <p style="margin-top:20px;"><strong style="font-size:16px; color:#222;">DESCRIPTION</strong></p>
            <ul>
                <li>{}</li>
            </ul>
"#,
            record.description
        ));
    }

    if !record.specifications.is_empty() {
        let items: String = record
            .specifications
            .iter()
            .map(|s| format!("<li style=\"box-sizing: border-box;\">{s}</li>"))
            .collect();
        body.push_str(&format!(
            r#"            <p style="margin-top:10px;"><strong style="font-size:16px; color:#222;">SPECIFICATIONS:</strong></p>
            <ul style="list-style-type: disc; padding-left: 20px;">
                {items}
            </ul>
"#
        ));
    }

    if !record.package_includes.is_empty() {
        let items: String = record
            .package_includes
            .iter()
            .map(|s| format!("<li>{s}</li>"))
            .collect();
        body.push_str(&format!(
            r#"            <p style="margin-top: 10px;"><strong><font size="4">Package included:</font></strong></p>
            <ul style="list-style-type: disc; padding-left: 20px;">
               {items}
            </ul>
"#
        ));
    }

    format!(
        r#"
        <!-- PRODUCT INFORMATION -->
        <details open style="{PANEL_STYLE}">
            <summary style="{SUMMARY_STYLE} padding-bottom:5px;">PRODUCT INFORMATION</summary>
{body}        </details>
"#
    )
}

const ABOUT_LI_STYLE: &str =
    "box-sizing: border-box; list-style: disc; overflow-wrap: break-word; margin: 0px;";

fn about_this_item(items: &[String]) -> String {
    let list = if items.is_empty() {
        String::new()
    } else {
        let lis: String = items
            .iter()
            .map(|item| {
                let content = match split_about_item(item) {
                    (Some(label), rest) => format!("<strong>{label}</strong>{rest}"),
                    (None, text) => text.to_string(),
                };
                format!(
                    "<li class=\"a-spacing-mini\" style=\"{ABOUT_LI_STYLE}\"><span class=\"a-list-item\" style=\"box-sizing: border-box;\">{content}</span></li>"
                )
            })
            .collect();
        format!(
            "            <ul class=\"a-unordered-list a-vertical a-spacing-mini\" style=\"margin: 10px 0 0 18px; color: #0f1111; padding: 0px;\">\n                {lis}\n            </ul>\n"
        )
    };

    format!(
        r#"
        <!-- ABOUT THIS ITEM -->
        <details style="{PANEL_STYLE}">
            <summary style="{SUMMARY_STYLE} padding-bottom:5px;">ABOUT THIS ITEM</summary>
{list}        </details>
"#
    )
}

const TERMS_AND_CONDITIONS: &str = r##"
        <!-- TERMS & CONDITIONS -->
        <details style="margin-bottom:20px; padding:15px; border: 1px solid #dddddd; border-radius: 5px;">
            <summary style="font-size:18px; font-weight:bold; color:#222; cursor:pointer;">TERMS & CONDITIONS</summary>
            <h3 style="color:#222; margin-top:10px;">POSTAGE</h3>
            <ul style="list-style-type: disc; padding-left:20px; color:#555;">
                <li><font color="#555555">Order will be dispatched within 1 working day (Mon-Fri) via Royal Mail 48hrs / 2nd class. Delivery normally takes&nbsp;</font><strong><font color="#873d92">3-5 working days</font></strong><font color="#555555">&nbsp;for standard service.</font></li>
                <li>We will only send replacement items once Royal Mail confirms the item is lost.</li>
                <li>As Per eBay Guidelines, We Are Unable to Change Your Shipping Address Once We Received Your Payment.</li>
            </ul>

            <h3 style="color:#222; margin-top:10px;">RETURNS & REFUNDS</h3>
            <ul style="list-style-type: disc; padding-left:20px; color:#555;">
                <li><font color="#555555">We have a</font><strong><font color="#9e2048">&nbsp;60 days</font></strong><font color="#555555">&nbsp;no-quibble return policy.</font></li>
                <li>Buyer pays for the return postage.</li>
            </ul>

            <h3 style="font-family: Arial, sans-serif; margin-top: 20px;">CONTACT</h3>
            <ul style="font-family: Arial, sans-serif; color: rgb(51, 51, 51); line-height: 1.6; padding-left: 20px;">
                <li>If you have any questions or concerns, please send a message to the eBay messaging system; we will get back within 24hrs.</li>
                <li>Working Days: Monday - Friday</li>
                <li>Working Hours: 8:00 AM - 4:00 PM</li>
            </ul>
        </details>
"##;

fn shipping_details(record: &ListingRecord) -> String {
    let s = &record.shipping_info;
    format!(
        r#"
        <!-- SHIPPING DETAILS -->
        <details style="{PANEL_STYLE}">
            <summary style="{SUMMARY_STYLE}">SHIPPING DETAILS</summary>
            <ul style="list-style-type: disc; padding-left:20px; color:#555;">
                <li><strong>FREE SHIPPING:</strong>&nbsp;{free}</li>
                <li><strong>FIRST CLASS:</strong>&nbsp;{first}</li>
                <li><strong>INTERNATIONAL ORDERS:</strong>&nbsp;{intl}</li>
            </ul>
        </details>
"#,
        free = s.free_shipping,
        first = s.first_class,
        intl = s.international,
    )
}

fn about_us(record: &ListingRecord) -> String {
    let alt = if record.logo_alt.is_empty() {
        format!("{} - eBay Store Logo", record.title)
    } else {
        record.logo_alt.clone()
    };
    format!(
        r#"
        <!-- ABOUT US -->
        <details style="padding:15px; border: 1px solid #dddddd; border-radius: 5px; margin: 0;">
            <summary style="{SUMMARY_STYLE}">ABOUT US</summary>
            <a href="{store}" target="_blank" style="text-decoration:none;">
                <img src="{logo}" alt="{alt}" style="margin: 10px; padding-top: 20px; max-width:180px; object-fit:contain;">
            </a>
            <p style="color:#555; margin-top:10px;">{about}</p>
        </details>
"#,
        store = record.ebay_store_url,
        logo = record.logo_url,
        about = record.about_us,
    )
}
