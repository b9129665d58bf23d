//! # Receipt Rendering
//!
//! Fixed-width textual receipt layout for small-paper thermal printers.
//!
//! ## Layout (80mm paper, monospace)
//! ```text
//!            AURUM JEWELLERS
//!       12 Bazaar Street, Old Town
//! ------------------------------------------
//! Date: 26/08/2026             Time: 11:05 AM
//! Customer: Meena Kumari
//! Gold Rate: ₹6000.00/gram
//! ------------------------------------------
//! ITEM                  WT(g)  GOLD  SEIKULI
//! ...
//! ------------------------------------------
//! Subtotal:                       ₹12400.00
//! GST (3%):                         ₹372.00
//! NET PAYABLE:                    ₹12772.00
//! ------------------------------------------
//!         THANK YOU, VISIT US AGAIN!
//! ```
//!
//! Rendering is pure string formatting; sending the text to a printer
//! belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::time::store_tz;
use crate::types::{Bill, BillItem};

// =============================================================================
// Receipt Layout
// =============================================================================

/// Store header and paper geometry for receipts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLayout {
    /// Store name (printed centered at the top).
    pub store_name: String,

    /// Address lines under the store name.
    pub address_lines: Vec<String>,

    /// Paper width in characters (typically 32, 42 or 48).
    pub paper_width: usize,

    /// Footer line (centered at the bottom).
    pub footer: String,
}

impl Default for ReceiptLayout {
    fn default() -> Self {
        ReceiptLayout {
            store_name: "AURUM JEWELLERS".to_string(),
            address_lines: vec!["12 Bazaar Street, Old Town".to_string()],
            paper_width: 42,
            footer: "THANK YOU, VISIT US AGAIN!".to_string(),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders a finalized bill and its line items as receipt text.
pub fn render(bill: &Bill, items: &[BillItem], layout: &ReceiptLayout) -> String {
    let w = layout.paper_width;
    let mut out = Vec::new();

    out.push(center(&layout.store_name, w));
    for line in &layout.address_lines {
        out.push(center(line, w));
    }
    out.push(rule(w));

    let local = bill.bill_date.with_timezone(&store_tz());
    out.push(justify(
        &format!("Date: {}", local.format("%d/%m/%Y")),
        &format!("Time: {}", local.format("%I:%M %p")),
        w,
    ));
    out.push(format!("Customer: {}", bill.customer_name));
    out.push(format!("Gold Rate: {}/gram", bill.gold_rate()));
    out.push(rule(w));

    out.push(justify("ITEM", "WT(g)  GOLD  SEIKULI", w));
    for item in items {
        out.push(item.category_name.clone());
        out.push(justify(
            "",
            &format!(
                "{}g  {}  {}",
                item.weight().grams_display(),
                item.gold_amount(),
                item.seikuli_amount()
            ),
            w,
        ));
        out.push(justify(
            "",
            &format!("(seikuli {}/g)", Money::from_paise(item.seikuli_rate_paise)),
            w,
        ));
    }
    out.push(rule(w));

    out.push(justify("Subtotal:", &bill.subtotal().to_string(), w));
    out.push(justify(
        &format!("GST ({}%):", gst_percent_label(bill.gst_bps)),
        &bill.gst_amount().to_string(),
        w,
    ));
    out.push(justify("NET PAYABLE:", &bill.grand_total().to_string(), w));
    out.push(rule(w));

    out.push(center(&layout.footer, w));
    out.push(String::new());

    out.join("\n")
}

/// Formats basis points as a trimmed percentage label: 300 → "3",
/// 250 → "2.5", 325 → "3.25".
fn gst_percent_label(bps: u32) -> String {
    if bps % 100 == 0 {
        format!("{}", bps / 100)
    } else if bps % 10 == 0 {
        format!("{}.{}", bps / 100, (bps % 100) / 10)
    } else {
        format!("{}.{:02}", bps / 100, bps % 100)
    }
}

/// A full-width dashed rule.
fn rule(width: usize) -> String {
    "-".repeat(width)
}

/// Centers text on the paper width.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Left- and right-justifies two fragments on one line.
fn justify(left: &str, right: &str, width: usize) -> String {
    let used = left.chars().count() + right.chars().count();
    if used + 1 > width {
        return format!("{} {}", left, right);
    }
    format!("{}{}{}", left, " ".repeat(width - used), right)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;

    fn test_bill() -> (Bill, Vec<BillItem>) {
        let bill = Bill {
            id: "bill-1".to_string(),
            customer_name: "Meena Kumari".to_string(),
            // 11:05 IST on 26 Aug 2026
            bill_date: Utc.with_ymd_and_hms(2026, 8, 26, 5, 35, 0).unwrap(),
            gold_rate_paise: 600_000,
            gst_bps: 300,
            subtotal_paise: 1_240_000,
            gst_paise: 37_200,
            grand_total_paise: 1_277_200,
        };
        let items = vec![BillItem {
            id: "item-1".to_string(),
            category_id: "cat-1".to_string(),
            category_name: "Ring".to_string(),
            weight_mg: 2_000,
            seikuli_rate_paise: 20_000,
            gold_amount_paise: 1_200_000,
            seikuli_amount_paise: 40_000,
            line_total_paise: 1_240_000,
        }];
        (bill, items)
    }

    #[test]
    fn test_render_contains_all_bill_fields() {
        let (bill, items) = test_bill();
        let text = render(&bill, &items, &ReceiptLayout::default());

        assert!(text.contains("AURUM JEWELLERS"));
        assert!(text.contains("Customer: Meena Kumari"));
        assert!(text.contains("Gold Rate: ₹6000.00/gram"));
        assert!(text.contains("Ring"));
        assert!(text.contains("2g"));
        assert!(text.contains("₹12000.00")); // gold amount
        assert!(text.contains("₹400.00")); // seikuli amount
        assert!(text.contains("GST (3%):"));
        assert!(text.contains("₹372.00"));
        assert!(text.contains("NET PAYABLE:"));
        assert!(text.contains("₹12772.00"));
        assert!(text.contains("THANK YOU"));
    }

    #[test]
    fn test_render_uses_store_local_date() {
        let (bill, items) = test_bill();
        let text = render(&bill, &items, &ReceiptLayout::default());

        assert!(text.contains("Date: 26/08/2026"));
        assert!(text.contains("Time: 11:05 AM"));
    }

    #[test]
    fn test_lines_fit_paper_width() {
        let (bill, items) = test_bill();
        let layout = ReceiptLayout::default();
        let text = render(&bill, &items, &layout);

        for line in text.lines() {
            assert!(
                line.chars().count() <= layout.paper_width,
                "line too wide: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_gst_percent_label() {
        assert_eq!(gst_percent_label(300), "3");
        assert_eq!(gst_percent_label(250), "2.5");
        assert_eq!(gst_percent_label(325), "3.25");
        assert_eq!(gst_percent_label(0), "0");
    }

    #[test]
    fn test_center_and_justify() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(justify("L:", "R", 6), "L:   R");
        // Overlong content degrades to a single space separator.
        assert_eq!(justify("longleft", "longright", 6), "longleft longright");
    }
}
