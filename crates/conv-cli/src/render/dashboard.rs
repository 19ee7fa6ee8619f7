use crate::render::{format, zone_label};

use conv_core::{EnrollmentType, PaymentType, Statistics, UserProfile};

/// Shown instead of the totals when they cannot be fetched
pub const STATS_FAILED_MESSAGE: &str = "Could not load the statistics";

/// Distribution label per payment type, as the dashboard titles them
fn payment_heading(payment: PaymentType) -> &'static str {
    match payment {
        PaymentType::ForeignCurrency => "Foreign currency payments",
        PaymentType::MobilePayment => "Mobile payments",
        PaymentType::Transfer => "Transfers",
    }
}

pub fn render(user: Option<&UserProfile>, stats: &Statistics) -> String {
    let mut out = String::new();

    if let Some(user) = user {
        out.push_str(&format!("Welcome, {}\n", user.display_name()));
        out.push_str(&format!("Zone: {}\n\n", zone_label(user)));
    }

    out.push_str(&format!("Total registrations: {}\n", stats.total));
    out.push_str(&format!("Total amount: ${}\n", format::amount(stats.monto_total)));
    for enrollment in EnrollmentType::ALL {
        out.push_str(&format!(
            "{} enrollments: {}\n",
            enrollment.label(),
            stats.enrollment_count(enrollment)
        ));
    }

    out.push_str("\nPayment distribution\n");
    for payment in PaymentType::ALL {
        let count = stats.payment_count(payment);
        out.push_str(&format!(
            "  {}: {} ({} of total)\n",
            payment_heading(payment),
            count,
            format::percent(stats.share_of_total(count))
        ));
    }

    out
}
