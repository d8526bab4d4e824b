//! HTML body of the booking confirmation email.

use chrono::NaiveDate;

use crate::server::model::booking::BookingDetails;

pub const CONFIRMATION_SUBJECT: &str = "Resort Camping Booking";

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td style="padding: 6px 12px; color: #555;">{}</td><td style="padding: 6px 12px; font-weight: bold;">{}</td></tr>"#,
        label,
        escape(value)
    )
}

/// Renders the confirmation email for a booking.
///
/// Every field taken from the booking, accommodation or owner is HTML-escaped. The map
/// link is only included when the accommodation has coordinates.
pub fn render_confirmation(details: &BookingDetails) -> String {
    let booking = &details.booking;
    let accommodation_name = details
        .accommodation
        .as_ref()
        .map(|a| a.name.as_str())
        .unwrap_or_default();
    let accommodation_address = details
        .accommodation
        .as_ref()
        .and_then(|a| a.address.as_deref())
        .unwrap_or_default();
    let map_link = details
        .accommodation
        .as_ref()
        .and_then(|a| a.coordinates())
        .map(|(lat, lng)| {
            format!(
                r#"<p><a href="https://www.google.com/maps?q={lat},{lng}" style="color: #2563eb;">View location on map</a></p>"#
            )
        })
        .unwrap_or_default();
    let owner_email = details.owner_email.as_deref().unwrap_or_default();

    let rows = [
        row("Booking ID", &booking.id.to_string()),
        row("Booking Date", &format_date(booking.created_at.date_naive())),
        row("Check-in", &format_date(booking.check_in)),
        row("Check-out", &format_date(booking.check_out)),
        row("Mobile", booking.guest_phone.as_deref().unwrap_or_default()),
        row(
            "Total Guests",
            &(booking.adults + booking.children).to_string(),
        ),
        row("Adults", &booking.adults.to_string()),
        row("Children", &booking.children.to_string()),
        row("Rooms", &booking.rooms.to_string()),
        row("Veg Meals", &booking.food_veg.to_string()),
        row("Non-Veg Meals", &booking.food_nonveg.to_string()),
        row("Jain Meals", &booking.food_jain.to_string()),
        row("Total Amount", &format!("{:.2}", booking.total_amount)),
        row("Advance Paid", &format!("{:.2}", booking.advance_amount)),
        row("Remaining Amount", &format!("{:.2}", booking.remaining_amount())),
    ]
    .concat();

    let owner_contact = if owner_email.is_empty() {
        String::new()
    } else {
        let owner_email = escape(owner_email);
        format!(
            r#"<p>For any questions about your stay, contact <a href="mailto:{owner_email}">{owner_email}</a>.</p>"#
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{subject}</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #166534;">Your booking is confirmed</h2>
        <p>Dear {guest_name},</p>
        <p>Thank you for booking with us. Your reservation details are below.</p>
        <h3>{accommodation_name}</h3>
        <p>{accommodation_address}</p>
        {map_link}
        <table style="border-collapse: collapse; width: 100%;">{rows}</table>
        {owner_contact}
    </div>
</body>
</html>
"#,
        subject = CONFIRMATION_SUBJECT,
        guest_name = escape(&booking.guest_name),
        accommodation_name = escape(accommodation_name),
        accommodation_address = escape(accommodation_address),
    )
}
