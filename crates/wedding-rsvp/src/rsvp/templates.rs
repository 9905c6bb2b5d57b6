//! Pure HTML builders for the three RSVP notifications. No transport or I/O
//! concerns here: every function maps a context to markup so the rendered
//! bodies can be asserted on without sending real mail.

use std::fmt::Write as _;

use super::domain::{Attendance, EventDetails};

/// Operator-facing notification context. `on_list` toggles the unlisted
/// warning variant.
#[derive(Debug, Clone)]
pub struct OperatorNotice<'a> {
    pub guest_name: &'a str,
    pub email: &'a str,
    pub attendance: Attendance,
    pub on_list: bool,
}

/// Guest-facing confirmation context with the seating metadata to embed.
#[derive(Debug, Clone)]
pub struct GuestConfirmation<'a> {
    pub guest_name: &'a str,
    pub attendance: Attendance,
    pub table: Option<u32>,
    pub category: Option<&'a str>,
}

/// Seat line shown to confirmed in-person guests; "Table TBA" when the
/// roster has no assignment yet.
pub fn table_label(table: Option<u32>) -> String {
    match table {
        Some(table) => format!("Table {table}"),
        None => "Table TBA".to_string(),
    }
}

pub fn operator_subject(notice: &OperatorNotice<'_>) -> String {
    if notice.on_list {
        format!(
            "💌 New RSVP: {} ({})",
            notice.guest_name,
            notice.attendance.display_label()
        )
    } else {
        format!(
            "⚠️ RSVP attempt from unlisted guest: {}",
            notice.guest_name
        )
    }
}

pub fn operator_html(notice: &OperatorNotice<'_>, event: &EventDetails) -> String {
    let guest_line = if notice.on_list {
        escape_html(notice.guest_name)
    } else {
        format!("{} ⚠️ (NOT ON GUEST LIST)", escape_html(notice.guest_name))
    };
    let badge = attendance_badge(notice.attendance);

    let mut html = String::new();
    let _ = writeln!(
        html,
        "<div style=\"font-family:'Inter',Arial,sans-serif;max-width:540px;margin:0 auto;border:1px solid #e5e5e5;border-radius:12px;\">"
    );
    let _ = writeln!(
        html,
        "  <div style=\"background:#667686;padding:28px 32px;text-align:center;\">"
    );
    let _ = writeln!(
        html,
        "    <h1 style=\"color:#fff;font-family:Georgia,serif;margin:0;font-size:26px;\">New RSVP Received 💌</h1>"
    );
    let _ = writeln!(
        html,
        "    <p style=\"color:rgba(255,255,255,0.85);margin:6px 0 0;font-size:14px;\">{} — {}</p>",
        escape_html(&event.couple),
        event.date_label()
    );
    let _ = writeln!(html, "  </div>");
    let _ = writeln!(html, "  <div style=\"padding:28px 32px;\">");
    let _ = writeln!(
        html,
        "    <table style=\"width:100%;border-collapse:collapse;font-size:15px;\">"
    );
    let _ = writeln!(
        html,
        "      <tr><td style=\"color:#878787;width:38%;\">Guest Name</td><td style=\"font-weight:600;color:#595d5c;\">{guest_line}</td></tr>"
    );
    let _ = writeln!(
        html,
        "      <tr><td style=\"color:#878787;\">Email</td><td style=\"color:#595d5c;\">{}</td></tr>",
        escape_html(notice.email)
    );
    let _ = writeln!(
        html,
        "      <tr><td style=\"color:#878787;\">Attendance</td><td>{badge}</td></tr>"
    );
    let _ = writeln!(html, "    </table>");
    let _ = writeln!(html, "  </div>");
    let _ = writeln!(
        html,
        "  <div style=\"background:#f8f9fa;padding:14px 32px;font-size:12px;color:#aaa;text-align:center;\">Sent automatically from your wedding RSVP system.</div>"
    );
    let _ = writeln!(html, "</div>");
    html
}

pub fn confirmation_subject(event: &EventDetails) -> String {
    format!(
        "✅ RSVP Confirmed — {}'s Wedding, {}",
        event.couple,
        event.date_label()
    )
}

pub fn confirmation_html(confirmation: &GuestConfirmation<'_>, event: &EventDetails) -> String {
    let first = escape_html(first_name(confirmation.guest_name));

    let mut html = String::new();
    let _ = writeln!(
        html,
        "<div style=\"font-family:'Inter',Arial,sans-serif;max-width:540px;margin:0 auto;border:1px solid #e5e5e5;border-radius:12px;\">"
    );
    let _ = writeln!(html, "{}", header_block(event));
    let _ = writeln!(html, "  <div style=\"padding:32px;\">");
    let _ = writeln!(
        html,
        "    <h2 style=\"font-family:Georgia,serif;color:#667686;font-size:22px;margin:0 0 8px;\">See you there, {first}! 🎉</h2>"
    );
    let _ = writeln!(
        html,
        "    <p style=\"color:#878787;font-size:15px;margin:0 0 20px;\">Your RSVP has been confirmed. We're so excited to celebrate with you!</p>"
    );
    let _ = writeln!(html, "{}", seat_block(confirmation));
    let _ = writeln!(
        html,
        "    <div style=\"border-top:1px solid #f0f0f0;padding-top:20px;font-size:14px;color:#878787;line-height:1.9;\">"
    );
    let _ = writeln!(
        html,
        "      <p style=\"margin:0;\">📅 <strong>Date:</strong> {}</p>",
        event.long_date_label()
    );
    let _ = writeln!(
        html,
        "      <p style=\"margin:0;\">📍 <strong>Venue:</strong> {}</p>",
        escape_html(&event.venue_address)
    );
    let _ = writeln!(
        html,
        "      <p style=\"margin:0;\">⏰ <strong>Ceremony starts:</strong> {}</p>",
        escape_html(&event.ceremony_time)
    );
    let _ = writeln!(html, "    </div>");
    let _ = writeln!(html, "  </div>");
    let _ = writeln!(html, "{}", footer_block(event));
    let _ = writeln!(html, "</div>");
    html
}

pub fn regrets_subject(event: &EventDetails) -> String {
    format!("Thank you for your RSVP — {}'s Wedding", event.couple)
}

pub fn regrets_html(guest_name: &str, event: &EventDetails) -> String {
    let first = escape_html(first_name(guest_name));

    let mut html = String::new();
    let _ = writeln!(
        html,
        "<div style=\"font-family:'Inter',Arial,sans-serif;max-width:540px;margin:0 auto;border:1px solid #e5e5e5;border-radius:12px;\">"
    );
    let _ = writeln!(html, "{}", header_block(event));
    let _ = writeln!(html, "  <div style=\"padding:32px;\">");
    let _ = writeln!(
        html,
        "    <h2 style=\"font-family:Georgia,serif;color:#667686;font-size:20px;margin:0 0 16px;\">Thank you for your RSVP, {first}!</h2>"
    );
    let _ = writeln!(
        html,
        "    <p style=\"color:#595d5c;font-size:15px;line-height:1.8;margin:0 0 14px;\">We truly appreciate your warm wishes and the love you've shown for our special day. 💙</p>"
    );
    let _ = writeln!(
        html,
        "    <p style=\"color:#595d5c;font-size:15px;line-height:1.8;margin:0 0 14px;\">Unfortunately, we have a limited number of seats at our venue and our guest list has already been finalised. We hope you understand — this was a very difficult decision for us.</p>"
    );
    let _ = writeln!(
        html,
        "    <p style=\"color:#595d5c;font-size:15px;line-height:1.8;margin:0;\">We hope to celebrate with you another time soon. Your support and love mean everything to us!</p>"
    );
    let _ = writeln!(html, "  </div>");
    let _ = writeln!(html, "{}", footer_block(event));
    let _ = writeln!(html, "</div>");
    html
}

fn header_block(event: &EventDetails) -> String {
    let mut block = String::new();
    let _ = writeln!(
        block,
        "  <div style=\"background:#667686;padding:32px;text-align:center;\">"
    );
    let _ = writeln!(
        block,
        "    <h1 style=\"color:#fff;font-family:Georgia,serif;margin:0;font-size:32px;\">{}</h1>",
        escape_html(&event.couple)
    );
    let _ = writeln!(
        block,
        "    <p style=\"color:rgba(255,255,255,0.85);margin:8px 0 0;font-size:14px;\">{} • {}</p>",
        event.date_label(),
        escape_html(&event.venue)
    );
    let _ = write!(block, "  </div>");
    block
}

fn footer_block(event: &EventDetails) -> String {
    format!(
        "  <div style=\"background:#667686;padding:20px 32px;text-align:center;\">\n    <p style=\"color:rgba(255,255,255,0.9);font-family:Georgia,serif;font-style:italic;margin:0;font-size:15px;\">\"Made with love — {}\"</p>\n  </div>",
        escape_html(&event.couple)
    )
}

fn seat_block(confirmation: &GuestConfirmation<'_>) -> String {
    let mut block = String::new();
    let _ = writeln!(
        block,
        "    <div style=\"background:#f0f4f8;border-radius:10px;padding:22px 24px;margin:24px 0;text-align:center;\">"
    );
    match confirmation.attendance {
        Attendance::InPerson => {
            let _ = writeln!(
                block,
                "      <p style=\"margin:0 0 6px;color:#878787;font-size:12px;text-transform:uppercase;letter-spacing:1px;\">Your Assigned Seat</p>"
            );
            let _ = writeln!(
                block,
                "      <p style=\"margin:0;font-family:Georgia,serif;font-size:36px;font-weight:700;color:#667686;\">{}</p>",
                table_label(confirmation.table)
            );
            if let Some(category) = confirmation.category {
                let _ = writeln!(
                    block,
                    "      <p style=\"margin:6px 0 0;color:#97adc2;font-size:13px;\">{}</p>",
                    escape_html(category)
                );
            }
            let _ = writeln!(
                block,
                "      <p style=\"font-size:11px;color:#bbb;margin:18px 0 0;font-style:italic;\">A finalised seating chart will be sent closer to the date.</p>"
            );
        }
        Attendance::Zoom => {
            let _ = writeln!(
                block,
                "      <p style=\"margin:0 0 8px;color:#878787;font-size:12px;text-transform:uppercase;letter-spacing:1px;\">How to Join</p>"
            );
            let _ = writeln!(
                block,
                "      <p style=\"margin:0;font-size:16px;color:#595d5c;\">💻 You're joining <strong>via Zoom</strong>!</p>"
            );
            let _ = writeln!(
                block,
                "      <p style=\"margin:10px 0 0;font-size:13px;color:#878787;\">A Zoom link will be emailed to you before the event. Keep an eye on your inbox!</p>"
            );
        }
    }
    let _ = write!(block, "    </div>");
    block
}

fn attendance_badge(attendance: Attendance) -> String {
    let (background, icon) = match attendance {
        Attendance::InPerson => ("#667686", "🏛️"),
        Attendance::Zoom => ("#97adc2", "💻"),
    };
    format!(
        "<span style=\"background:{background};color:#fff;padding:4px 14px;border-radius:20px;font-size:13px;\">{icon} {}</span>",
        attendance.display_label()
    )
}

/// First whitespace-separated token of the submitted name, for greetings.
fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

/// Minimal escaping for user-supplied text interpolated into markup.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> EventDetails {
        EventDetails::default()
    }

    #[test]
    fn confirmation_embeds_table_and_category() {
        let html = confirmation_html(
            &GuestConfirmation {
                guest_name: "Maria Santos",
                attendance: Attendance::InPerson,
                table: Some(5),
                category: Some("Family"),
            },
            &event(),
        );
        assert!(html.contains("See you there, Maria!"));
        assert!(html.contains("Table 5"));
        assert!(html.contains("Family"));
    }

    #[test]
    fn confirmation_falls_back_when_table_unset() {
        let html = confirmation_html(
            &GuestConfirmation {
                guest_name: "Ramon Diaz",
                attendance: Attendance::InPerson,
                table: None,
                category: None,
            },
            &event(),
        );
        assert!(html.contains("Table TBA"));
    }

    #[test]
    fn zoom_confirmation_promises_a_link() {
        let html = confirmation_html(
            &GuestConfirmation {
                guest_name: "Ana Reyes",
                attendance: Attendance::Zoom,
                table: Some(2),
                category: None,
            },
            &event(),
        );
        assert!(html.contains("via Zoom"));
        assert!(html.contains("A Zoom link will be emailed to you"));
        assert!(!html.contains("Your Assigned Seat"));
    }

    #[test]
    fn operator_subject_flags_unlisted_guests() {
        let listed = OperatorNotice {
            guest_name: "Maria Santos",
            email: "maria@example.com",
            attendance: Attendance::InPerson,
            on_list: true,
        };
        assert_eq!(
            operator_subject(&listed),
            "💌 New RSVP: Maria Santos (In-Person)"
        );

        let unlisted = OperatorNotice {
            on_list: false,
            ..listed
        };
        assert_eq!(
            operator_subject(&unlisted),
            "⚠️ RSVP attempt from unlisted guest: Maria Santos"
        );
        assert!(operator_html(&unlisted, &event()).contains("NOT ON GUEST LIST"));
    }

    #[test]
    fn user_supplied_text_is_escaped() {
        let notice = OperatorNotice {
            guest_name: "<script>alert(1)</script>",
            email: "a&b@example.com",
            attendance: Attendance::Zoom,
            on_list: true,
        };
        let html = operator_html(&notice, &event());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&amp;b@example.com"));
    }

    #[test]
    fn regrets_greets_by_first_name() {
        let html = regrets_html("Unknown Person", &event());
        assert!(html.contains("Thank you for your RSVP, Unknown!"));
        assert!(html.contains("guest list has already been finalised"));
    }
}
