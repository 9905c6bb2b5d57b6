use crate::infra::RecordingMailTransport;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use wedding_rsvp::config::AppConfig;
use wedding_rsvp::error::AppError;
use wedding_rsvp::rsvp::{
    templates, Attendance, GuestRoster, RsvpFlow, RsvpResponse, RsvpService, AUTO_RESET_DELAY,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Roster file to exercise (defaults to the configured path)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Guest name to submit
    #[arg(long, default_value = "Maria Santos")]
    pub(crate) name: String,
    /// Reply-to email for the submission
    #[arg(long, default_value = "maria@example.com")]
    pub(crate) email: String,
    /// Join via Zoom instead of in person
    #[arg(long)]
    pub(crate) zoom: bool,
    /// Walk the decline branch instead of submitting
    #[arg(long)]
    pub(crate) decline: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RosterCheckArgs {
    /// Name to match
    pub(crate) name: String,
    /// Roster file (defaults to the configured path)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) fn run_roster_check(args: RosterCheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = args.roster.unwrap_or(config.roster.path);
    let roster = GuestRoster::load(&path)?;

    println!(
        "Roster: {} ({} guests) — {} in {} days",
        path.display(),
        roster.len(),
        config.event.couple,
        config.event.days_until(Local::now().date_naive())
    );

    match roster.find(&args.name) {
        Some(guest) => {
            println!("'{}' is on the list as '{}'", args.name, guest.name);
            println!("  seat:     {}", templates::table_label(guest.table));
            println!(
                "  category: {}",
                guest.category.as_deref().unwrap_or("(none)")
            );
        }
        None => {
            println!("'{}' is not on the guest list", args.name);
        }
    }

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let path = args.roster.clone().unwrap_or_else(|| config.roster.path.clone());
    let roster = Arc::new(GuestRoster::load(&path)?);

    let guest_count = roster.len();
    let transport = Arc::new(RecordingMailTransport::default());
    let service = RsvpService::new(
        roster,
        transport.clone(),
        &config.mail,
        config.event.clone(),
    );

    println!(
        "RSVP demo — {} on {} ({guest_count} guests on the roster)",
        config.event.couple,
        config.event.date_label(),
    );

    let mut flow = RsvpFlow::new();
    announce(&flow);

    if args.decline {
        flow.choose_decline().expect("initial panel allows decline");
        announce(&flow);
        println!(
            "Terminal panel; the site resets to the initial panel after {}s.",
            AUTO_RESET_DELAY.as_secs()
        );
        return Ok(());
    }

    let attendance = if args.zoom {
        Attendance::Zoom
    } else {
        Attendance::InPerson
    };

    flow.choose_attending().expect("initial panel allows attending");
    announce(&flow);
    flow.select_attendance(attendance)
        .expect("attendance panel accepts a selection");
    announce(&flow);

    flow.enter_name(args.name.as_str());
    flow.enter_email(args.email.as_str());
    let request = match flow.begin_submission() {
        Ok(request) => request,
        Err(err) => {
            println!("Submission refused client-side: {err}");
            return Ok(());
        }
    };
    println!(
        "Submitting {{name: {:?}, email: {:?}, attendance: {:?}}}",
        request.name,
        request.email,
        attendance.label()
    );

    match service.handle(request).await {
        Ok(receipt) => {
            let response = RsvpResponse::from(receipt.clone());
            flow.submission_succeeded(&response)
                .expect("form panel accepts the response");
            announce(&flow);
            if receipt.on_list {
                println!(
                    "On the list — {}, category {}",
                    templates::table_label(receipt.table),
                    receipt.category.as_deref().unwrap_or("(none)")
                );
            } else {
                println!("Not on the list — regrets email sent");
            }
        }
        Err(err) => {
            flow.submission_failed();
            println!("Submission failed ({err}); the form stays editable for a retry");
            return Ok(());
        }
    }

    let messages = transport.messages();
    println!("Captured {} outbound emails:", messages.len());
    for message in &messages {
        println!("  -> {}: {}", message.to, message.subject);
    }
    println!(
        "Terminal panel; the site resets to the initial panel after {}s.",
        AUTO_RESET_DELAY.as_secs()
    );

    Ok(())
}

fn announce(flow: &RsvpFlow) {
    println!("[panel] {}", flow.panel().label());
}
